pub mod dark_toggle;
