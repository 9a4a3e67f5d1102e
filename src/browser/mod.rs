//! `web-sys` implementations of the controller's collaborators.

mod document;
mod scheme;
mod storage;

pub use document::BrowserDocument;
pub use scheme::BrowserScheme;
pub use storage::BrowserStorage;
