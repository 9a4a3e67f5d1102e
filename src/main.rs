mod browser;
mod components;
mod config;
mod controller;
mod error;
mod host;
#[cfg(test)]
mod testing;
mod theme;

use std::rc::Rc;

use browser::{BrowserDocument, BrowserScheme, BrowserStorage};
use config::ThemeConfig;
use controller::ThemeController;
use error::ThemeError;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = start() {
        web_sys::console::warn_1(&format!("Dark mode unavailable: {err}").into());
    }
}

fn start() -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;

    // Logging is configured by the page, so config problems are reported
    // only once the logger is up.
    let (config, config_error) = match ThemeConfig::from_window(&window) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (ThemeConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("Dark mode logging unavailable: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("Ignoring window.{}: {err}", config::CONFIG_GLOBAL);
    }

    let config = Rc::new(config);
    let document = BrowserDocument::new(&window, config.clone())?;
    let store = BrowserStorage::new(&window);
    let scheme = BrowserScheme::new(&window, &config.media_query);

    ThemeController::new(document, store, scheme, config).install()
}
