//! Page-level settings for the theme controller.
//!
//! Everything has a default matching the site's markup. A page can override
//! any field by defining `window.darkModeConfig` before the script loads:
//!
//! ```js
//! window.darkModeConfig = { storageKey: "site-theme", logLevel: "debug" };
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{js_message, ThemeError};

/// Name of the global a host page may define to override defaults.
pub const CONFIG_GLOBAL: &str = "darkModeConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Persistence key for the explicit user choice.
    pub storage_key: String,
    /// Class toggled on `<html>` and `<body>`.
    pub dark_class: String,
    /// Selector of the clickable toggle control.
    pub toggle_selector: String,
    /// Selector of the checkbox inside the toggle control.
    pub toggle_input_selector: String,
    pub media_query: String,
    /// Where to render a toggle when the page ships none.
    pub toggle_mount: String,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
            toggle_selector: ".dark-toggle".to_string(),
            toggle_input_selector: "input[type=\"checkbox\"]".to_string(),
            media_query: "(prefers-color-scheme: dark)".to_string(),
            toggle_mount: "[data-dark-toggle-mount]".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Read overrides from the page. `Ok(None)` when the page defines none.
    pub fn from_window(window: &web_sys::Window) -> Result<Option<Self>, ThemeError> {
        let raw = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ThemeError::Config(js_message(&e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(raw)
            .map(Some)
            .map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Console log level; unrecognised names fall back to `warn`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }

    /// Selector for the checkbox whose checked state mirrors the theme.
    pub fn toggle_input(&self) -> String {
        format!("{} {}", self.toggle_selector, self.toggle_input_selector)
    }
}
