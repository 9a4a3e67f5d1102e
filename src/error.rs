use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Listener error: {0}")]
    Listener(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Best-effort message for a value thrown by a browser API.
pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Rethrown failures show up in the console as real `Error` objects.
impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
