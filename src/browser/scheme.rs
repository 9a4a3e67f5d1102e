use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::error::{js_message, ThemeError};
use crate::host::{SchemeHandler, SystemScheme};
use crate::theme::ThemePreference;

/// `matchMedia("(prefers-color-scheme: dark)")` and its change events.
///
/// Browsers without `matchMedia` report light and never change.
#[derive(Clone)]
pub struct BrowserScheme {
    query: Option<MediaQueryList>,
}

impl BrowserScheme {
    pub fn new(window: &web_sys::Window, media_query: &str) -> Self {
        let query = window.match_media(media_query).ok().flatten();
        if query.is_none() {
            log::debug!("matchMedia unsupported, assuming light system scheme");
        }
        Self { query }
    }
}

impl SystemScheme for BrowserScheme {
    fn current(&self) -> ThemePreference {
        ThemePreference::from_dark_flag(self.query.as_ref().map_or(false, |q| q.matches()))
    }

    fn subscribe(&self, handler: SchemeHandler) -> Result<(), ThemeError> {
        let Some(query) = &self.query else {
            return Ok(());
        };

        let closure = Closure::<dyn Fn(MediaQueryListEvent) -> Result<(), JsValue>>::new(
            move |event: MediaQueryListEvent| {
                handler(ThemePreference::from_dark_flag(event.matches())).map_err(JsValue::from)
            },
        );
        query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Listener(js_message(&e)))?;
        closure.forget();
        Ok(())
    }
}
