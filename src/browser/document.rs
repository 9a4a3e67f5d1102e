use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, HtmlInputElement,
};

use crate::components::dark_toggle::mount_dark_toggle;
use crate::config::ThemeConfig;
use crate::error::{js_message, ThemeError};
use crate::host::{ClickHandler, ReadyHandler, ThemeDocument};

const READY_EVENT: &str = "DOMContentLoaded";

/// `document.readyState` before `DOMContentLoaded`; later states are
/// `interactive` and `complete`.
fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// The live page, addressed through the selectors in [`ThemeConfig`].
#[derive(Clone)]
pub struct BrowserDocument {
    document: Document,
    config: Rc<ThemeConfig>,
}

impl BrowserDocument {
    pub fn new(window: &web_sys::Window, config: Rc<ThemeConfig>) -> Result<Self, ThemeError> {
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self { document, config })
    }

    fn query(&self, selector: &str) -> Result<Option<Element>, ThemeError> {
        self.document
            .query_selector(selector)
            .map_err(|e| ThemeError::Dom(format!("{selector}: {}", js_message(&e))))
    }

    fn set_dark_class(&self, element: &Element, dark: bool) -> Result<(), ThemeError> {
        element
            .class_list()
            .toggle_with_force(&self.config.dark_class, dark)
            .map(|_| ())
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }
}

impl ThemeDocument for BrowserDocument {
    fn root_is_dark(&self) -> bool {
        self.document
            .document_element()
            .map_or(false, |html| html.class_list().contains(&self.config.dark_class))
    }

    fn set_root_dark(&self, dark: bool) -> Result<bool, ThemeError> {
        match self.document.document_element() {
            Some(html) => {
                self.set_dark_class(&html, dark)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_body_dark(&self, dark: bool) -> Result<bool, ThemeError> {
        match self.document.body() {
            Some(body) => {
                self.set_dark_class(&body, dark)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn is_loading(&self) -> bool {
        is_loading_state(&self.document.ready_state())
    }

    fn set_toggle_checked(&self, checked: bool) -> Result<(), ThemeError> {
        let input = self
            .query(&self.config.toggle_input())?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            input.set_checked(checked);
        }
        Ok(())
    }

    fn ensure_toggle(&self) -> Result<bool, ThemeError> {
        if self.query(&self.config.toggle_selector)?.is_some() {
            return Ok(true);
        }
        let Some(mount) = self.query(&self.config.toggle_mount)? else {
            return Ok(false);
        };
        let mount = mount.dyn_into::<HtmlElement>().map_err(|_| {
            ThemeError::Dom(format!("{} is not an HTML element", self.config.toggle_mount))
        })?;

        log::debug!("Rendering theme toggle into {}", self.config.toggle_mount);
        mount_dark_toggle(mount);

        Ok(self.query(&self.config.toggle_selector)?.is_some())
    }

    fn once_ready(&self, handler: ReadyHandler) -> Result<(), ThemeError> {
        let options = AddEventListenerOptions::new();
        options.set_once(true);

        let callback = Closure::once_into_js(move || handler().map_err(JsValue::from));
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                READY_EVENT,
                callback.unchecked_ref(),
                &options,
            )
            .map_err(|e| ThemeError::Listener(js_message(&e)))
    }

    fn on_toggle_click(&self, handler: ClickHandler) -> Result<(), ThemeError> {
        let Some(toggle) = self.query(&self.config.toggle_selector)? else {
            return Ok(());
        };

        // Errors are rethrown to the page's unhandled-error reporting.
        let closure = Closure::<dyn Fn() -> Result<(), JsValue>>::new(move || {
            handler().map_err(JsValue::from)
        });
        toggle
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Listener(js_message(&e)))?;
        closure.forget();
        Ok(())
    }
}
