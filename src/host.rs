//! Capabilities the controller needs from its environment.
//!
//! The browser implementations live in `crate::browser`; tests substitute
//! in-memory fakes. Handlers return `Result` so an adapter can decide what a
//! failure inside an event callback means (the browser rethrows it).

use crate::error::ThemeError;
use crate::theme::ThemePreference;

/// Runs once when the document finishes parsing.
pub type ReadyHandler = Box<dyn FnOnce() -> Result<(), ThemeError>>;

/// Runs on every click of the toggle control.
pub type ClickHandler = Box<dyn Fn() -> Result<(), ThemeError>>;

/// Runs on every change of the system colour scheme.
pub type SchemeHandler = Box<dyn Fn(ThemePreference) -> Result<(), ThemeError>>;

/// DOM access: the structural nodes carrying the dark flag, the toggle
/// control, and the document lifecycle.
pub trait ThemeDocument: Clone + 'static {
    /// Whether the root node currently carries the dark flag.
    fn root_is_dark(&self) -> bool;

    /// Set or clear the dark flag on the root node. `Ok(false)` if there is
    /// no root node.
    fn set_root_dark(&self, dark: bool) -> Result<bool, ThemeError>;

    /// Set or clear the dark flag on the body. `Ok(false)` if the body does
    /// not exist yet.
    fn set_body_dark(&self, dark: bool) -> Result<bool, ThemeError>;

    /// True while the document is still being parsed.
    fn is_loading(&self) -> bool;

    /// Mirror the theme into the toggle's checkbox, if the control exists.
    fn set_toggle_checked(&self, checked: bool) -> Result<(), ThemeError>;

    /// Make sure a toggle control is present, rendering one into the mount
    /// point if the page provides one. Returns whether a control exists.
    fn ensure_toggle(&self) -> Result<bool, ThemeError>;

    /// Register a one-shot listener on the document-ready signal.
    fn once_ready(&self, handler: ReadyHandler) -> Result<(), ThemeError>;

    /// Register a click listener on the toggle control.
    fn on_toggle_click(&self, handler: ClickHandler) -> Result<(), ThemeError>;
}

/// Key-value persistence for the explicit user choice.
pub trait PreferenceStore: Clone + 'static {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The operating environment's colour-scheme signal.
pub trait SystemScheme: Clone + 'static {
    fn current(&self) -> ThemePreference;
    fn subscribe(&self, handler: SchemeHandler) -> Result<(), ThemeError>;
}
