//! In-memory stand-ins for the browser, used by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::host::{
    ClickHandler, PreferenceStore, ReadyHandler, SchemeHandler, SystemScheme, ThemeDocument,
};
use crate::theme::ThemePreference;

#[derive(Default)]
struct DocumentState {
    has_root: bool,
    root_dark: bool,
    has_body: bool,
    body_dark: bool,
    body_writes: usize,
    fail_body: bool,
    loading: bool,
    has_toggle: bool,
    toggle_checked: bool,
    ready_handlers: Vec<ReadyHandler>,
    click_handlers: Vec<Rc<dyn Fn() -> Result<(), ThemeError>>>,
}

/// A page with a root node, an optional body and an optional toggle.
#[derive(Clone)]
pub struct FakeDocument {
    state: Rc<RefCell<DocumentState>>,
}

/// Observable DOM state, for comparing two documents.
#[derive(Debug, PartialEq)]
pub struct DocumentSnapshot {
    pub root_dark: bool,
    pub body_dark: bool,
    pub toggle_checked: bool,
    pub pending_ready: usize,
}

impl FakeDocument {
    /// Fully parsed page with body and toggle.
    pub fn ready() -> Self {
        Self::with_state(DocumentState {
            has_root: true,
            has_body: true,
            has_toggle: true,
            ..DocumentState::default()
        })
    }

    /// Page still parsing `<head>`: no body yet.
    pub fn loading() -> Self {
        Self::with_state(DocumentState {
            has_root: true,
            loading: true,
            has_toggle: true,
            ..DocumentState::default()
        })
    }

    fn with_state(state: DocumentState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn without_toggle(self) -> Self {
        self.state.borrow_mut().has_toggle = false;
        self
    }

    pub fn failing_body(self) -> Self {
        self.state.borrow_mut().fail_body = true;
        self
    }

    /// Finish parsing: the body appears and ready listeners run once.
    pub fn fire_ready(&self) -> Result<(), ThemeError> {
        let handlers = {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            state.has_body = true;
            std::mem::take(&mut state.ready_handlers)
        };
        for handler in handlers {
            handler()?;
        }
        Ok(())
    }

    /// Click the toggle control.
    pub fn click(&self) -> Result<(), ThemeError> {
        let handlers = self.state.borrow().click_handlers.clone();
        for handler in handlers {
            handler()?;
        }
        Ok(())
    }

    pub fn root_dark(&self) -> bool {
        self.state.borrow().root_dark
    }

    pub fn body_dark(&self) -> bool {
        self.state.borrow().body_dark
    }

    pub fn body_writes(&self) -> usize {
        self.state.borrow().body_writes
    }

    pub fn toggle_checked(&self) -> bool {
        self.state.borrow().toggle_checked
    }

    pub fn pending_ready(&self) -> usize {
        self.state.borrow().ready_handlers.len()
    }

    pub fn click_listeners(&self) -> usize {
        self.state.borrow().click_handlers.len()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let state = self.state.borrow();
        DocumentSnapshot {
            root_dark: state.root_dark,
            body_dark: state.body_dark,
            toggle_checked: state.toggle_checked,
            pending_ready: state.ready_handlers.len(),
        }
    }
}

impl ThemeDocument for FakeDocument {
    fn root_is_dark(&self) -> bool {
        self.state.borrow().root_dark
    }

    fn set_root_dark(&self, dark: bool) -> Result<bool, ThemeError> {
        let mut state = self.state.borrow_mut();
        if !state.has_root {
            return Ok(false);
        }
        state.root_dark = dark;
        Ok(true)
    }

    fn set_body_dark(&self, dark: bool) -> Result<bool, ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.fail_body {
            return Err(ThemeError::Dom("body is read-only".to_string()));
        }
        if !state.has_body {
            return Ok(false);
        }
        state.body_dark = dark;
        state.body_writes += 1;
        Ok(true)
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    fn set_toggle_checked(&self, checked: bool) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.has_toggle {
            state.toggle_checked = checked;
        }
        Ok(())
    }

    fn ensure_toggle(&self) -> Result<bool, ThemeError> {
        Ok(self.state.borrow().has_toggle)
    }

    fn once_ready(&self, handler: ReadyHandler) -> Result<(), ThemeError> {
        self.state.borrow_mut().ready_handlers.push(handler);
        Ok(())
    }

    fn on_toggle_click(&self, handler: ClickHandler) -> Result<(), ThemeError> {
        self.state.borrow_mut().click_handlers.push(Rc::from(handler));
        Ok(())
    }
}

#[derive(Default)]
struct StoreState {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// `localStorage` stand-in that can be told to throw like a locked-down
/// browser does.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Rc<RefCell<StoreState>>,
}

impl FakeStore {
    pub fn failing_reads(self) -> Self {
        self.state.borrow_mut().fail_reads = true;
        self
    }

    pub fn failing_writes(self) -> Self {
        self.state.borrow_mut().fail_writes = true;
        self
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().values.get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(ThemeError::Storage("access denied".to_string()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

struct SchemeState {
    current: ThemePreference,
    handlers: Vec<Rc<dyn Fn(ThemePreference) -> Result<(), ThemeError>>>,
}

/// System colour scheme that tests flip by hand.
#[derive(Clone)]
pub struct FakeScheme {
    state: Rc<RefCell<SchemeState>>,
}

impl FakeScheme {
    pub fn new(current: ThemePreference) -> Self {
        Self {
            state: Rc::new(RefCell::new(SchemeState {
                current,
                handlers: Vec::new(),
            })),
        }
    }

    /// Switch the system scheme and notify subscribers.
    pub fn change(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        let handlers = {
            let mut state = self.state.borrow_mut();
            state.current = theme;
            state.handlers.clone()
        };
        for handler in handlers {
            handler(theme)?;
        }
        Ok(())
    }

    pub fn listeners(&self) -> usize {
        self.state.borrow().handlers.len()
    }
}

impl SystemScheme for FakeScheme {
    fn current(&self) -> ThemePreference {
        self.state.borrow().current
    }

    fn subscribe(&self, handler: SchemeHandler) -> Result<(), ThemeError> {
        self.state.borrow_mut().handlers.push(Rc::from(handler));
        Ok(())
    }
}
