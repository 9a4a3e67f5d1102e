use web_sys::Storage;

use crate::error::{js_message, ThemeError};
use crate::host::PreferenceStore;

/// `window.localStorage`, which privacy modes may deny outright.
#[derive(Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn new(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage denied: {}", js_message(&e));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ThemeError::Storage("localStorage is unavailable".to_string()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}
