//! # Browser session storage
//!
//! [`BrowserStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.sessionStorage`, so values live for the lifetime of
//! the tab and are never shared between tabs.
//!
//! Like the rest of the storage layer it swallows errors: a missing window or
//! a storage access exception reads as "no value" and drops writes.

use crate::storage::KeyValueStore;

/// `sessionStorage`-backed KeyValueStore. Zero-size; the storage handle is
/// looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
