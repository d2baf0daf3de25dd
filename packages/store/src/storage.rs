//! # Key/value storage seam
//!
//! [`KeyValueStore`] is the minimal interface the session layer needs from the
//! platform: string keys mapped to string values, with no expiry. On the web
//! it is backed by the tab's `sessionStorage` ([`crate::BrowserStore`]); tests
//! and native builds use [`crate::MemoryStore`].
//!
//! Writes are infallible from the caller's point of view. A browser that
//! refuses storage (private mode quota, disabled storage) degrades to "no
//! session", which the views already handle by redirecting to login.

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
