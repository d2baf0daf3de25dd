//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): the tab's `sessionStorage` via [`store::BrowserStore`]
//! - **Native** (tests, tooling): one process-wide [`store::MemoryStore`]

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
use std::sync::OnceLock;

/// Create a platform-appropriate session store.
///
/// Every call sees the same underlying values, so views may construct one
/// whenever they need it.
pub fn session_store() -> store::SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static FALLBACK: OnceLock<store::MemoryStore> = OnceLock::new();
        store::SessionStore::new(FALLBACK.get_or_init(store::MemoryStore::new).clone())
    }
}
