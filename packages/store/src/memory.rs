use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, Tokens, ACCESS_TOKEN_KEY, IS_STAFF_KEY, REFRESH_TOKEN_KEY};

    fn tokens() -> Tokens {
        Tokens {
            access: "access-abc".to_string(),
            refresh: "refresh-xyz".to_string(),
        }
    }

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert!(store.get("k").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("access_token", "t");
        assert_eq!(other.get("access_token").as_deref(), Some("t"));
    }

    #[test]
    fn test_login_persists_both_tokens() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());

        assert!(session.tokens().is_none());
        assert!(!session.is_logged_in());

        session.login(&tokens());

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("access-abc"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-xyz"));
        assert_eq!(session.tokens(), Some(tokens()));
        assert_eq!(session.access_token().as_deref(), Some("access-abc"));
    }

    #[test]
    fn test_staff_flag_roundtrip() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());

        assert!(!session.is_staff());
        session.set_staff(true);
        assert_eq!(store.get(IS_STAFF_KEY).as_deref(), Some("true"));
        assert!(session.is_staff());
        session.set_staff(false);
        assert!(!session.is_staff());
    }

    #[test]
    fn test_malformed_staff_flag_is_false() {
        let store = MemoryStore::new();
        store.set(IS_STAFF_KEY, "yes please");
        assert!(!SessionStore::new(store).is_staff());
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());

        session.login(&tokens());
        session.set_staff(true);
        session.logout();

        assert!(session.tokens().is_none());
        assert!(session.access_token().is_none());
        assert!(!session.is_staff());
        assert!(store.is_empty());
    }

    #[test]
    fn test_access_without_refresh_is_still_logged_in() {
        // An access token alone is enough to authorise requests.
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "only-access");
        let session = SessionStore::new(store);

        assert!(session.is_logged_in());
        assert_eq!(session.access_token().as_deref(), Some("only-access"));
        assert_eq!(
            session.tokens(),
            Some(Tokens {
                access: "only-access".to_string(),
                refresh: String::new(),
            })
        );
    }

    #[test]
    fn test_empty_access_token_is_logged_out() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "");
        let session = SessionStore::new(store);
        assert!(!session.is_logged_in());
        assert!(session.tokens().is_none());
    }
}
