//! # Session persistence
//!
//! [`SessionStore`] owns the three session keys the application writes to
//! per-tab storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | `access_token` | Bearer token sent with authenticated requests |
//! | `refresh_token` | Stored alongside the access token; never used for renewal |
//! | `is_staff` | `"true"` / `"false"`, learned from `/user/me/` after login |
//!
//! Nothing here tracks expiry. A session lasts until [`SessionStore::logout`]
//! or until the tab is closed.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const IS_STAFF_KEY: &str = "is_staff";

/// The bearer token pair issued by `/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

/// Typed view over the session keys of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current token pair, if an access token is stored.
    pub fn tokens(&self) -> Option<Tokens> {
        let access = self.access_token()?;
        let refresh = self.storage.get(REFRESH_TOKEN_KEY).unwrap_or_default();
        Some(Tokens { access, refresh })
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn login(&self, tokens: &Tokens) {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh);
    }

    pub fn is_staff(&self) -> bool {
        self.storage
            .get(IS_STAFF_KEY)
            .map(|flag| flag == "true")
            .unwrap_or(false)
    }

    pub fn set_staff(&self, is_staff: bool) {
        self.storage
            .set(IS_STAFF_KEY, if is_staff { "true" } else { "false" });
    }

    /// Remove both tokens and the staff flag.
    pub fn logout(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(IS_STAFF_KEY);
    }
}
