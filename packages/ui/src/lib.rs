//! Shared UI for the tutoring client: components, the session context, and
//! the state behind each page.
//!
//! The state modules ([`listing`], [`forms`], [`users`]) do not depend on
//! Dioxus rendering; they take any [`api::Backend`] so they can be tested
//! against a fake.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod error;
pub use error::{require_token, ActionError};

pub mod forms;
pub mod listing;
pub mod sequence;
pub mod users;

mod context;
pub use context::{use_api, use_config, ClientProvider};

mod storage;
pub use storage::session_store;

mod session;
pub use session::{hard_redirect, use_session, LogoutButton, Session, SessionProvider, SessionState};

mod flash;
pub use flash::{show_flash, use_flash, Flash, FlashBanner, FlashLevel, FlashProvider};

#[cfg(test)]
mod testing;
