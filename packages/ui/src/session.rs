//! Session context and hooks for the UI.
//!
//! [`Session`] is the one place views read tokens from and the only writer of
//! the session store. It wraps a signal, so every view re-renders when the
//! visitor logs in or out.

use api::{Backend, UserInfo};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore, Tokens};

use crate::context::use_api;
use crate::storage::session_store;
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// What the UI knows about the current visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub tokens: Option<Tokens>,
    /// Filled in by `/user/me/`; `None` until that lookup succeeds.
    pub user: Option<UserInfo>,
    /// Staff flag remembered in session storage, used until `user` is known.
    pub is_staff: bool,
    /// A `/user/me/` lookup is in flight.
    pub loading: bool,
}

impl SessionState {
    /// State as persisted in the session store.
    pub fn restore<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        let tokens = store.tokens();
        Self {
            loading: tokens.is_some(),
            is_staff: tokens.is_some() && store.is_staff(),
            tokens,
            user: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access.as_str())
    }

    /// The authenticated user, if both a token and the account are known.
    pub fn viewer(&self) -> Option<&UserInfo> {
        self.tokens.as_ref().and(self.user.as_ref())
    }

    pub fn is_admin(&self) -> bool {
        self.is_logged_in() && self.user.as_ref().map_or(self.is_staff, |u| u.is_staff)
    }

    /// Admin-only navigation waits until `/user/me/` has answered.
    pub fn shows_admin_link(&self) -> bool {
        !self.loading && self.is_admin()
    }

    /// The `/user/me/` lookup failed. A rejected token also drops the
    /// remembered staff flag.
    pub fn lookup_failed(&mut self, token_rejected: bool) {
        self.loading = false;
        if token_rejected {
            self.is_staff = false;
        }
    }
}

/// Handle to the session context. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    pub fn tokens(&self) -> Option<Tokens> {
        self.state.read().tokens.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.read().access_token().map(str::to_string)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().viewer().cloned()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }

    pub fn shows_admin_link(&self) -> bool {
        self.state.read().shows_admin_link()
    }

    /// Persist new tokens and, when known, the account they belong to.
    pub fn login(&self, tokens: Tokens, user: Option<UserInfo>) {
        let store = session_store();
        store.login(&tokens);
        let is_staff = user.as_ref().is_some_and(|u| u.is_staff);
        store.set_staff(is_staff);

        let mut state = self.state;
        state.set(SessionState {
            tokens: Some(tokens),
            user,
            is_staff,
            loading: false,
        });
    }

    /// Record the account behind the current tokens.
    pub fn set_user(&self, user: UserInfo) {
        session_store().set_staff(user.is_staff);
        let mut state = self.state;
        let mut current = state.write();
        current.is_staff = user.is_staff;
        current.user = Some(user);
        current.loading = false;
    }

    /// Forget tokens and staff flag, then reload on the login page so no
    /// in-memory state survives.
    pub fn logout(&self) {
        session_store().logout();
        let mut state = self.state;
        state.set(SessionState::default());
        tracing::info!("logged out");
        hard_redirect("/login");
    }

    fn lookup_failed(&self, token_rejected: bool) {
        if token_rejected {
            session_store().set_staff(false);
        }
        let mut state = self.state;
        state.write().lookup_failed(token_rejected);
    }
}

/// Get the session context.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Full page navigation, discarding all in-memory state.
pub fn hard_redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "full navigation requested outside the browser");
    }
}

/// Provider component that manages the session.
/// Wrap your app with this component, inside a [`crate::ClientProvider`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_api();
    let state = use_signal(|| SessionState::restore(&session_store()));
    let session = use_context_provider(|| Session { state });

    // Learn who the stored token belongs to, once, on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(token) = state.peek().access_token().map(str::to_string) else {
                return;
            };
            match api.current_user(&token).await {
                Ok(user) => session.set_user(user),
                Err(e) => {
                    tracing::warn!(error = %e, "could not load the current user");
                    session.lookup_failed(e.is_auth_failure());
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button that logs the visitor out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            title: "{label}",
            onclick: move |_| session.logout(),
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}
