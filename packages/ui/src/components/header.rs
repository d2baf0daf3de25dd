use dioxus::prelude::*;

use crate::session::{use_session, LogoutButton};
use crate::Icon;
use crate::icons::{FaHouse, FaUser, FaUsers};

/// Top navigation bar.
///
/// Profile points at the login page for anonymous visitors. Manage Users is
/// only offered to staff once the account is known, Logout only to
/// logged-in visitors.
#[component]
pub fn Header(#[props(default = "Tutoring".to_string())] title: String) -> Element {
    let session = use_session();
    let logged_in = session.is_logged_in();
    let admin = session.shows_admin_link();
    let profile_target = if logged_in { "/profile" } else { "/login" };

    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-brand", "{title}" }
            nav {
                class: "navbar-links",
                Link {
                    class: "navbar-link",
                    to: "/announcements",
                    Icon { icon: FaHouse, width: 14, height: 14 }
                    span { "Home" }
                }
                Link {
                    class: "navbar-link",
                    to: profile_target,
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Profile" }
                }
                if admin {
                    Link {
                        class: "navbar-link",
                        to: "/users",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        span { "Manage Users" }
                    }
                }
                if logged_in {
                    LogoutButton { class: "navbar-link navbar-button" }
                }
            }
        }
    }
}
