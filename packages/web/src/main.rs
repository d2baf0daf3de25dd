use dioxus::prelude::*;

use ui::components::Header;
use ui::{ClientProvider, FlashBanner, FlashProvider, SessionProvider};
use views::{AddAnnouncement, Announcements, EditAnnouncement, Login, Profile, Register, UserList};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/announcements")]
        Announcements {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/profile")]
        Profile {},
        #[route("/add")]
        AddAnnouncement {},
        #[route("/edit/:id")]
        EditAnnouncement { id: i64 },
        #[route("/users")]
        UserList {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);

    rsx! {
        // Global app resources
        document::Title { "Tutoring" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            SessionProvider {
                FlashProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Header and flash banner around every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main {
            class: "page",
            FlashBanner {}
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/announcements`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Announcements {});
    rsx! {}
}
