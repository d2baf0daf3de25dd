use dioxus::prelude::*;

/// Inline error rendered above a form or list.
#[component]
pub fn Notice(message: String) -> Element {
    rsx! {
        div {
            class: "notice notice-error",
            role: "alert",
            "{message}"
        }
    }
}
