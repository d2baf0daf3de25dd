use dioxus::prelude::*;

/// Previous/next controls. A side without a target page is disabled.
#[component]
pub fn Pagination(
    page: u32,
    #[props(!optional)] previous: Option<u32>,
    #[props(!optional)] next: Option<u32>,
    on_page: EventHandler<u32>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        nav {
            class: "pagination",
            button {
                class: "btn btn-secondary",
                disabled: disabled || previous.is_none(),
                onclick: move |_| {
                    if let Some(page) = previous {
                        on_page.call(page);
                    }
                },
                "Previous"
            }
            span { class: "pagination-page", "Page {page}" }
            button {
                class: "btn btn-secondary",
                disabled: disabled || next.is_none(),
                onclick: move |_| {
                    if let Some(page) = next {
                        on_page.call(page);
                    }
                },
                "Next"
            }
        }
    }
}
