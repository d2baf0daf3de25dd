use dioxus::prelude::*;

use crate::forms::SearchForm;
use crate::Icon;
use crate::icons::{FaMagnifyingGlass, FaRotateLeft};

use super::SubjectSelect;

/// Subject and rate-range filters for the announcement list.
#[component]
pub fn SearchBar(
    form: SearchForm,
    on_change: EventHandler<SearchForm>,
    on_search: EventHandler<()>,
    on_reset: EventHandler<()>,
    #[props(default)] disabled: bool,
) -> Element {
    let subject_form = form.clone();
    let min_form = form.clone();
    let max_form = form.clone();

    rsx! {
        form {
            class: "search-bar",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(());
            },
            SubjectSelect {
                value: form.subject.clone(),
                allow_any: true,
                onchange: move |subject: String| {
                    on_change.call(SearchForm { subject, ..subject_form.clone() });
                },
            }
            input {
                class: "input",
                r#type: "text",
                inputmode: "decimal",
                placeholder: "Min rate",
                value: "{form.min_rate}",
                oninput: move |evt: FormEvent| {
                    on_change.call(SearchForm { min_rate: evt.value(), ..min_form.clone() });
                },
            }
            input {
                class: "input",
                r#type: "text",
                inputmode: "decimal",
                placeholder: "Max rate",
                value: "{form.max_rate}",
                oninput: move |evt: FormEvent| {
                    on_change.call(SearchForm { max_rate: evt.value(), ..max_form.clone() });
                },
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled,
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                span { "Search" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled,
                onclick: move |_| on_reset.call(()),
                Icon { icon: FaRotateLeft, width: 14, height: 14 }
                span { "Reset" }
            }
        }
    }
}
