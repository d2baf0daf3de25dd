use dioxus::prelude::*;

/// A modal asking the user to confirm an action.
///
/// When `phrase` is non-empty, the confirm button stays disabled until the
/// user types it exactly. Clicking outside the card cancels.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default)] phrase: String,
    on_confirm: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut typed = use_signal(String::new);
    let ready = phrase.is_empty() || typed().trim() == phrase;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                p { class: "modal-message", "{message}" }
                if !phrase.is_empty() {
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Type {phrase} to confirm",
                        value: typed(),
                        oninput: move |evt: FormEvent| typed.set(evt.value()),
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: !ready,
                        onclick: move |_| on_confirm.call(typed()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
