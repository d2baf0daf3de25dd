//! Registration page view.

use dioxus::prelude::*;
use ui::components::Notice;
use ui::forms::{FormPhase, RegisterForm};
use ui::{show_flash, use_api, use_flash, Flash};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut form = use_signal(RegisterForm::default);
    let mut phase = use_signal(FormPhase::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if phase.peek().is_submitting() {
            return;
        }
        let api = api.clone();
        let current = form();
        phase.set(FormPhase::Submitting);
        spawn(async move {
            let result = current.submit(&api).await;
            phase.set(FormPhase::settle(&result));
            if result.is_ok() {
                show_flash(&mut flash, Flash::success("Registration successful!"));
                nav.push(Route::Login {});
            }
        });
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Create account" }

            form {
                class: "form",
                onsubmit: handle_register,

                if let Some(err) = phase().error() {
                    Notice { message: err.to_string() }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "new-password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    autocomplete: "new-password",
                    value: form().confirm_password,
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "First name",
                    value: form().first_name,
                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Last name",
                    value: form().last_name,
                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "tel",
                    placeholder: "Phone number",
                    value: form().phone,
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: form().privacy_accepted,
                        onchange: move |evt: FormEvent| form.write().privacy_accepted = evt.checked(),
                    }
                    span { "I accept the privacy policy" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: phase().is_submitting(),
                    if phase().is_submitting() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "form-footer",
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
