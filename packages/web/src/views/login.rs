//! Login page view with username/password form.

use dioxus::prelude::*;
use ui::components::Notice;
use ui::forms::{FormPhase, LoginForm};
use ui::{show_flash, use_api, use_flash, use_session, Flash};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut form = use_signal(LoginForm::default);
    let mut phase = use_signal(FormPhase::default);

    let handle_login = move |evt: FormEvent| {
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
            if let Ok(signed_in) = result {
                session.login(signed_in.tokens, signed_in.user);
                show_flash(&mut flash, Flash::success("Login successful!"));
                nav.push(Route::Profile {});
            }
        });
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Log in" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = phase().error() {
                    Notice { message: err.to_string() }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: phase().is_submitting(),
                    if phase().is_submitting() { "Logging in..." } else { "Log in" }
                }
            }

            p {
                class: "form-footer",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
