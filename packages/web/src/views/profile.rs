//! Profile page: view the account and edit name and phone.

use api::UserInfo;
use dioxus::prelude::*;
use ui::components::{ConfirmDialog, Notice};
use ui::forms::{load_profile, FormPhase, ProfileForm, PROFILE_CONFIRMATION};
use ui::{show_flash, use_api, use_flash, use_session, Flash, Icon};
use ui::icons::FaPen;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut user = use_signal(|| Option::<UserInfo>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut form = use_signal(ProfileForm::default);
    let mut editing = use_signal(|| false);
    let mut confirming = use_signal(|| false);
    let mut phase = use_signal(FormPhase::default);

    use_hook({
        let api = api.clone();
        move || {
            let Some(token) = session.access_token() else {
                nav.replace(Route::Login {});
                return;
            };
            spawn(async move {
                match load_profile(&api, Some(&token)).await {
                    Ok(loaded) => {
                        form.set(ProfileForm::from_user(&loaded));
                        user.set(Some(loaded));
                    }
                    Err(e) => load_error.set(Some(e.to_string())),
                }
            });
        }
    });

    let save = move |confirmation: String| {
        confirming.set(false);
        let api = api.clone();
        let current = form();
        let token = session.access_token();
        phase.set(FormPhase::Submitting);
        spawn(async move {
            let result = current.submit(&api, token.as_deref(), &confirmation).await;
            match &result {
                Ok(()) => {
                    if let Some(account) = user.write().as_mut() {
                        account.first_name = current.first_name.trim().to_string();
                        account.last_name = current.last_name.trim().to_string();
                        account.phone_number = Some(current.phone.trim().to_string())
                            .filter(|p| !p.is_empty());
                    }
                    editing.set(false);
                    show_flash(&mut flash, Flash::success("Profile updated."));
                }
                Err(e) if e.requires_login() => {
                    nav.push(Route::Login {});
                }
                Err(_) => {}
            }
            phase.set(FormPhase::settle(&result));
        });
    };

    let cancel_edit = move |_: MouseEvent| {
        if let Some(account) = user() {
            form.set(ProfileForm::from_user(&account));
        }
        phase.set(FormPhase::Editing);
        editing.set(false);
    };

    let Some(account) = user() else {
        return rsx! {
            div {
                class: "form-page",
                h1 { "Profile" }
                if let Some(err) = load_error() {
                    Notice { message: err }
                } else {
                    p { class: "empty", "Loading..." }
                }
            }
        };
    };

    let name = account.display_name();
    let phone = account.phone().unwrap_or("-").to_string();
    let role = account.role_label();
    let current = form();

    rsx! {
        div {
            class: "form-page",
            h1 { "Profile" }

            if let Some(err) = phase().error() {
                Notice { message: err.to_string() }
            }

            if editing() {
                form {
                    class: "form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        confirming.set(true);
                    },
                    label { class: "field-label", "Email" }
                    input { class: "input", r#type: "email", value: current.email.clone(), readonly: true }
                    label { class: "field-label", "First name" }
                    input {
                        class: "input",
                        r#type: "text",
                        value: current.first_name.clone(),
                        oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                    }
                    label { class: "field-label", "Last name" }
                    input {
                        class: "input",
                        r#type: "text",
                        value: current.last_name.clone(),
                        oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                    }
                    label { class: "field-label", "Phone number" }
                    input {
                        class: "input",
                        r#type: "tel",
                        value: current.phone.clone(),
                        oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: cancel_edit,
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: phase().is_submitting(),
                            "Save"
                        }
                    }
                }
            } else {
                dl {
                    class: "card card-meta",
                    dt { "Username" }
                    dd { "{account.username}" }
                    dt { "Name" }
                    dd { "{name}" }
                    dt { "Email" }
                    dd { "{account.email}" }
                    dt { "Phone" }
                    dd { "{phone}" }
                    dt { "Role" }
                    dd { "{role}" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        phase.set(FormPhase::Editing);
                        editing.set(true);
                    },
                    Icon { icon: FaPen, width: 14, height: 14 }
                    span { "Edit profile" }
                }
            }

            if confirming() {
                ConfirmDialog {
                    message: "Save changes to your profile?",
                    confirm_label: "Save",
                    phrase: PROFILE_CONFIRMATION.to_string(),
                    on_confirm: save,
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}
