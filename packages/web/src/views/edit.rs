//! Form for editing an existing announcement.

use dioxus::prelude::*;
use store::SubjectPolicy;
use ui::components::{Notice, SubjectSelect};
use ui::forms::{load_announcement_form, AnnouncementForm, FormPhase};
use ui::{show_flash, use_api, use_config, use_flash, use_session, Flash};

use crate::Route;

#[component]
pub fn EditAnnouncement(id: i64) -> Element {
    let api = use_api();
    let policy = use_config().forms.edit_subject;
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut form = use_signal(|| Option::<AnnouncementForm>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut phase = use_signal(FormPhase::default);

    // Pre-fill from the server; without a token nothing is fetched
    use_hook({
        let api = api.clone();
        move || {
            let Some(token) = session.access_token() else {
                nav.replace(Route::Login {});
                return;
            };
            spawn(async move {
                match load_announcement_form(&api, Some(&token), id, policy).await {
                    Ok(loaded) => form.set(Some(loaded)),
                    Err(e) => load_error.set(Some(e.to_string())),
                }
            });
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if phase.peek().is_submitting() {
            return;
        }
        let Some(current) = form() else {
            return;
        };
        let api = api.clone();
        let token = session.access_token();
        phase.set(FormPhase::Submitting);
        spawn(async move {
            let result = current.submit_edit(&api, token.as_deref(), id, policy).await;
            match &result {
                Ok(()) => {
                    show_flash(&mut flash, Flash::success("Announcement updated."));
                    nav.push(Route::Announcements {});
                }
                Err(e) if e.requires_login() => {
                    nav.push(Route::Login {});
                }
                Err(_) => {}
            }
            phase.set(FormPhase::settle(&result));
        });
    };

    let Some(current) = form() else {
        return rsx! {
            div {
                class: "form-page",
                h1 { "Edit announcement" }
                if let Some(err) = load_error() {
                    Notice { message: err }
                } else {
                    p { class: "empty", "Loading..." }
                }
            }
        };
    };

    let mut set_field = move |apply: fn(&mut AnnouncementForm, String), value: String| {
        if let Some(f) = form.write().as_mut() {
            apply(f, value);
        }
    };

    let subject_input = match policy {
        SubjectPolicy::Restricted => rsx! {
            SubjectSelect {
                value: current.subject.clone(),
                onchange: move |subject| set_field(|f, v| f.subject = v, subject),
            }
        },
        SubjectPolicy::Free => rsx! {
            input {
                class: "input",
                r#type: "text",
                value: current.subject.clone(),
                oninput: move |evt: FormEvent| set_field(|f, v| f.subject = v, evt.value()),
            }
        },
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Edit announcement" }

            form {
                class: "form",
                onsubmit: handle_submit,

                if let Some(err) = phase().error() {
                    Notice { message: err.to_string() }
                }

                label { class: "field-label", "Subject" }
                {subject_input}
                label { class: "field-label", "Description" }
                textarea {
                    class: "input",
                    rows: 6,
                    value: current.content.clone(),
                    oninput: move |evt: FormEvent| set_field(|f, v| f.content = v, evt.value()),
                }
                label { class: "field-label", "Hourly rate" }
                input {
                    class: "input",
                    r#type: "text",
                    inputmode: "decimal",
                    value: current.hourly_rate.clone(),
                    oninput: move |evt: FormEvent| set_field(|f, v| f.hourly_rate = v, evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: phase().is_submitting(),
                    "Save changes"
                }
            }
        }
    }
}
