//! Form for publishing a new announcement.

use dioxus::prelude::*;
use ui::components::{Notice, SubjectSelect};
use ui::forms::{AnnouncementForm, FormPhase};
use ui::{show_flash, use_api, use_flash, use_session, Flash};

use crate::Route;

#[component]
pub fn AddAnnouncement() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut form = use_signal(AnnouncementForm::default);
    let mut phase = use_signal(FormPhase::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if phase.peek().is_submitting() {
            return;
        }
        let api = api.clone();
        let current = form();
        let token = session.access_token();
        phase.set(FormPhase::Submitting);
        spawn(async move {
            let result = current.submit_new(&api, token.as_deref()).await;
            match &result {
                Ok(()) => {
                    show_flash(&mut flash, Flash::success("Announcement added!"));
                    nav.push(Route::Announcements {});
                }
                Err(e) => {
                    if let Some(notice) = AnnouncementForm::login_notice(e) {
                        show_flash(&mut flash, Flash::error(notice));
                        nav.push(Route::Login {});
                    }
                }
            }
            phase.set(FormPhase::settle(&result));
        });
    };

    let current = form();
    let blocked = !current.can_submit_new() || phase().is_submitting();

    rsx! {
        div {
            class: "form-page",
            h1 { "Add announcement" }

            form {
                class: "form",
                onsubmit: handle_submit,

                if let Some(err) = phase().error() {
                    Notice { message: err.to_string() }
                }

                label { class: "field-label", "Subject" }
                SubjectSelect {
                    value: current.subject.clone(),
                    onchange: move |subject| form.write().subject = subject,
                }
                label { class: "field-label", "Description" }
                textarea {
                    class: "input",
                    rows: 6,
                    value: current.content.clone(),
                    oninput: move |evt: FormEvent| form.write().content = evt.value(),
                }
                label { class: "field-label", "Hourly rate" }
                input {
                    class: "input",
                    r#type: "text",
                    inputmode: "decimal",
                    placeholder: "e.g. 60.00",
                    value: current.hourly_rate.clone(),
                    oninput: move |evt: FormEvent| form.write().hourly_rate = evt.value(),
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: current.terms_accepted,
                        onchange: move |evt: FormEvent| form.write().terms_accepted = evt.checked(),
                    }
                    span { "I accept the terms of service" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: blocked,
                    "Add announcement"
                }
            }
        }
    }
}
