use api::Announcement;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaPenToSquare, FaTrashCan};

/// One announcement in the list.
///
/// Edit and delete controls are rendered only when `can_manage` is set.
#[component]
pub fn AnnouncementCard(
    announcement: Announcement,
    currency: String,
    can_manage: bool,
    on_delete: EventHandler<i64>,
    #[props(default)] busy: bool,
) -> Element {
    let id = announcement.id;
    let author = &announcement.author;
    let name = author.full_name();
    let phone = author.phone().map(str::to_string);
    let date = announcement.date_label();
    let edit_target = format!("/edit/{id}");

    rsx! {
        article {
            class: "card",
            header {
                class: "card-header",
                h3 { class: "card-title", "{announcement.subject}" }
                span { class: "card-rate", "{announcement.hourly_rate} {currency}" }
            }
            p { class: "card-content", "{announcement.content}" }
            dl {
                class: "card-meta",
                dt { "Tutor" }
                dd { "{name}" }
                dt { "Email" }
                dd { "{author.email}" }
                if let Some(phone) = phone {
                    dt { "Phone" }
                    dd { "{phone}" }
                }
                dt { "Added" }
                dd { "{date}" }
            }
            if can_manage {
                footer {
                    class: "card-actions",
                    Link {
                        class: "btn btn-secondary",
                        to: edit_target,
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        span { "Edit" }
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        span { "Delete" }
                    }
                }
            }
        }
    }
}
