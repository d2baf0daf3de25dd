use api::UserInfo;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaUserXmark;

/// One account in the admin user list.
#[component]
pub fn UserCard(
    user: UserInfo,
    can_delete: bool,
    on_delete: EventHandler<i64>,
    #[props(default)] busy: bool,
) -> Element {
    let id = user.id;
    let name = user.display_name();
    let phone = user.phone().map(str::to_string);
    let role = user.role_label();

    rsx! {
        article {
            class: "card user-card",
            h3 { class: "card-title", "{name}" }
            dl {
                class: "card-meta",
                dt { "Email" }
                dd { "{user.email}" }
                if let Some(phone) = phone {
                    dt { "Phone" }
                    dd { "{phone}" }
                }
                dt { "Role" }
                dd { "{role}" }
            }
            if can_delete {
                footer {
                    class: "card-actions",
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaUserXmark, width: 14, height: 14 }
                        span { "Delete" }
                    }
                }
            }
        }
    }
}
