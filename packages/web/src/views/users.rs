//! Admin view listing every account.

use dioxus::prelude::*;
use ui::components::{ConfirmDialog, Notice, UserCard};
use ui::users::{can_delete, delete_user, load_users, UserDirectory};
use ui::{show_flash, use_api, use_flash, use_session, Flash};

use crate::Route;

#[component]
pub fn UserList() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut directory = use_signal(UserDirectory::default);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| false);

    use_hook({
        let api = api.clone();
        move || {
            let Some(token) = session.access_token() else {
                nav.replace(Route::Login {});
                return;
            };
            spawn(async move {
                match load_users(&api, Some(&token)).await {
                    Ok(users) => directory.set(UserDirectory::loaded(users)),
                    Err(e) => {
                        let mut state = directory.write();
                        state.loaded = true;
                        state.error = Some(e.to_string());
                    }
                }
            });
        }
    });

    let confirm_delete = use_callback(move |id: i64| {
        pending_delete.set(None);
        let api = api.clone();
        let token = session.access_token();
        deleting.set(true);
        spawn(async move {
            match delete_user(&api, token.as_deref(), id).await {
                Ok(()) => {
                    directory.write().remove(id);
                    show_flash(&mut flash, Flash::success("User deleted successfully."));
                }
                Err(e) if e.requires_login() => {
                    nav.push(Route::Login {});
                }
                Err(e) => directory.write().error = Some(e.to_string()),
            }
            deleting.set(false);
        });
    });

    let state = directory();

    rsx! {
        div {
            class: "page-header",
            h1 { "Manage users" }
        }

        if let Some(error) = state.error.clone() {
            Notice { message: error }
        }

        if !state.loaded {
            p { class: "empty", "Loading..." }
        } else if state.users.is_empty() && state.error.is_none() {
            p { class: "empty", "No users found." }
        }

        div {
            class: "card-list",
            for user in state.users.iter().cloned() {
                UserCard {
                    key: "{user.id}",
                    can_delete: can_delete(&user),
                    busy: deleting(),
                    on_delete: move |id| pending_delete.set(Some(id)),
                    user: user.clone(),
                }
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmDialog {
                message: "Are you sure you want to delete this user?",
                confirm_label: "Delete",
                on_confirm: move |_| confirm_delete.call(id),
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
