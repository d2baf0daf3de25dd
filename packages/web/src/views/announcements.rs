//! Announcement list with pagination, search and per-card management.

use api::{Announcement, Backend};
use dioxus::prelude::*;
use ui::components::{AnnouncementCard, ConfirmDialog, Notice, Pagination, SearchBar};
use ui::listing::{can_manage, delete_announcement, Listing};
use ui::forms::ADD_LOGIN_REQUIRED;
use ui::{show_flash, use_api, use_config, use_flash, use_session, Flash, Icon};
use ui::icons::FaPlus;

use crate::Route;

#[component]
pub fn Announcements() -> Element {
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut listing = use_signal(Listing::new);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| false);

    let load_page = use_callback({
        let api = api.clone();
        move |page: u32| {
            let api = api.clone();
            let ticket = listing.write().begin();
            spawn(async move {
                let result = api.list_announcements(page).await;
                listing.write().finish_page(ticket, page, result);
            });
        }
    });

    let run_search = use_callback({
        let api = api.clone();
        move |_: ()| {
            let form = listing.peek().search.clone();
            let filter = match form.to_filter() {
                Ok(filter) => filter,
                Err(e) => {
                    listing.write().fail(e.to_string());
                    return;
                }
            };
            let api = api.clone();
            let ticket = listing.write().begin();
            spawn(async move {
                let result = api.search_announcements(&filter).await;
                listing.write().finish_search(ticket, result);
            });
        }
    });

    let reset_search = move |_: ()| {
        listing.write().reset_search();
        load_page.call(1);
    };

    // Ask before deleting; without a token go straight to login
    let request_delete = move |id: i64| {
        if session.access_token().is_none() {
            nav.push(Route::Login {});
            return;
        }
        pending_delete.set(Some(id));
    };

    let confirm_delete = use_callback(move |id: i64| {
        pending_delete.set(None);
        let api = api.clone();
        let token = session.access_token();
        deleting.set(true);
        spawn(async move {
            let result = delete_announcement(&api, token.as_deref(), id).await;
            if result.as_ref().is_err_and(|e| e.requires_login()) {
                nav.push(Route::Login {});
            } else {
                listing.write().apply_delete(id, result);
            }
            deleting.set(false);
        });
    });

    use_effect(move || load_page.call(1));

    let open_add = move |_: MouseEvent| {
        if session.is_logged_in() {
            nav.push(Route::AddAnnouncement {});
        } else {
            show_flash(&mut flash, Flash::error(ADD_LOGIN_REQUIRED));
            nav.push(Route::Login {});
        }
    };

    let state = listing();
    let viewer = session.user();
    let cards: Vec<(Announcement, bool)> = state
        .items
        .iter()
        .map(|a| (a.clone(), can_manage(viewer.as_ref(), a)))
        .collect();
    let currency = config.listing.currency.clone();
    let summary = if state.searching {
        format!("{} matching announcements", state.count)
    } else {
        format!("{} announcements", state.count)
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Announcements" }
            button {
                class: "btn btn-primary",
                onclick: open_add,
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add announcement" }
            }
        }

        if session.is_logged_in() {
            SearchBar {
                form: state.search.clone(),
                disabled: state.loading,
                on_change: move |form| listing.write().search = form,
                on_search: move |_| run_search.call(()),
                on_reset: reset_search,
            }
        }

        if let Some(error) = state.error.clone() {
            Notice { message: error }
        }

        p { class: "muted", "{summary}" }

        if cards.is_empty() {
            if state.loading {
                p { class: "empty", "Loading..." }
            } else {
                p { class: "empty", "No announcements found." }
            }
        }

        div {
            class: "card-list",
            for (announcement, manage) in cards {
                AnnouncementCard {
                    key: "{announcement.id}",
                    announcement: announcement.clone(),
                    currency: currency.clone(),
                    can_manage: manage,
                    busy: deleting(),
                    on_delete: request_delete,
                }
            }
        }

        if state.shows_pagination() {
            Pagination {
                page: state.page,
                previous: state.previous_page(),
                next: state.next_page(),
                disabled: state.loading,
                on_page: move |page| load_page.call(page),
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmDialog {
                message: "Are you sure you want to delete this announcement?",
                confirm_label: "Delete",
                on_confirm: move |_| confirm_delete.call(id),
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
