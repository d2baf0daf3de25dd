//! # Announcement listing state
//!
//! [`Listing`] is everything the announcements page shows: the visible
//! announcements, pagination cursors, and whether the visible set came from the
//! paginated listing or from a search.
//!
//! Requests are applied in two steps so the state never has to be borrowed
//! across an `await`:
//!
//! 1. [`Listing::begin`] issues a [`Ticket`] and marks the view as loading.
//! 2. [`Listing::finish_page`] / [`Listing::finish_search`] apply the response
//!    only if the ticket is still current. Older responses are dropped.
//!
//! A successful response always *replaces* the visible set. While searching
//! there are no cursors, so pagination controls disappear.

use api::{Announcement, ApiError, Backend, Page, UserInfo};

use crate::error::{require_token, ActionError};
use crate::forms::SearchForm;
use crate::sequence::{RequestSeq, Ticket};

pub const LOAD_FAILED: &str = "Could not load announcements.";
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";
pub const DELETE_FAILED: &str = "Could not delete the announcement.";

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub items: Vec<Announcement>,
    pub page: u32,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub searching: bool,
    pub search: SearchForm,
    pub loading: bool,
    pub error: Option<String>,
    seq: RequestSeq,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            count: 0,
            has_next: false,
            has_previous: false,
            searching: false,
            search: SearchForm::default(),
            loading: false,
            error: None,
            seq: RequestSeq::new(),
        }
    }
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Pass the ticket back with its response.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.seq.issue()
    }

    fn accept(&mut self, ticket: Ticket) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(?ticket, "dropping stale listing response");
            return false;
        }
        self.loading = false;
        true
    }

    /// Apply a paginated response for `page`. Returns whether it was applied.
    pub fn finish_page(
        &mut self,
        ticket: Ticket,
        page: u32,
        result: Result<Page<Announcement>, ApiError>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match result {
            Ok(response) => {
                self.has_next = response.has_next();
                self.has_previous = response.has_previous();
                self.count = response.count;
                self.items = response.results;
                self.page = page.max(1);
                self.searching = false;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, page, "failed to load announcements");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Apply a search response. Returns whether it was applied.
    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Announcement>, ApiError>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.count = items.len() as u64;
                self.items = items;
                self.has_next = false;
                self.has_previous = false;
                self.searching = true;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "announcement search failed");
                self.error = Some(SEARCH_FAILED.to_string());
            }
        }
        true
    }

    /// Report a failure that happened before a request was sent, such as an
    /// invalid filter. Invalidates any request still in flight.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.seq.issue();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Clear the filter fields and leave search mode. The caller reloads page 1.
    pub fn reset_search(&mut self) {
        self.search = SearchForm::default();
        self.searching = false;
        self.error = None;
    }

    /// Drop one announcement from the visible set. Returns whether it was there.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() != before
    }

    /// Apply the outcome of a delete. The item goes away only on success;
    /// a failure keeps it and shows the error.
    pub fn apply_delete(&mut self, id: i64, result: Result<(), ActionError>) -> bool {
        match result {
            Ok(()) => self.remove(id),
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn shows_pagination(&self) -> bool {
        !self.searching
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.shows_pagination() && self.has_next).then(|| self.page + 1)
    }

    pub fn previous_page(&self) -> Option<u32> {
        (self.shows_pagination() && self.has_previous && self.page > 1).then(|| self.page - 1)
    }
}

/// Whether `viewer` may edit or delete `announcement`: its author or staff.
/// Anonymous visitors never can.
pub fn can_manage(viewer: Option<&UserInfo>, announcement: &Announcement) -> bool {
    viewer.is_some_and(|user| user.is_staff || user.id == announcement.author.id)
}

/// Delete one announcement. Without a token nothing is sent.
pub async fn delete_announcement<B: Backend>(
    backend: &B,
    token: Option<&str>,
    id: i64,
) -> Result<(), ActionError> {
    let token = require_token(token)?;
    backend
        .delete_announcement(token, id)
        .await
        .map_err(|e| ActionError::request(DELETE_FAILED, e))?;
    tracing::info!(id, "announcement deleted");
    Ok(())
}
