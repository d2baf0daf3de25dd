//! # Backend trait: every REST endpoint the client consumes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | [`login`](Backend::login) | `POST /login/` | none |
//! | [`register`](Backend::register) | `POST /register/` | none |
//! | [`current_user`](Backend::current_user) | `GET /user/me/` | bearer |
//! | [`update_profile`](Backend::update_profile) | `PUT /user/edit/` | bearer |
//! | [`list_users`](Backend::list_users) | `GET /users/` | bearer (admin) |
//! | [`delete_user`](Backend::delete_user) | `DELETE /users/delete/{id}/` | bearer (admin) |
//! | [`list_announcements`](Backend::list_announcements) | `GET /announcements/?page=N` | none |
//! | [`search_announcements`](Backend::search_announcements) | `GET /announcements/search/` | none |
//! | [`get_announcement`](Backend::get_announcement) | `GET /announcements/{id}/` | bearer |
//! | [`add_announcement`](Backend::add_announcement) | `POST /announcements/add/` | bearer |
//! | [`edit_announcement`](Backend::edit_announcement) | `PUT /announcements/edit/{id}/` | bearer |
//! | [`delete_announcement`](Backend::delete_announcement) | `DELETE /announcements/delete/{id}/` | bearer |
//!
//! [`crate::ApiClient`] is the HTTP implementation. View logic is written
//! against this trait so it can run against a recording fake in tests.
//!
//! Bearer-authenticated methods take the access token explicitly. Callers
//! decide what a missing token means (usually: redirect to login, no call).
//! Write endpoints answer with `()` because their response bodies are not used.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    Announcement, AnnouncementDraft, Credentials, LoginResponse, Page, ProfileUpdate,
    Registration, SearchFilter, UserInfo,
};

pub trait Backend {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn current_user(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>>;

    fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn list_users(&self, token: &str) -> impl Future<Output = Result<Vec<UserInfo>, ApiError>>;

    fn delete_user(&self, token: &str, id: i64) -> impl Future<Output = Result<(), ApiError>>;

    fn list_announcements(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<Announcement>, ApiError>>;

    fn search_announcements(
        &self,
        filter: &SearchFilter,
    ) -> impl Future<Output = Result<Vec<Announcement>, ApiError>>;

    fn get_announcement(
        &self,
        token: &str,
        id: i64,
    ) -> impl Future<Output = Result<Announcement, ApiError>>;

    fn add_announcement(
        &self,
        token: &str,
        draft: &AnnouncementDraft,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn edit_announcement(
        &self,
        token: &str,
        id: i64,
        draft: &AnnouncementDraft,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn delete_announcement(
        &self,
        token: &str,
        id: i64,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
