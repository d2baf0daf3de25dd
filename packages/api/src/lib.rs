//! # API crate: REST client for the tutoring marketplace backend
//!
//! Everything the frontend knows about the backend lives here: the wire
//! models, the [`Backend`] trait listing every endpoint, and [`ApiClient`], the
//! `reqwest` implementation the web app uses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait, one method per endpoint |
//! | [`client`] | [`ApiClient`]: base URL handling, bearer headers, status checks |
//! | [`error`] | [`ApiError`]: non-success statuses and transport failures |
//! | [`models`] | Announcements, users, pages, request bodies |
//!
//! The backend is the authority for validation and permissions. The client
//! never retries, and it never parses error bodies.

pub mod backend;
pub mod client;
pub mod error;
pub mod models;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Announcement, AnnouncementDraft, Author, Credentials, LoginResponse, Page, ProfileUpdate,
    Registration, SearchFilter, Subject, UserInfo,
};

pub use rust_decimal::Decimal;
