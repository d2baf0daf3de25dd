//! HTTP implementation of [`Backend`] on top of `reqwest`.
//!
//! On WASM `reqwest` issues requests through the browser's `fetch`, so no
//! timeouts are configured here: the platform default applies.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Announcement, AnnouncementDraft, Credentials, LoginResponse, Page, ProfileUpdate,
    Registration, SearchFilter, UserInfo,
};

/// JSON client for the tutoring REST API rooted at a fixed base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `"announcements/add/"`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = build(builder).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Status {
                method: method.to_string(),
                url,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(Method::POST, "login/", None, |b| b.json(credentials))
            .await?;
        Ok(response.json().await?)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.send(Method::POST, "register/", None, |b| b.json(registration))
            .await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .send(Method::GET, "user/me/", Some(token), |b| b)
            .await?;
        Ok(response.json().await?)
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send(Method::PUT, "user/edit/", Some(token), |b| b.json(update))
            .await?;
        Ok(())
    }

    async fn list_users(&self, token: &str) -> Result<Vec<UserInfo>, ApiError> {
        let response = self.send(Method::GET, "users/", Some(token), |b| b).await?;
        Ok(response.json().await?)
    }

    async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("users/delete/{id}/"),
            Some(token),
            |b| b,
        )
        .await?;
        Ok(())
    }

    async fn list_announcements(&self, page: u32) -> Result<Page<Announcement>, ApiError> {
        let response = self
            .send(Method::GET, "announcements/", None, |b| {
                b.query(&[("page", page)])
            })
            .await?;
        Ok(response.json().await?)
    }

    async fn search_announcements(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Announcement>, ApiError> {
        let query = filter.query_pairs();
        let response = self
            .send(Method::GET, "announcements/search/", None, |b| b.query(&query))
            .await?;
        Ok(response.json().await?)
    }

    async fn get_announcement(&self, token: &str, id: i64) -> Result<Announcement, ApiError> {
        let response = self
            .send(Method::GET, &format!("announcements/{id}/"), Some(token), |b| b)
            .await?;
        Ok(response.json().await?)
    }

    async fn add_announcement(
        &self,
        token: &str,
        draft: &AnnouncementDraft,
    ) -> Result<(), ApiError> {
        self.send(Method::POST, "announcements/add/", Some(token), |b| {
            b.json(draft)
        })
        .await?;
        Ok(())
    }

    async fn edit_announcement(
        &self,
        token: &str,
        id: i64,
        draft: &AnnouncementDraft,
    ) -> Result<(), ApiError> {
        self.send(
            Method::PUT,
            &format!("announcements/edit/{id}/"),
            Some(token),
            |b| b.json(draft),
        )
        .await?;
        Ok(())
    }

    async fn delete_announcement(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("announcements/delete/{id}/"),
            Some(token),
            |b| b,
        )
        .await?;
        Ok(())
    }
}
