//! Recording in-memory [`Backend`] for view logic tests.

use std::cell::RefCell;

use api::{
    Announcement, AnnouncementDraft, ApiError, Author, Backend, Credentials, Decimal,
    LoginResponse, Page, ProfileUpdate, Registration, SearchFilter, UserInfo,
};

pub fn user(id: i64, is_staff: bool) -> UserInfo {
    UserInfo {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        first_name: "Ola".to_string(),
        last_name: format!("Nr{id}"),
        phone_number: None,
        is_staff,
    }
}

pub fn announcement(id: i64, author_id: i64) -> Announcement {
    Announcement {
        id,
        subject: "Matematyka".to_string(),
        content: format!("Offer {id}"),
        hourly_rate: Decimal::from(60),
        date_added: "2024-11-03T17:45:12Z".parse().unwrap(),
        author: Author {
            id: author_id,
            first_name: "Ola".to_string(),
            last_name: format!("Nr{author_id}"),
            email: format!("user{author_id}@example.com"),
            phone_number: None,
        },
    }
}

/// Every call is recorded by endpoint name; endpoints listed in `failing`
/// answer with HTTP 500.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: RefCell<Vec<&'static str>>,
    pub failing: Vec<&'static str>,
    pub announcements: Vec<Announcement>,
    pub search_results: Vec<Announcement>,
    pub users: Vec<UserInfo>,
    pub me: Option<UserInfo>,
    pub page_size: usize,
    pub last_search: RefCell<Option<SearchFilter>>,
    pub last_draft: RefCell<Option<AnnouncementDraft>>,
    pub last_update: RefCell<Option<ProfileUpdate>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            page_size: 2,
            ..Self::default()
        }
    }

    pub fn failing(mut self, endpoint: &'static str) -> Self {
        self.failing.push(endpoint);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, endpoint: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(endpoint);
        if self.failing.contains(&endpoint) {
            return Err(ApiError::Status {
                method: "TEST".to_string(),
                url: format!("http://backend.test/{endpoint}"),
                status: 500,
            });
        }
        Ok(())
    }
}

impl Backend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record("login")?;
        Ok(LoginResponse {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        })
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        self.record("register")
    }

    async fn current_user(&self, _token: &str) -> Result<UserInfo, ApiError> {
        self.record("current_user")?;
        self.me.clone().ok_or(ApiError::Status {
            method: "GET".to_string(),
            url: "http://backend.test/user/me/".to_string(),
            status: 401,
        })
    }

    async fn update_profile(&self, _token: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.record("update_profile")?;
        *self.last_update.borrow_mut() = Some(update.clone());
        Ok(())
    }

    async fn list_users(&self, _token: &str) -> Result<Vec<UserInfo>, ApiError> {
        self.record("list_users")?;
        Ok(self.users.clone())
    }

    async fn delete_user(&self, _token: &str, _id: i64) -> Result<(), ApiError> {
        self.record("delete_user")
    }

    async fn list_announcements(&self, page: u32) -> Result<Page<Announcement>, ApiError> {
        self.record("list_announcements")?;
        let size = self.page_size.max(1);
        let start = (page.saturating_sub(1) as usize) * size;
        let results: Vec<Announcement> = self
            .announcements
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();
        let has_next = start + size < self.announcements.len();
        Ok(Page {
            results,
            next: has_next.then(|| format!("http://backend.test/announcements/?page={}", page + 1)),
            previous: (page > 1)
                .then(|| format!("http://backend.test/announcements/?page={}", page - 1)),
            count: self.announcements.len() as u64,
        })
    }

    async fn search_announcements(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Announcement>, ApiError> {
        self.record("search_announcements")?;
        *self.last_search.borrow_mut() = Some(filter.clone());
        Ok(self.search_results.clone())
    }

    async fn get_announcement(&self, _token: &str, id: i64) -> Result<Announcement, ApiError> {
        self.record("get_announcement")?;
        self.announcements
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                method: "GET".to_string(),
                url: format!("http://backend.test/announcements/{id}/"),
                status: 404,
            })
    }

    async fn add_announcement(
        &self,
        _token: &str,
        draft: &AnnouncementDraft,
    ) -> Result<(), ApiError> {
        self.record("add_announcement")?;
        *self.last_draft.borrow_mut() = Some(draft.clone());
        Ok(())
    }

    async fn edit_announcement(
        &self,
        _token: &str,
        _id: i64,
        draft: &AnnouncementDraft,
    ) -> Result<(), ApiError> {
        self.record("edit_announcement")?;
        *self.last_draft.borrow_mut() = Some(draft.clone());
        Ok(())
    }

    async fn delete_announcement(&self, _token: &str, _id: i64) -> Result<(), ApiError> {
        self.record("delete_announcement")
    }
}
