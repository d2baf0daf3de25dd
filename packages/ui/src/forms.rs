//! # Form state and submit logic
//!
//! Each form is a plain struct holding the current field values, plus a
//! submit method generic over [`Backend`]. Validation runs first, so a form
//! that fails a client-side check never reaches the network. Every submit
//! issues at most one write request and never retries it.
//!
//! | Form | Write | Check before sending |
//! |------|-------|----------------------|
//! | [`LoginForm`] | `POST /login/` | none |
//! | [`RegisterForm`] | `POST /register/` | password equals confirmation |
//! | [`AnnouncementForm`] (add) | `POST /announcements/add/` | terms accepted, listed subject, positive rate |
//! | [`AnnouncementForm`] (edit) | `PUT /announcements/edit/{id}/` | [`SubjectPolicy`], positive rate |
//! | [`ProfileForm`] | `PUT /user/edit/` | typed `OK` confirmation |
//!
//! Views track progress with [`FormPhase`]: *editing* → *submitting* →
//! *done* or back to editing with an error message.

use std::str::FromStr;

use api::{
    Announcement, AnnouncementDraft, Backend, Credentials, Decimal, ProfileUpdate, Registration,
    SearchFilter, Subject, UserInfo,
};
use store::{SubjectPolicy, Tokens};

use crate::error::{require_token, ActionError};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed. Please check your details and try again.";
pub const ADD_FAILED: &str = "Error adding listing. Please try again.";
pub const EDIT_FAILED: &str = "Error while saving the announcement.";
pub const EDIT_LOAD_FAILED: &str = "Error while loading the announcement.";
pub const PROFILE_FAILED: &str = "Error updating profile.";
pub const PROFILE_LOAD_FAILED: &str = "Error loading profile.";
pub const ADD_LOGIN_REQUIRED: &str = "You must be logged in to add an announcement.";

/// The phrase the profile form asks for before saving.
pub const PROFILE_CONFIRMATION: &str = "OK";

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    /// Back to editing with a message to show.
    Failed(String),
    Done,
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn settle<T>(result: &Result<T, ActionError>) -> FormPhase {
        match result {
            Ok(_) => FormPhase::Done,
            Err(e) => FormPhase::Failed(e.to_string()),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.trim().replace(',', ".")).ok()
}

fn parse_rate(raw: &str) -> Result<Decimal, ActionError> {
    parse_decimal(raw)
        .filter(|rate| *rate > Decimal::ZERO)
        .ok_or(ActionError::InvalidRate)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub tokens: Tokens,
    /// `None` when the follow-up `/user/me/` lookup failed.
    pub user: Option<UserInfo>,
}

impl LoginForm {
    /// Exchange credentials for tokens, then look up the account so the staff
    /// flag is known. A failed lookup does not fail the login.
    pub async fn submit<B: Backend>(&self, backend: &B) -> Result<SignedIn, ActionError> {
        let credentials = Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        let response = backend
            .login(&credentials)
            .await
            .map_err(|e| ActionError::request(LOGIN_FAILED, e))?;
        let tokens = response.tokens();

        let user = match backend.current_user(&tokens.access).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "signed in but could not load the account");
                None
            }
        };
        tracing::info!(username = %credentials.username, "signed in");
        Ok(SignedIn { tokens, user })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub privacy_accepted: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ActionError> {
        if self.password != self.confirm_password {
            return Err(ActionError::PasswordMismatch);
        }
        Ok(Registration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
        })
    }

    pub async fn submit<B: Backend>(&self, backend: &B) -> Result<(), ActionError> {
        let registration = self.validate()?;
        backend
            .register(&registration)
            .await
            .map_err(|e| ActionError::request(REGISTER_FAILED, e))?;
        tracing::info!(username = %registration.username, "registered");
        Ok(())
    }
}

/// Fields shared by the add and edit announcement forms.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementForm {
    pub subject: String,
    pub content: String,
    pub hourly_rate: String,
    pub terms_accepted: bool,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self {
            subject: Subject::default().label().to_string(),
            content: String::new(),
            hourly_rate: String::new(),
            terms_accepted: false,
        }
    }
}

impl AnnouncementForm {
    /// Pre-filled edit form. Terms were accepted when the record was created.
    /// Under [`SubjectPolicy::Restricted`] a
    /// subject outside the listed set is replaced by the default one, so the
    /// select shows what will be sent.
    pub fn from_announcement(announcement: &Announcement, policy: SubjectPolicy) -> Self {
        let subject = match (policy, announcement.known_subject()) {
            (SubjectPolicy::Restricted, None) => {
                tracing::warn!(
                    id = announcement.id,
                    subject = %announcement.subject,
                    "unlisted subject replaced for restricted edit"
                );
                Subject::default().label().to_string()
            }
            _ => announcement.subject.clone(),
        };
        Self {
            subject,
            content: announcement.content.clone(),
            hourly_rate: announcement.hourly_rate.to_string(),
            terms_accepted: true,
        }
    }

    pub fn can_submit_new(&self) -> bool {
        self.terms_accepted
    }

    pub fn to_draft(&self, policy: SubjectPolicy) -> Result<AnnouncementDraft, ActionError> {
        let subject = self.subject.trim();
        let subject = match policy {
            SubjectPolicy::Restricted => Subject::from_label(subject)
                .ok_or(ActionError::UnknownSubject)?
                .label()
                .to_string(),
            SubjectPolicy::Free if subject.is_empty() => return Err(ActionError::MissingSubject),
            SubjectPolicy::Free => subject.to_string(),
        };
        Ok(AnnouncementDraft {
            subject,
            content: self.content.clone(),
            hourly_rate: parse_rate(&self.hourly_rate)?,
        })
    }

    /// Create a new announcement. New announcements always use one of the
    /// listed subjects.
    pub async fn submit_new<B: Backend>(
        &self,
        backend: &B,
        token: Option<&str>,
    ) -> Result<(), ActionError> {
        if !self.can_submit_new() {
            return Err(ActionError::TermsNotAccepted);
        }
        let token = require_token(token)?;
        let draft = self.to_draft(SubjectPolicy::Restricted)?;
        backend
            .add_announcement(token, &draft)
            .await
            .map_err(|e| ActionError::request(ADD_FAILED, e))?;
        tracing::info!(subject = %draft.subject, "announcement added");
        Ok(())
    }

    /// Message to carry to the login page when a submit was refused for lack
    /// of a session.
    pub fn login_notice(err: &ActionError) -> Option<&'static str> {
        err.requires_login().then_some(ADD_LOGIN_REQUIRED)
    }

    pub async fn submit_edit<B: Backend>(
        &self,
        backend: &B,
        token: Option<&str>,
        id: i64,
        policy: SubjectPolicy,
    ) -> Result<(), ActionError> {
        let token = require_token(token)?;
        let draft = self.to_draft(policy)?;
        backend
            .edit_announcement(token, id, &draft)
            .await
            .map_err(|e| ActionError::request(EDIT_FAILED, e))?;
        tracing::info!(id, "announcement updated");
        Ok(())
    }
}

/// Fetch an announcement into an edit form. Without a token nothing is
/// fetched.
pub async fn load_announcement_form<B: Backend>(
    backend: &B,
    token: Option<&str>,
    id: i64,
    policy: SubjectPolicy,
) -> Result<AnnouncementForm, ActionError> {
    let token = require_token(token)?;
    let announcement = backend
        .get_announcement(token, id)
        .await
        .map_err(|e| ActionError::request(EDIT_LOAD_FAILED, e))?;
    Ok(AnnouncementForm::from_announcement(&announcement, policy))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone_number.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
        }
    }

    /// Save the editable fields once the visitor typed the confirmation phrase.
    pub async fn submit<B: Backend>(
        &self,
        backend: &B,
        token: Option<&str>,
        confirmation: &str,
    ) -> Result<(), ActionError> {
        if confirmation.trim() != PROFILE_CONFIRMATION {
            return Err(ActionError::NotConfirmed);
        }
        let token = require_token(token)?;
        backend
            .update_profile(token, &self.to_update())
            .await
            .map_err(|e| ActionError::request(PROFILE_FAILED, e))?;
        tracing::info!("profile updated");
        Ok(())
    }
}

pub async fn load_profile<B: Backend>(
    backend: &B,
    token: Option<&str>,
) -> Result<UserInfo, ActionError> {
    let token = require_token(token)?;
    backend
        .current_user(token)
        .await
        .map_err(|e| ActionError::request(PROFILE_LOAD_FAILED, e))
}

/// Search bar fields. An empty subject means any subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub subject: String,
    pub min_rate: String,
    pub max_rate: String,
}

impl SearchForm {
    pub fn is_blank(&self) -> bool {
        self.subject.trim().is_empty()
            && self.min_rate.trim().is_empty()
            && self.max_rate.trim().is_empty()
    }

    pub fn to_filter(&self) -> Result<SearchFilter, ActionError> {
        let bound = |raw: &str| -> Result<Option<Decimal>, ActionError> {
            if raw.trim().is_empty() {
                return Ok(None);
            }
            parse_decimal(raw)
                .filter(|rate| *rate >= Decimal::ZERO)
                .map(Some)
                .ok_or(ActionError::InvalidRateFilter)
        };
        let min_rate = bound(&self.min_rate)?;
        let max_rate = bound(&self.max_rate)?;
        if let (Some(min), Some(max)) = (min_rate, max_rate) {
            if min > max {
                return Err(ActionError::InvalidRange);
            }
        }
        let subject = Some(self.subject.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(SearchFilter {
            subject,
            min_rate,
            max_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{announcement, user, FakeBackend};

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: " kasia ".to_string(),
            email: "kasia@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            confirm_password: "s3cret-pass".to_string(),
            first_name: "Kasia".to_string(),
            last_name: "Wiśniewska".to_string(),
            phone: "".to_string(),
            privacy_accepted: false,
        }
    }

    fn add_form() -> AnnouncementForm {
        AnnouncementForm {
            subject: "Informatyka".to_string(),
            content: "Rust od podstaw".to_string(),
            hourly_rate: "90".to_string(),
            terms_accepted: true,
        }
    }

    #[tokio::test]
    async fn test_register_mismatch_sends_nothing() {
        let backend = FakeBackend::new();
        let form = RegisterForm {
            confirm_password: "different".to_string(),
            ..register_form()
        };

        let err = form.submit(&backend).await.unwrap_err();
        assert!(matches!(err, ActionError::PasswordMismatch));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_register_sends_one_request() {
        let backend = FakeBackend::new();
        register_form().submit(&backend).await.unwrap();
        assert_eq!(backend.calls(), vec!["register"]);
    }

    #[test]
    fn test_register_trims_and_keeps_blank_phone() {
        let registration = register_form().validate().unwrap();
        assert_eq!(registration.username, "kasia");
        assert_eq!(registration.phone_number, "");
    }

    #[tokio::test]
    async fn test_register_failure_is_generic_and_not_retried() {
        let backend = FakeBackend::new().failing("register");
        let err = register_form().submit(&backend).await.unwrap_err();
        assert_eq!(err.to_string(), REGISTER_FAILED);
        assert_eq!(backend.call_count(), 1);
        assert_eq!(FormPhase::settle(&Err::<(), _>(err)).error(), Some(REGISTER_FAILED));
    }

    #[tokio::test]
    async fn test_login_fetches_account() {
        let backend = FakeBackend {
            me: Some(user(3, true)),
            ..FakeBackend::new()
        };
        let form = LoginForm {
            username: "admin".to_string(),
            password: "pw".to_string(),
        };

        let signed_in = form.submit(&backend).await.unwrap();
        assert_eq!(signed_in.tokens.access, "access-token");
        assert_eq!(signed_in.tokens.refresh, "refresh-token");
        assert_eq!(signed_in.user.map(|u| u.is_staff), Some(true));
        assert_eq!(backend.calls(), vec!["login", "current_user"]);
    }

    #[tokio::test]
    async fn test_login_survives_failed_account_lookup() {
        let backend = FakeBackend::new().failing("current_user");
        let signed_in = LoginForm::default().submit(&backend).await.unwrap();
        assert!(signed_in.user.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let backend = FakeBackend::new().failing("login");
        let err = LoginForm::default().submit(&backend).await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FAILED);
        assert_eq!(backend.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn test_add_requires_terms() {
        let backend = FakeBackend::new();
        let form = AnnouncementForm {
            terms_accepted: false,
            ..add_form()
        };
        assert!(!form.can_submit_new());

        let err = form.submit_new(&backend, Some("t")).await.unwrap_err();
        assert!(matches!(err, ActionError::TermsNotAccepted));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_add_without_token_redirects() {
        let backend = FakeBackend::new();
        let err = add_form().submit_new(&backend, None).await.unwrap_err();
        assert!(err.requires_login());
        assert_eq!(AnnouncementForm::login_notice(&err), Some(ADD_LOGIN_REQUIRED));
        assert_eq!(backend.call_count(), 0);

        let terms = AnnouncementForm {
            terms_accepted: false,
            ..add_form()
        };
        let err = terms.submit_new(&backend, None).await.unwrap_err();
        assert_eq!(AnnouncementForm::login_notice(&err), None);
    }

    #[tokio::test]
    async fn test_add_rejects_unlisted_subject() {
        let backend = FakeBackend::new();
        let form = AnnouncementForm {
            subject: "Astronomia".to_string(),
            ..add_form()
        };
        let err = form.submit_new(&backend, Some("t")).await.unwrap_err();
        assert!(matches!(err, ActionError::UnknownSubject));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_add_posts_draft() {
        let backend = FakeBackend::new();
        add_form().submit_new(&backend, Some("t")).await.unwrap();

        let draft = backend.last_draft.borrow().clone().unwrap();
        assert_eq!(draft.subject, "Informatyka");
        assert_eq!(draft.hourly_rate, Decimal::from(90));
        assert_eq!(backend.calls(), vec!["add_announcement"]);
    }

    #[test]
    fn test_rate_validation() {
        let with_rate = |rate: &str| AnnouncementForm {
            hourly_rate: rate.to_string(),
            ..add_form()
        };
        assert!(matches!(
            with_rate("0").to_draft(SubjectPolicy::Restricted),
            Err(ActionError::InvalidRate)
        ));
        assert!(matches!(
            with_rate("-5").to_draft(SubjectPolicy::Restricted),
            Err(ActionError::InvalidRate)
        ));
        assert!(matches!(
            with_rate("abc").to_draft(SubjectPolicy::Restricted),
            Err(ActionError::InvalidRate)
        ));
        let draft = with_rate("72,50").to_draft(SubjectPolicy::Restricted).unwrap();
        assert_eq!(draft.hourly_rate, Decimal::from_str("72.50").unwrap());
    }

    #[test]
    fn test_edit_subject_policy() {
        let form = AnnouncementForm {
            subject: "Astronomia".to_string(),
            ..add_form()
        };
        assert_eq!(
            form.to_draft(SubjectPolicy::Free).unwrap().subject,
            "Astronomia"
        );
        assert!(matches!(
            form.to_draft(SubjectPolicy::Restricted),
            Err(ActionError::UnknownSubject)
        ));

        let blank = AnnouncementForm {
            subject: "  ".to_string(),
            ..add_form()
        };
        assert!(matches!(
            blank.to_draft(SubjectPolicy::Free),
            Err(ActionError::MissingSubject)
        ));
    }

    #[tokio::test]
    async fn test_edit_preload_needs_token() {
        let backend = FakeBackend {
            announcements: vec![announcement(5, 1)],
            ..FakeBackend::new()
        };
        let err = load_announcement_form(&backend, None, 5, SubjectPolicy::Free).await.unwrap_err();
        assert!(err.requires_login());
        assert_eq!(backend.call_count(), 0);

        let form = load_announcement_form(&backend, Some("t"), 5, SubjectPolicy::Free).await.unwrap();
        assert_eq!(form.subject, "Matematyka");
        assert_eq!(form.hourly_rate, "60");
        assert!(form.terms_accepted);
    }

    #[tokio::test]
    async fn test_restricted_preload_replaces_unlisted_subject() {
        let mut stored = announcement(5, 1);
        stored.subject = "Astronomia".to_string();
        let backend = FakeBackend {
            announcements: vec![stored],
            ..FakeBackend::new()
        };

        let free = load_announcement_form(&backend, Some("t"), 5, SubjectPolicy::Free)
            .await
            .unwrap();
        assert_eq!(free.subject, "Astronomia");

        let restricted = load_announcement_form(&backend, Some("t"), 5, SubjectPolicy::Restricted)
            .await
            .unwrap();
        assert_eq!(restricted.subject, Subject::default().label());
        assert!(restricted.to_draft(SubjectPolicy::Restricted).is_ok());
    }

    #[tokio::test]
    async fn test_edit_preload_failure_message() {
        let backend = FakeBackend::new();
        let err = load_announcement_form(&backend, Some("t"), 99, SubjectPolicy::Free)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), EDIT_LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_edit_submits_put() {
        let backend = FakeBackend::new();
        let form = AnnouncementForm {
            subject: "Astronomia".to_string(),
            terms_accepted: false,
            ..add_form()
        };
        form.submit_edit(&backend, Some("t"), 5, SubjectPolicy::Free)
            .await
            .unwrap();
        assert_eq!(backend.calls(), vec!["edit_announcement"]);
    }

    #[tokio::test]
    async fn test_profile_requires_confirmation() {
        let backend = FakeBackend::new();
        let form = ProfileForm::from_user(&user(2, false));

        let err = form.submit(&backend, Some("t"), "ok").await.unwrap_err();
        assert!(matches!(err, ActionError::NotConfirmed));
        assert_eq!(backend.call_count(), 0);

        form.submit(&backend, Some("t"), "OK").await.unwrap();
        let update = backend.last_update.borrow().clone().unwrap();
        assert_eq!(update.first_name, "Ola");
        assert_eq!(update.phone_number, "");
    }

    #[tokio::test]
    async fn test_logged_out_profile_is_short_circuited() {
        let backend = FakeBackend {
            me: Some(user(2, false)),
            ..FakeBackend::new()
        };
        assert!(load_profile(&backend, None).await.unwrap_err().requires_login());
        assert_eq!(backend.call_count(), 0);
        assert_eq!(load_profile(&backend, Some("t")).await.unwrap().id, 2);
    }

    #[test]
    fn test_search_form_to_filter() {
        let form = SearchForm {
            subject: "Matematyka".to_string(),
            min_rate: "50".to_string(),
            max_rate: "100".to_string(),
        };
        let filter = form.to_filter().unwrap();
        assert_eq!(filter.subject.as_deref(), Some("Matematyka"));
        assert_eq!(filter.min_rate, Some(Decimal::from(50)));
        assert_eq!(filter.max_rate, Some(Decimal::from(100)));

        assert!(SearchForm::default().to_filter().unwrap().is_empty());
        assert!(SearchForm::default().is_blank());
    }

    #[test]
    fn test_search_form_rejects_bad_bounds() {
        let inverted = SearchForm {
            min_rate: "100".to_string(),
            max_rate: "50".to_string(),
            ..SearchForm::default()
        };
        assert!(matches!(inverted.to_filter(), Err(ActionError::InvalidRange)));

        let garbage = SearchForm {
            min_rate: "cheap".to_string(),
            ..SearchForm::default()
        };
        assert!(matches!(
            garbage.to_filter(),
            Err(ActionError::InvalidRateFilter)
        ));
    }

    #[test]
    fn test_form_phase() {
        assert!(FormPhase::Submitting.is_submitting());
        assert_eq!(FormPhase::settle(&Ok::<_, ActionError>(())), FormPhase::Done);
        assert!(FormPhase::Editing.error().is_none());
    }
}
