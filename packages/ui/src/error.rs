//! Errors surfaced by view actions.
//!
//! Validation variants are raised before any request is sent. A failed
//! request becomes [`ActionError::Request`], which displays a fixed message for
//! the action and keeps the [`ApiError`] as its source for logging.

use api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must accept the terms to continue")]
    TermsNotAccepted,

    #[error("Subject is required")]
    MissingSubject,

    #[error("Choose one of the listed subjects")]
    UnknownSubject,

    #[error("Hourly rate must be a positive number")]
    InvalidRate,

    #[error("Rate filters must be numbers")]
    InvalidRateFilter,

    #[error("Minimum rate cannot be greater than maximum rate")]
    InvalidRange,

    #[error("Type OK to confirm changes")]
    NotConfirmed,

    #[error("You must be logged in")]
    NotLoggedIn,

    #[error("{message}")]
    Request {
        message: &'static str,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    /// Wrap a failed request, logging the underlying error.
    pub fn request(message: &'static str, source: ApiError) -> Self {
        tracing::error!(error = %source, "{message}");
        ActionError::Request { message, source }
    }

    /// The view should send the visitor to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, ActionError::NotLoggedIn)
    }
}

/// Access token or [`ActionError::NotLoggedIn`].
pub fn require_token(token: Option<&str>) -> Result<&str, ActionError> {
    token
        .filter(|t| !t.is_empty())
        .ok_or(ActionError::NotLoggedIn)
}
