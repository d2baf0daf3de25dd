//! Errors returned by [`crate::Backend`] calls.

use thiserror::Error;

/// A failed backend request.
///
/// Response bodies of failed requests are never parsed; callers show a fixed
/// message and log this error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },

    /// The request never completed or its body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status code, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Whether the backend rejected the credentials or the permission check.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            method: "DELETE".to_string(),
            url: "http://localhost:8000/api/announcements/delete/4/".to_string(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "DELETE http://localhost:8000/api/announcements/delete/4/ returned HTTP 403"
        );
        assert_eq!(err.status(), Some(403));
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_server_error_is_not_auth_failure() {
        let err = ApiError::Status {
            method: "GET".to_string(),
            url: "http://localhost:8000/api/users/".to_string(),
            status: 500,
        };
        assert!(!err.is_auth_failure());
    }
}
