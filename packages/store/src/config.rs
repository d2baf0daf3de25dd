//! # Client configuration: `tutoring.toml`
//!
//! Defines the TOML file compiled into the web client (filename:
//! [`ClientConfig::filename`] = `"tutoring.toml"`). It tells the client where the
//! REST backend lives and how permissive the announcement edit form is.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [forms]
//! edit_subject = "free"   # "restricted" limits edits to the six listed subjects
//!
//! [listing]
//! currency = "zł/h"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helpers (`new`, `with_edit_subject`), TOML (de)serialisation, the canonical filename. |
//! | [`ApiConfig`] | Backend base URL, default `http://localhost:8000/api`. |
//! | [`FormsConfig`] | [`SubjectPolicy`] applied by the edit form, default [`SubjectPolicy::Free`]. |
//! | [`ListingConfig`] | Display suffix printed after hourly rates. |
//!
//! All structs implement `Default`, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Top-level configuration stored in `tutoring.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. A trailing slash is ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Which subjects the edit form accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectPolicy {
    /// Only the six listed subjects, chosen from a select.
    Restricted,
    /// Any non-empty text.
    #[default]
    Free,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub edit_subject: SubjectPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Suffix rendered after an hourly rate.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "zł/h".to_string()
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the edit form's subject policy.
    pub fn with_edit_subject(mut self, policy: SubjectPolicy) -> Self {
        self.forms.edit_subject = policy;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tutoring.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
