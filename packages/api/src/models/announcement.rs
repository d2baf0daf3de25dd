//! # Announcement payloads
//!
//! An [`Announcement`] is a tutoring offer. Its `subject` is kept as the raw
//! string the backend stored, because records edited through a permissive
//! edit form may carry text outside the [`Subject`] set.
//!
//! Hourly rates are decimals. The backend serialises them as strings
//! (`"50.00"`); [`rust_decimal::Decimal`] also accepts plain numbers.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// The school subjects offered by the add form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    #[serde(rename = "Matematyka")]
    Mathematics,
    #[serde(rename = "Fizyka")]
    Physics,
    #[serde(rename = "Chemia")]
    Chemistry,
    #[serde(rename = "Informatyka")]
    ComputerScience,
    #[serde(rename = "Biologia")]
    Biology,
    #[serde(rename = "Język angielski")]
    English,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::ComputerScience,
        Subject::Biology,
        Subject::English,
    ];

    /// The label shown to users and stored by the backend.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Mathematics => "Matematyka",
            Subject::Physics => "Fizyka",
            Subject::Chemistry => "Chemia",
            Subject::ComputerScience => "Informatyka",
            Subject::Biology => "Biologia",
            Subject::English => "Język angielski",
        }
    }

    pub fn from_label(label: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Author summary embedded in every announcement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub hourly_rate: Decimal,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub date_added: DateTime<Utc>,
    pub author: Author,
}

/// RFC 3339, or a timestamp without offset (read as UTC), or a bare date.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

impl Announcement {
    /// The subject as one of the known labels, if it is one.
    pub fn known_subject(&self) -> Option<Subject> {
        Subject::from_label(&self.subject)
    }

    /// Creation date as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date_added.format("%Y-%m-%d").to_string()
    }
}

/// Body for `POST /announcements/add/` and `PUT /announcements/edit/{id}/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnouncementDraft {
    pub subject: String,
    pub content: String,
    pub hourly_rate: Decimal,
}

/// Query for `GET /announcements/search/`. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub subject: Option<String>,
    pub min_rate: Option<Decimal>,
    pub max_rate: Option<Decimal>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.min_rate.is_none() && self.max_rate.is_none()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(subject) = &self.subject {
            pairs.push(("subject", subject.clone()));
        }
        if let Some(min) = self.min_rate {
            pairs.push(("min_rate", min.to_string()));
        }
        if let Some(max) = self.max_rate {
            pairs.push(("max_rate", max.to_string()));
        }
        pairs
    }
}
