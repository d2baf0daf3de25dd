//! # User payloads
//!
//! [`UserInfo`] mirrors what `/user/me/` and `/users/` return. The remaining
//! structs are request bodies:
//!
//! - [`Credentials`] → `POST /login/`, answered by [`LoginResponse`]
//! - [`Registration`] → `POST /register/`
//! - [`ProfileUpdate`] → `PUT /user/edit/` (the mutable subset: names and phone)

use serde::{Deserialize, Serialize};
use store::Tokens;

/// A user account as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
}

impl UserInfo {
    /// Full name, falling back to the email when both name parts are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Phone number, treating a blank string as absent.
    pub fn phone(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_staff {
            "Admin"
        } else {
            "User"
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful `/login/` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

impl LoginResponse {
    pub fn tokens(&self) -> Tokens {
        Tokens {
            access: self.access.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Optional on the backend; sent blank when not given.
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_me_payload() {
        let user: UserInfo = serde_json::from_str(
            r#"{
                "id": 7,
                "username": "anna",
                "email": "anna@example.com",
                "first_name": "Anna",
                "last_name": "Nowak",
                "phone_number": null,
                "is_staff": true
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.display_name(), "Anna Nowak");
        assert!(user.phone().is_none());
        assert_eq!(user.role_label(), "Admin");
    }

    #[test]
    fn test_blank_names_fall_back_to_email() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 1, "email": "x@example.com", "phone_number": "  "}"#)
                .unwrap();
        assert_eq!(user.display_name(), "x@example.com");
        assert!(user.phone().is_none());
        assert!(!user.is_staff);
    }

    #[test]
    fn test_login_response_tokens() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"access": "a1", "refresh": "r1", "user_id": 3}"#).unwrap();
        assert_eq!(
            body.tokens(),
            Tokens {
                access: "a1".to_string(),
                refresh: "r1".to_string()
            }
        );
    }

    #[test]
    fn test_profile_update_field_names() {
        let body = serde_json::to_value(ProfileUpdate {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            phone_number: "123456789".to_string(),
        })
        .unwrap();
        assert_eq!(body["phone_number"], "123456789");
        assert!(body.get("phone").is_none());
    }
}
