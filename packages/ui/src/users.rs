//! Admin user directory: list every account and delete non-staff ones.

use api::{Backend, UserInfo};

use crate::error::{require_token, ActionError};

pub const USERS_LOAD_FAILED: &str = "Failed to fetch users. You might not have permission.";
pub const USER_DELETE_FAILED: &str = "Failed to delete user. You might not have permission.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    pub users: Vec<UserInfo>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl UserDirectory {
    pub fn loaded(users: Vec<UserInfo>) -> Self {
        Self {
            users,
            loaded: true,
            error: None,
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}

/// Staff accounts are not offered for deletion.
pub fn can_delete(user: &UserInfo) -> bool {
    !user.is_staff
}

pub async fn load_users<B: Backend>(
    backend: &B,
    token: Option<&str>,
) -> Result<Vec<UserInfo>, ActionError> {
    let token = require_token(token)?;
    backend
        .list_users(token)
        .await
        .map_err(|e| ActionError::request(USERS_LOAD_FAILED, e))
}

pub async fn delete_user<B: Backend>(
    backend: &B,
    token: Option<&str>,
    id: i64,
) -> Result<(), ActionError> {
    let token = require_token(token)?;
    backend
        .delete_user(token, id)
        .await
        .map_err(|e| ActionError::request(USER_DELETE_FAILED, e))?;
    tracing::info!(id, "user deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, FakeBackend};

    #[tokio::test]
    async fn test_load_and_delete() {
        let backend = FakeBackend {
            users: vec![user(1, true), user(2, false), user(3, false)],
            ..FakeBackend::new()
        };

        let mut directory = UserDirectory::loaded(load_users(&backend, Some("t")).await.unwrap());
        assert_eq!(directory.users.len(), 3);

        delete_user(&backend, Some("t"), 2).await.unwrap();
        assert!(directory.remove(2));
        let remaining: Vec<i64> = directory.users.iter().map(|u| u.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_logged_out_sends_nothing() {
        let backend = FakeBackend::new();
        assert!(load_users(&backend, None).await.unwrap_err().requires_login());
        assert!(delete_user(&backend, None, 2).await.unwrap_err().requires_login());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_forbidden_list() {
        let backend = FakeBackend::new().failing("list_users");
        let err = load_users(&backend, Some("t")).await.unwrap_err();
        assert_eq!(err.to_string(), USERS_LOAD_FAILED);
    }

    #[test]
    fn test_staff_cannot_be_deleted() {
        assert!(!can_delete(&user(1, true)));
        assert!(can_delete(&user(2, false)));
    }
}
