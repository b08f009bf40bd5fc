//! User-related DTOs.

use chrono::{DateTime, Utc};
use roster_core::{Page, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// User list response: one window of users plus the collection total.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: u64,
}

impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        let total = page.total;
        Self {
            users: page.into_iter().map(UserResponse::from).collect(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: i64) -> User {
        let now = Utc::now();
        User {
            id: UserId::from_i64(id),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_response_from_user() {
        let user = test_user(1);
        let response = UserResponse::from(user.clone());

        assert_eq!(response.id, user.id);
        assert_eq!(response.name, user.name);
        assert_eq!(response.email, user.email);
    }

    #[test]
    fn test_list_response_from_page() {
        let page = Page::new(vec![test_user(6), test_user(7)], 7);
        let response = UserListResponse::from(page);

        assert_eq!(response.users.len(), 2);
        assert_eq!(response.total, 7);
        assert_eq!(response.users[0].id, UserId(6));
    }

    #[test]
    fn test_list_response_from_empty_page() {
        let page: Page<User> = Page::empty();
        let response = UserListResponse::from(page);

        assert!(response.users.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_list_response_serializes_users_and_total() {
        let response = UserListResponse::from(Page::new(vec![test_user(1)], 1));
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["users"].is_array());
        assert_eq!(json["total"], 1);
    }
}
