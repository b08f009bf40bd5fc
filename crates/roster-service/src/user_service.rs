//! User service trait definition.

use crate::dto::{UserListResponse, UserResponse};
use async_trait::async_trait;
use roster_core::{PageRequest, RosterResult, UserId};

/// User service trait.
///
/// Both operations are stateless request/response reads.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users with pagination, returning the window and the
    /// collection total.
    async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;
}
