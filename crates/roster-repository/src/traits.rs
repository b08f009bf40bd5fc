//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Page, PageRequest, RosterResult, User, UserId};

/// Read-only access to the user collection.
///
/// Implementations own ordering and counting; `find_page` must compute the
/// total with a count independent of the windowed query.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Finds one window of users plus the collection total.
    ///
    /// The request is assumed validated; ordering is by ascending id.
    async fn find_page(&self, page: PageRequest) -> RosterResult<Page<User>>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;
}
