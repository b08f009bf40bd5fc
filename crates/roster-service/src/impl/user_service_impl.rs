//! User service implementation.

use crate::dto::{UserListResponse, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{PageRequest, RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::debug;

/// Generic user service implementation.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse> {
        debug!("Listing users, page: {}, limit: {}", page.page, page.limit);

        page.validate()?;

        let users = self.user_repository.find_page(page).await?;
        Ok(UserListResponse::from(users))
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;
    use roster_core::{Page, User};

    mock! {
        UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;
            async fn find_page(&self, page: PageRequest) -> RosterResult<Page<User>>;
            async fn count(&self) -> RosterResult<u64>;
        }
    }

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

    fn service(repo: MockUserRepo) -> UserServiceImpl<MockUserRepo> {
        UserServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_users_rejects_zero_page_before_touching_storage() {
        // No expectation set: a repository call would panic the mock.
        let svc = service(MockUserRepo::new());

        let err = svc.list_users(PageRequest::new(0, 5)).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("page"));
    }

    #[tokio::test]
    async fn test_list_users_rejects_negative_limit() {
        let svc = service(MockUserRepo::new());

        let err = svc.list_users(PageRequest::new(1, -1)).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("limit"));
    }

    #[tokio::test]
    async fn test_list_users_reports_page_before_limit() {
        let svc = service(MockUserRepo::new());

        let err = svc.list_users(PageRequest::new(-1, 0)).await.unwrap_err();
        assert!(err.to_string().contains("page"));
    }

    #[tokio::test]
    async fn test_list_users_returns_window_and_total() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_page()
            .withf(|page| page.page == 2 && page.limit == 5)
            .returning(|_| Ok(Page::new(vec![test_user(6), test_user(7)], 7)));
        let svc = service(repo);

        let response = svc.list_users(PageRequest::new(2, 5)).await.unwrap();
        assert_eq!(response.users.len(), 2);
        assert_eq!(response.total, 7);
    }

    #[tokio::test]
    async fn test_list_users_default_request_is_first_page_of_five() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_page()
            .withf(|page| page.page == 1 && page.limit == 5)
            .returning(|_| Ok(Page::empty()));
        let svc = service(repo);

        let response = svc.list_users(PageRequest::default()).await.unwrap();
        assert!(response.users.is_empty());
        assert_eq!(response.total, 0);
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id()
            .with(eq(UserId(1)))
            .returning(|_| Ok(Some(test_user(1))));
        let svc = service(repo);

        let response = svc.get_user(UserId(1)).await.unwrap();
        assert_eq!(response.id, UserId(1));
        assert_eq!(response.name, "User 1");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id()
            .with(eq(UserId(999)))
            .returning(|_| Ok(None));
        let svc = service(repo);

        let err = svc.get_user(UserId(999)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(err.to_string().contains("999"));
    }

    #[tokio::test]
    async fn test_get_user_idempotent() {
        let mut repo = MockUserRepo::new();
        let user = test_user(1);
        repo.expect_find_by_id()
            .with(eq(UserId(1)))
            .times(2)
            .returning(move |_| Ok(Some(user.clone())));
        let svc = service(repo);

        let first = svc.get_user(UserId(1)).await.unwrap();
        let second = svc.get_user(UserId(1)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_users_propagates_repository_failure() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_page()
            .returning(|_| Err(RosterError::Database("connection lost".to_string())));
        let svc = service(repo);

        let err = svc.list_users(PageRequest::first()).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
