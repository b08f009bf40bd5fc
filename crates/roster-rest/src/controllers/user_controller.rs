//! User listing controller.

use crate::{
    extractors::ListQuery,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use roster_core::{RosterError, UserId};
use roster_service::{UserListResponse, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/all", get(list_users))
        .route("/user/:id", get(get_user))
}

/// List users with pagination.
#[utoipa::path(
    get,
    path = "/users/all",
    tag = "users",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-indexed, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 5)")
    ),
    responses(
        (status = 200, description = "One page of users plus the collection total", body = UserListResponse),
        (status = 422, description = "page or limit is not a positive integer"),
        (status = 500, description = "Unexpected error")
    )
)]
async fn list_users(State(state): State<AppState>, query: ListQuery) -> ApiResult<UserListResponse> {
    debug!("List users request");

    let response = state.user_service.list_users(query.into()).await?;
    ok("Users fetched successfully", response)
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The requested user", body = UserResponse),
        (status = 404, description = "No user with the given id"),
        (status = 500, description = "Unexpected error")
    )
)]
async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;

    let response = state.user_service.get_user(user_id).await?;
    ok("User fetched successfully", response)
}

/// Helper to parse a user ID from the path parameter.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id)
        .map_err(|_| AppError(RosterError::validation(format!("Invalid user id: {}", id))))
}
