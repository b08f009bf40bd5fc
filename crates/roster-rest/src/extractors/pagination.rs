//! Pagination extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use roster_core::{PageRequest, RosterError};
use serde::Deserialize;

/// Query parameters for pagination.
///
/// Each parameter defaults independently when absent; out-of-range values
/// are rejected later by `PageRequest::validate`, so this extractor only
/// guards the integer shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<ListQuery> for PageRequest {
    fn from(query: ListQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(PageRequest::DEFAULT_PAGE),
            query.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A malformed query string must still produce the response
        // envelope, so the framework rejection is translated here.
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError(RosterError::validation(
                    "page and limit must be integers",
                ))
            })?;

        Ok(query)
    }
}
