//! API response types.
//!
//! Every response on the public surface uses the same envelope:
//! `{success, message, data}`, where `data` is an object or null.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Standard API response wrapper.
///
/// `data` is serialized even when null so the envelope shape is uniform
/// across success and failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Creates a failure response with no data.
    pub fn failure(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Unexpected failures keep their detail in the log only.
        if status.is_server_error() {
            error!(code = self.0.error_code(), "request failed: {}", self.0);
        }

        let body = Json(ApiResponse::<()>::failure(self.0.client_message()));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(message: &str, data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(message, data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Users fetched successfully", vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Users fetched successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_failure_envelope_keeps_null_data() {
        let response = ApiResponse::<()>::failure("User with id 999 not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User with id 999 not found");
        assert!(json["data"].is_null());
        // The key must be present even when null.
        assert!(json.as_object().unwrap().contains_key("data"));
    }
}
