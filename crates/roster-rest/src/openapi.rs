//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use roster_core::UserId;
use roster_service::{UserListResponse, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "Paginated user-listing REST API",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            UserResponse,
            UserListResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User listing endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
