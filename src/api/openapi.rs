//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::types::AuthResponse;

/// OpenAPI documentation for the credential service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "credstore",
        version = "0.1.0",
        description = "User registration and password login backed by Argon2id",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
    ),
    components(
        schemas(
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            AuthResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login")
    )
)]
pub struct ApiDoc;
