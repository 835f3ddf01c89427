//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::types::AuthResponse;

/// User registration request
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Username, unique and case-sensitive
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// User login request
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already taken"),
        (status = 503, description = "Credential store unavailable")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    state
        .accounts
        .create(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::success())))
}

/// Check a username and password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = AuthResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Unknown user or wrong password"),
        (status = 503, description = "Credential store unavailable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let accepted = state
        .accounts
        .authenticate(&payload.username, &payload.password)
        .await?;

    if !accepted {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(AuthResponse::success()))
}
