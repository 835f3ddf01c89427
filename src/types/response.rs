//! Response envelope shared by the credential endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Boolean success envelope returned by `/api/register` and `/api/login`.
///
/// Error responses carry the same `success` field, see `AppError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the operation succeeded
    #[schema(example = true)]
    pub success: bool,
}

impl AuthResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}
