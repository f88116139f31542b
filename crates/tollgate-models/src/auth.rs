//! Login request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials posted to `/login`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "admin")]
    pub password: String,
}

/// Successful login. The same token is also set as the `token` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Seconds until the token expires.
    #[schema(example = 3600)]
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            success: true,
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
