//! Authentication error taxonomy.
//!
//! Every failure in login or token verification is one of the [`AuthError`]
//! kinds below. Each kind has a stable code, a fixed message that never
//! includes internal detail, and an HTTP status:
//!
//! | Kind | Status |
//! |------|--------|
//! | `InvalidCredentials` | 401 |
//! | `MissingToken` | 401 |
//! | `MalformedToken` | 403 |
//! | `TokenExpired` | 403 |
//! | `InvalidPayload` | 400 |
//! | `ServerError` | 500 |

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown user, wrong password or inactive account. The three cases
    /// are indistinguishable on purpose.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authorization header or cookie with Bearer token required")]
    MissingToken,

    /// Bad structure, bad signature, wrong algorithm, or issuer/audience mismatch.
    #[error("Invalid token format")]
    MalformedToken,

    #[error("Token expired, please reauthenticate")]
    TokenExpired { renew_url: String },

    /// Authentic token whose payload lacks a required claim.
    #[error("Token payload is invalid")]
    InvalidPayload,

    #[error("Authentication service error")]
    ServerError,
}

/// Error body returned for every [`AuthError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthErrorBody {
    pub success: bool,
    #[schema(example = "TOKEN_EXPIRED")]
    pub error: String,
    pub message: String,
    /// Present only for `TOKEN_EXPIRED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "/api/refresh-token")]
    pub renew_url: Option<String>,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::MalformedToken => "MALFORMED_TOKEN",
            AuthError::TokenExpired { .. } => "TOKEN_EXPIRED",
            AuthError::InvalidPayload => "INVALID_PAYLOAD",
            AuthError::ServerError => "SERVER_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::MalformedToken | AuthError::TokenExpired { .. } => StatusCode::FORBIDDEN,
            AuthError::InvalidPayload => StatusCode::BAD_REQUEST,
            AuthError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> AuthErrorBody {
        let renew_url = match self {
            AuthError::TokenExpired { renew_url } => Some(renew_url.clone()),
            _ => None,
        };

        AuthErrorBody {
            success: false,
            error: self.code().to_string(),
            message: self.to_string(),
            renew_url,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.body());

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
