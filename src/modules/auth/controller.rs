use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tollgate_auth::{AuthError, AuthErrorBody, IdentityContext};
use tollgate_config::CookieConfig;
use tollgate_config::cookie::TOKEN_COOKIE_NAME;
use tollgate_core::ErrorResponse;
use tollgate_models::{LoginRequest, LoginResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// `HttpOnly; SameSite=Strict; Path=/`, plus `Secure` when configured.
fn token_cookie(value: String, max_age: time::Duration, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, value))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(max_age)
        .secure(config.secure)
        .build()
}

/// Login and receive a bearer token
///
/// The token is returned in the body and also set as the `token` cookie.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = AuthErrorBody),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Authentication service error", body = AuthErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AuthError> {
    let outcome = AuthService::login_user(&state.authenticator, dto, &state.jwt_config).await?;
    let issued = outcome.token;

    let cookie = token_cookie(
        issued.token.clone(),
        time::Duration::seconds(issued.expires_in),
        &state.cookie_config,
    );

    Ok((
        jar.add(cookie),
        Json(LoginResponse::bearer(issued.token, issued.expires_in)),
    ))
}

/// Clear the token cookie
///
/// Tokens are not revoked server-side; one already handed out stays valid
/// until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 204, description = "Cookie cleared")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout_user(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, CookieJar) {
    let cleared = token_cookie(String::new(), time::Duration::ZERO, &state.cookie_config);
    (StatusCode::NO_CONTENT, jar.add(cleared))
}

/// Get the identity carried by the caller's token
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Verified identity", body = IdentityContext),
        (status = 400, description = "Token payload is invalid", body = AuthErrorBody),
        (status = 401, description = "Missing token", body = AuthErrorBody),
        (status = 403, description = "Malformed or expired token", body = AuthErrorBody)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    ),
    tag = "Identity"
)]
#[instrument(skip_all)]
pub async fn get_current_identity(AuthUser(identity): AuthUser) -> Json<IdentityContext> {
    Json(identity)
}
