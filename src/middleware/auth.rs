use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tollgate_auth::{AuthError, IdentityContext, extract_token, verify_token};
use tollgate_config::JwtConfig;
use tollgate_models::Role;
use tollgate_observability::track_token_rejected;

use crate::state::AppState;

/// Extracts and verifies the request's token.
///
/// Rejections are logged by error code only; the token itself never is.
pub fn authorize(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<IdentityContext, AuthError> {
    let token = extract_token(headers).inspect_err(log_rejection)?;

    let identity = verify_token(&token.value, jwt_config).inspect_err(|err| {
        tracing::warn!(
            code = err.code(),
            source = token.source.as_str(),
            "Token rejected"
        );
        track_token_rejected(err.code());
    })?;

    tracing::debug!(
        subject = %identity.subject,
        role = %identity.role,
        source = token.source.as_str(),
        "Token verified"
    );
    Ok(identity)
}

fn log_rejection(err: &AuthError) {
    tracing::warn!(code = err.code(), "Token rejected");
    track_token_rejected(err.code());
}

/// Gate for protected routers. On success the [`IdentityContext`] is placed
/// in the request extensions for [`AuthUser`] to pick up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authorize(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// The verified caller.
///
/// Behind [`require_auth`] this reads the identity the layer stored. On a
/// route without the layer it verifies the token itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub IdentityContext);

impl AuthUser {
    pub fn subject(&self) -> &str {
        &self.0.subject
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<IdentityContext>() {
            return Ok(AuthUser(identity.clone()));
        }

        authorize(&parts.headers, &state.jwt_config).map(AuthUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use jsonwebtoken::Algorithm;
    use tollgate_auth::create_access_token;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
            issuer: "tollgate-api".to_string(),
            audience: "tollgate-clients".to_string(),
            algorithm: Algorithm::HS256,
            renew_url: "/api/refresh-token".to_string(),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_authorize_valid_token() {
        let config = get_test_jwt_config();
        let issued = create_access_token("11", "dube", Role::DubeViewer, &config).unwrap();

        let identity = authorize(&bearer(&issued.token), &config).unwrap();
        let user = AuthUser(identity);
        assert_eq!(user.subject(), "11");
        assert_eq!(user.username(), "dube");
        assert_eq!(user.role(), Role::DubeViewer);
    }

    #[test]
    fn test_authorize_without_token() {
        let config = get_test_jwt_config();
        assert_eq!(
            authorize(&HeaderMap::new(), &config),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_authorize_garbage_token() {
        let config = get_test_jwt_config();
        assert_eq!(
            authorize(&bearer("garbage"), &config),
            Err(AuthError::MalformedToken)
        );
    }
}
