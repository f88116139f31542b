//! Token issuance and verification.
//!
//! Tokens are compact JWS strings signed with the configured HMAC secret.
//! [`verify_token_at`] is the one verifier every caller goes through; it
//! applies these checks in order and stops at the first failure:
//!
//! 1. signature and algorithm ([`AuthError::MalformedToken`])
//! 2. expiry, rejecting when `now >= exp` ([`AuthError::TokenExpired`])
//! 3. exact issuer and audience ([`AuthError::MalformedToken`])
//! 4. presence of `sub`, `username`, `role` and `exp` ([`AuthError::InvalidPayload`])
//!
//! # Example
//!
//! ```ignore
//! use tollgate_auth::{create_access_token, verify_token};
//! use tollgate_config::JwtConfig;
//! use tollgate_models::Role;
//!
//! let config = JwtConfig::from_env()?;
//! let issued = create_access_token("42", "admin", Role::Admin, &config)?;
//! let identity = verify_token(&issued.token, &config)?;
//! assert_eq!(identity.subject, "42");
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::Value;
use tollgate_config::JwtConfig;
use tollgate_models::Role;

use crate::claims::{IssuedToken, TokenClaims};
use crate::error::AuthError;
use crate::identity::IdentityContext;

/// Signs a token for the given identity, valid from now for the configured TTL.
pub fn create_access_token(
    subject: &str,
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<IssuedToken, AuthError> {
    create_access_token_at(subject, username, role, jwt_config, Utc::now().timestamp())
}

/// Same as [`create_access_token`] with an explicit issue time (Unix seconds).
pub fn create_access_token_at(
    subject: &str,
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<IssuedToken, AuthError> {
    let exp = now
        .checked_add(jwt_config.access_token_expiry)
        .ok_or_else(|| {
            tracing::error!(
                ttl = jwt_config.access_token_expiry,
                "Access token expiry overflows the issue time"
            );
            AuthError::ServerError
        })?;

    let claims = TokenClaims {
        sub: subject.to_string(),
        username: username.to_string(),
        role,
        iss: jwt_config.issuer.clone(),
        aud: jwt_config.audience.clone(),
        iat: now,
        exp,
    };

    let token = encode(
        &Header::new(jwt_config.algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        AuthError::ServerError
    })?;

    Ok(IssuedToken {
        token,
        expires_in: jwt_config.access_token_expiry,
        expires_at: exp,
    })
}

/// Verifies a token against the current time.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<IdentityContext, AuthError> {
    verify_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Verifies a token as of `now` (Unix seconds) and returns the identity it carries.
pub fn verify_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<IdentityContext, AuthError> {
    let payload = decode_signed_payload(token, jwt_config)?;

    // The signature is already verified here, so a shape problem is the
    // payload's fault rather than a forged token.
    let claims = payload.as_object().ok_or(AuthError::InvalidPayload)?;

    // RFC 7519 NumericDate may be fractional. A non-numeric `exp` is left
    // for the payload check below.
    let exp = claims.get("exp").and_then(Value::as_f64);
    if let Some(exp) = exp {
        if now as f64 >= exp {
            return Err(AuthError::TokenExpired {
                renew_url: jwt_config.renew_url.clone(),
            });
        }
    }

    let issuer = claims.get("iss").and_then(Value::as_str);
    if issuer != Some(jwt_config.issuer.as_str()) {
        return Err(AuthError::MalformedToken);
    }
    if !claims
        .get("aud")
        .is_some_and(|aud| audience_contains(aud, &jwt_config.audience))
    {
        return Err(AuthError::MalformedToken);
    }

    let subject = claims
        .get("sub")
        .and_then(subject_string)
        .filter(|sub| !sub.trim().is_empty())
        .ok_or(AuthError::InvalidPayload)?;

    if exp.is_none() {
        return Err(AuthError::InvalidPayload);
    }

    let username = claims
        .get("username")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(AuthError::InvalidPayload)?;

    let role = claims
        .get("role")
        .and_then(Value::as_str)
        .map(Role::from_str)
        .and_then(Result::ok)
        .ok_or(AuthError::InvalidPayload)?;

    Ok(IdentityContext {
        subject,
        username: username.to_string(),
        role,
    })
}

/// Checks structure, algorithm and signature only; claim validation is done
/// by hand in [`verify_token_at`] so the checks run in a fixed order.
fn decode_signed_payload(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<serde_json::Value, AuthError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    validation.required_spec_claims = HashSet::new();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;

    decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::Crypto(_) | ErrorKind::InvalidKeyFormat | ErrorKind::InvalidEcdsaKey => {
            tracing::error!(error = %e, "Token verification failed unexpectedly");
            AuthError::ServerError
        }
        _ => AuthError::MalformedToken,
    })
}

/// Numeric subjects are accepted and compared as strings.
fn subject_string(sub: &Value) -> Option<String> {
    match sub {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// `aud` may be a single string or an array of strings; anything else never matches.
fn audience_contains(aud: &Value, expected: &str) -> bool {
    match aud {
        Value::String(aud) => aud == expected,
        Value::Array(auds) => auds.iter().any(|aud| aud.as_str() == Some(expected)),
        _ => false,
    }
}
