//! Reading the bearer token off a request.
//!
//! The `Authorization: Bearer <token>` header is consulted first and the
//! `token` cookie second. When both are present the header wins, even if the
//! cookie would have verified and the header would not.

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;
use tollgate_config::cookie::TOKEN_COOKIE_NAME;

use crate::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Cookie,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Header => "header",
            TokenSource::Cookie => "cookie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    pub value: String,
    pub source: TokenSource,
}

pub fn extract_token(headers: &HeaderMap) -> Result<ExtractedToken, AuthError> {
    if let Some(value) = bearer_from_header(headers) {
        return Ok(ExtractedToken {
            value,
            source: TokenSource::Header,
        });
    }

    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE_NAME) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Ok(ExtractedToken {
                value: value.to_string(),
                source: TokenSource::Cookie,
            });
        }
    }

    Err(AuthError::MissingToken)
}

/// A header that is absent, not valid UTF-8, uses another scheme, or carries
/// an empty token is not a candidate.
fn bearer_from_header(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
