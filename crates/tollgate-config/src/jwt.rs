//! Token signing and validation parameters.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required): HMAC signing secret. There is no fallback; a
//!   missing or blank secret is a startup error.
//! - `JWT_ISSUER` (required): value of the `iss` claim, checked on every request
//! - `JWT_AUDIENCE` (required): value of the `aud` claim, checked on every request
//! - `JWT_ACCESS_EXPIRY`: token lifetime in seconds (default: 3600, at most one year)
//! - `JWT_ALGORITHM`: `HS256`, `HS384` or `HS512` (default: `HS256`)
//! - `JWT_RENEW_URL`: hint returned with expired-token errors
//!   (default: `/api/refresh-token`)

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::error::ConfigError;
use crate::{env_lookup, non_blank_raw, non_empty};

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;
pub const DEFAULT_RENEW_URL: &str = "/api/refresh-token";

/// Longest accepted `JWT_ACCESS_EXPIRY`: one year.
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 365 * 24 * 60 * 60;

/// Secrets shorter than this still load, with a warning.
pub const RECOMMENDED_SECRET_LENGTH: usize = 32;

#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
    pub issuer: String,
    pub audience: String,
    /// The only algorithm accepted when verifying.
    pub algorithm: Algorithm,
    pub renew_url: String,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Whitespace is part of the key; only an all-blank secret counts as unset.
        let secret =
            non_blank_raw(&lookup, "JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            tracing::warn!(
                length = secret.len(),
                recommended = RECOMMENDED_SECRET_LENGTH,
                "JWT_SECRET is shorter than recommended"
            );
        }

        let issuer = non_empty(&lookup, "JWT_ISSUER").ok_or(ConfigError::Missing("JWT_ISSUER"))?;
        let audience =
            non_empty(&lookup, "JWT_AUDIENCE").ok_or(ConfigError::Missing("JWT_AUDIENCE"))?;

        let access_token_expiry = match non_empty(&lookup, "JWT_ACCESS_EXPIRY") {
            Some(raw) => parse_expiry(&raw)?,
            None => DEFAULT_ACCESS_TOKEN_EXPIRY,
        };

        let algorithm = match non_empty(&lookup, "JWT_ALGORITHM") {
            Some(raw) => parse_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let renew_url =
            non_empty(&lookup, "JWT_RENEW_URL").unwrap_or_else(|| DEFAULT_RENEW_URL.to_string());

        Ok(Self {
            secret,
            access_token_expiry,
            issuer,
            audience,
            algorithm,
            renew_url,
        })
    }
}

fn parse_expiry(raw: &str) -> Result<i64, ConfigError> {
    let seconds: i64 = raw
        .parse()
        .map_err(|_| ConfigError::invalid("JWT_ACCESS_EXPIRY", format!("`{raw}` is not a number of seconds")))?;
    if seconds <= 0 {
        return Err(ConfigError::invalid("JWT_ACCESS_EXPIRY", "must be greater than zero"));
    }
    if seconds > MAX_ACCESS_TOKEN_EXPIRY {
        return Err(ConfigError::invalid(
            "JWT_ACCESS_EXPIRY",
            format!("must be at most {MAX_ACCESS_TOKEN_EXPIRY} seconds"),
        ));
    }
    Ok(seconds)
}

/// Only the HMAC family works with a shared secret.
fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm = Algorithm::from_str(&raw.to_ascii_uppercase())
        .map_err(|_| ConfigError::invalid("JWT_ALGORITHM", format!("unknown algorithm `{raw}`")))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(ConfigError::invalid(
            "JWT_ALGORITHM",
            format!("{other:?} is not an HMAC algorithm"),
        )),
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("algorithm", &self.algorithm)
            .field("renew_url", &self.renew_url)
            .finish()
    }
}
