//! Claim set signed into every access token.

use serde::{Deserialize, Serialize};
use tollgate_models::Role;

/// Claims written at login.
///
/// The whole set is covered by the signature; changing any field invalidates
/// the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the credential record's id
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

/// A freshly signed token plus the expiry metadata the login response needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Same value as the `exp` claim.
    pub expires_at: i64,
}
