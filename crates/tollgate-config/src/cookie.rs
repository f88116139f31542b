use crate::error::ConfigError;
use crate::{env_lookup, non_empty, parse_bool};

/// Name of the cookie the login endpoint sets and the verifier reads.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Attributes of the session cookie. It is always `HttpOnly` and
/// `SameSite=Strict`; only `Secure` is configurable (`AUTH_COOKIE_SECURE`,
/// default true) so local HTTP development still works.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { secure: true }
    }
}

impl CookieConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secure = match non_empty(&lookup, "AUTH_COOKIE_SECURE") {
            Some(raw) => parse_bool("AUTH_COOKIE_SECURE", &raw)?,
            None => true,
        };
        Ok(Self { secure })
    }
}
