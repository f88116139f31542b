//! # Tollgate Config
//!
//! Configuration types for the Tollgate API, loaded once at startup from
//! environment variables and passed by reference afterwards.
//!
//! - [`jwt`]: token signing and validation parameters
//! - [`cookie`]: attributes of the `token` session cookie
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: bind address
//! - [`store`]: credential store selection
//!
//! Every loader has a `from_env` constructor and a `from_lookup` variant that
//! reads from an arbitrary key/value source, which is what the tests use.
//!
//! # Example
//!
//! ```ignore
//! use tollgate_config::{CookieConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cookie_config = CookieConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cookie;
pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;
pub mod store;

// Re-export commonly used types at crate root
pub use cookie::CookieConfig;
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

/// Reads a variable, treating blank values as unset.
pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`non_empty`], but returns the value exactly as set.
pub(crate) fn non_blank_raw<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses `true/false/1/0/yes/no`, case-insensitively.
pub(crate) fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid(key, format!("expected a boolean, got `{value}`"))),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }
}
