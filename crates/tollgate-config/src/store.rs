use crate::error::ConfigError;
use crate::{env_lookup, non_empty, parse_bool};

/// Which credential store backs the login endpoint.
///
/// With `DATABASE_URL` set the Postgres store is used. Without it users live
/// in memory, optionally seeded with demo accounts (`SEED_DEMO_USERS`).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub database_url: Option<String>,
    pub seed_demo_users: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = non_empty(&lookup, "DATABASE_URL");
        let seed_demo_users = match non_empty(&lookup, "SEED_DEMO_USERS") {
            Some(raw) => parse_bool("SEED_DEMO_USERS", &raw)?,
            None => false,
        };

        Ok(Self {
            database_url,
            seed_demo_users,
        })
    }
}

// The URL may embed a password.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "[redacted]"))
            .field("seed_demo_users", &self.seed_demo_users)
            .finish()
    }
}
