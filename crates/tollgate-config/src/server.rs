use crate::error::ConfigError;
use crate::{env_lookup, non_empty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = non_empty(&lookup, "SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match non_empty(&lookup, "SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::invalid("SERVER_PORT", format!("`{raw}` is not a port")))?,
            None => 4000,
        };
        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lookup_from;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
    }

    #[test]
    fn test_bad_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[("SERVER_PORT", "99999")]));
        assert!(matches!(result, Err(ConfigError::Invalid { var: "SERVER_PORT", .. })));
    }
}
