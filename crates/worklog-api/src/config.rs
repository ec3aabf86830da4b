use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Server settings. Defaults are overridden by `WORKLOG_*` environment
/// variables, e.g. `WORKLOG_PORT=9000`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl ServerConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "worklog_api=debug,worklog_core=debug,tower_http=debug";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("WORKLOG").try_parsing(true))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_filter", Self::DEFAULT_LOG_FILTER)?
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("WORKLOG")
            .source(Some(source))
            .try_parsing(true)
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load(env_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::load(env_from(&[
            ("WORKLOG_HOST", "127.0.0.1"),
            ("WORKLOG_PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.log_filter, ServerConfig::DEFAULT_LOG_FILTER);
    }
}
