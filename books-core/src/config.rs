//! Configuration for the books

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Book configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Actor mailbox capacity (bounded channel, gives backpressure)
    pub mailbox_capacity: usize,

    /// Optional JSON seed file; the demo seed is used when absent
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "books-core".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            mailbox_capacity: 1000,
            seed_file: None,
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables, starting from defaults.
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(name) = std::env::var("BOOKS_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(capacity) = std::env::var("BOOKS_MAILBOX_CAPACITY") {
            config.mailbox_capacity = capacity
                .parse()
                .map_err(|e| crate::Error::Config(format!("invalid mailbox capacity: {}", e)))?;
        }

        if let Ok(path) = std::env::var("BOOKS_SEED_FILE") {
            config.seed_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "books-core");
        assert_eq!(config.mailbox_capacity, 1000);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("service_name = \"test-books\"").unwrap();
        assert_eq!(config.service_name, "test-books");
        assert_eq!(config.mailbox_capacity, 1000);
    }
}
