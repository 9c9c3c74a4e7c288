//! Studio configuration supplied by the host page
//!
//! Every field has a default, so hosts can pass `{}` or only the keys they
//! care about.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("invalid config: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudioConfig {
    /// Maximum level forwarded to the browser console
    pub log_level: String,

    /// Prefix for the storage keys hosts persist snapshots under
    pub storage_namespace: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage_namespace: "storefront-studio".to_string(),
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map(|level| level.to_level_filter())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Apply the log level to the global `log` filter
    pub fn apply(&self) -> Result<(), ConfigError> {
        let filter = self.level_filter()?;
        log::set_max_level(filter);
        log::info!("studio log level set to {}", filter);
        Ok(())
    }

    /// Key for one page of one store, e.g. `storefront-studio:acme:product-card`
    pub fn storage_key(&self, store: &str, page: &str) -> String {
        format!("{}:{}:{}", self.storage_namespace, store, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = StudioConfig::from_json("{}").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.level_filter(), Ok(log::LevelFilter::Info));
    }

    #[test]
    fn test_partial_override() {
        let config = StudioConfig::from_json(r#"{"logLevel":"debug"}"#).unwrap();
        assert_eq!(config.level_filter(), Ok(log::LevelFilter::Debug));
        assert_eq!(config.storage_namespace, "storefront-studio");
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = StudioConfig {
            log_level: "loud".to_string(),
            ..StudioConfig::default()
        };
        assert_eq!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            StudioConfig::from_json("[1, 2]"),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_storage_key() {
        let config = StudioConfig::default();
        assert_eq!(
            config.storage_key("acme", "product-card"),
            "storefront-studio:acme:product-card"
        );
    }
}
