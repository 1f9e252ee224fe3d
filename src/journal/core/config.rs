//! Configuration for the journal service.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::journal::core::errors::{JournalError, JournalResult};

/// Environment variable holding the generative API credential.
pub const API_KEY_ENV: &str = "KEEPSAKE_API_KEY";
/// Environment variable overriding the `SQLite` database path.
pub const DB_PATH_ENV: &str = "KEEPSAKE_DB";
/// Environment variable overriding the server port.
pub const PORT_ENV: &str = "KEEPSAKE_PORT";
/// Environment variable overriding the suggestion model id.
pub const MODEL_ENV: &str = "KEEPSAKE_MODEL";
/// Environment variable overriding the generative API base URL.
pub const SUGGEST_URL_ENV: &str = "KEEPSAKE_SUGGEST_URL";

/// Top-level configuration for the journal service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Key-value store settings.
    pub storage: StorageConfig,
    /// Title suggestion settings.
    pub suggestion: SuggestionConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl JournalConfig {
    /// Build a configuration from `KEEPSAKE_*` environment variables,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            config.storage.sqlite_path = PathBuf::from(path);
        }
        config.suggestion.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.suggestion.model = model;
        }
        if let Ok(base_url) = std::env::var(SUGGEST_URL_ENV) {
            config.suggestion.base_url = base_url;
        }
        if let Some(port) = std::env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()) {
            config.server.port = port;
        }

        config
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> JournalResult<()> {
        if self.storage.store_key.trim().is_empty() {
            return Err(JournalError::InvalidConfig(
                "storage.store_key must not be empty".to_string(),
            ));
        }

        if self.suggestion.model.trim().is_empty() {
            return Err(JournalError::InvalidConfig(
                "suggestion.model must not be empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.suggestion.temperature) {
            return Err(JournalError::InvalidConfig(
                "suggestion.temperature must be in 0.0..=2.0".to_string(),
            ));
        }

        if self.suggestion.timeout_seconds == 0 {
            return Err(JournalError::InvalidConfig(
                "suggestion.timeout_seconds must be > 0".to_string(),
            ));
        }

        Url::parse(&self.suggestion.base_url)?;

        Ok(())
    }
}

/// Key-value store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `SQLite` database path.
    pub sqlite_path: PathBuf,
    /// Fixed key holding the serialized memory collection.
    pub store_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sqlite_path: PathBuf::from("keepsake.sqlite"),
            store_key: "memories".to_string(),
        }
    }
}

/// Title suggestion settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Generative API credential. `None` disables the feature entirely.
    pub api_key: Option<String>,
    /// Target model identifier.
    pub model: String,
    /// Sampling temperature for generation.
    pub temperature: f64,
    /// Base URL of the generative API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.8,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// HTTP server settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: crate::server::DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = JournalConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.suggestion.api_key.is_none());
    }

    #[test]
    fn test_empty_store_key_rejected() {
        let mut config = JournalConfig::default();
        config.storage.store_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = JournalConfig::default();
        config.suggestion.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = JournalConfig::default();
        config.suggestion.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
