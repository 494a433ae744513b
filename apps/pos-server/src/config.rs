//! # Server Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LANKA_PORT=8080                                                    │
//! │     LANKA_LOW_STOCK_THRESHOLD=5                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $LANKA_CONFIG, or                                                  │
//! │     ~/.config/lanka-pos/server.toml (Linux)                            │
//! │     ~/Library/Application Support/lk.LankaPOS.lanka-pos/server.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # server.toml
//! [server]
//! bind = "0.0.0.0"
//! port = 8080
//!
//! [store]
//! low_stock_threshold = 10
//! currency = "LKR"
//! receipt_width = 40
//! seed = true
//!
//! [advisor]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "LANKA_ADVISOR_API_KEY"
//! timeout_secs = 30
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lanka_advisor::AdvisorConfig;
use lanka_core::{DEFAULT_CURRENCY_CODE, DEFAULT_LOW_STOCK_THRESHOLD};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "LANKA_CONFIG";

const CONFIG_FILE_NAME: &str = "server.toml";

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Sections
// =============================================================================

/// `[server]`: where to listen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpSection {
    fn default() -> Self {
        HttpSection {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// `[store]`: shop-floor behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Stock at or below this raises a "running low" alert.
    pub low_stock_threshold: u32,

    /// ISO 4217 code printed on receipts.
    pub currency: String,

    /// Receipt paper width in characters.
    pub receipt_width: usize,

    /// Load the demo catalog on startup.
    pub seed: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        StoreSection {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency: DEFAULT_CURRENCY_CODE.to_string(),
            receipt_width: 40,
            seed: true,
        }
    }
}

// =============================================================================
// ServerConfig
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpSection,
    pub store: StoreSection,
    pub advisor: AdvisorConfig,
}

impl ServerConfig {
    /// Loads defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            // An explicit path must exist.
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ServerConfig::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        info!(
            bind = %config.server.bind,
            port = config.server.port,
            low_stock_threshold = config.store.low_stock_threshold,
            advisor_model = %config.advisor.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Platform config location: `<config dir>/lanka-pos/server.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("lk", "LankaPOS", "lanka-pos")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads a TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Read config file");
        Ok(config)
    }

    /// Parses TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies `LANKA_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("LANKA_BIND") {
            self.server.bind = bind;
        }
        if let Some(port) = lookup("LANKA_PORT") {
            self.server.port = parse_value("LANKA_PORT", &port)?;
        }
        if let Some(threshold) = lookup("LANKA_LOW_STOCK_THRESHOLD") {
            self.store.low_stock_threshold = parse_value("LANKA_LOW_STOCK_THRESHOLD", &threshold)?;
        }
        if let Some(currency) = lookup("LANKA_CURRENCY") {
            self.store.currency = currency.trim().to_uppercase();
        }
        if let Some(seed) = lookup("LANKA_SEED") {
            self.store.seed = parse_value("LANKA_SEED", &seed)?;
        }
        if let Some(endpoint) = lookup("LANKA_ADVISOR_ENDPOINT") {
            self.advisor.endpoint = endpoint;
        }
        if let Some(model) = lookup("LANKA_ADVISOR_MODEL") {
            self.advisor.model = model;
        }
        if let Some(timeout) = lookup("LANKA_ADVISOR_TIMEOUT_SECS") {
            self.advisor.timeout_secs = parse_value("LANKA_ADVISOR_TIMEOUT_SECS", &timeout)?;
        }
        Ok(())
    }

    /// Checks the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let currency = &self.store.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidValue {
                key: "store.currency".to_string(),
                value: currency.clone(),
            });
        }

        if !(24..=80).contains(&self.store.receipt_width) {
            return Err(ConfigError::Invalid(format!(
                "store.receipt_width must be between 24 and 80, got {}",
                self.store.receipt_width
            )));
        }

        self.socket_addr()?;

        self.advisor
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// The address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.bind, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            key: "server.bind".to_string(),
            value: addr,
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.low_stock_threshold, 10);
        assert_eq!(config.store.currency, "LKR");
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_partial_file() {
        let config = ServerConfig::from_toml(
            r#"
            [server]
            port = 9002

            [advisor]
            model = "llama3"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9002);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.advisor.model, "llama3");
        assert_eq!(config.advisor.timeout_secs, 30);
        assert_eq!(config.store, StoreSection::default());
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = [
            ("LANKA_PORT", "7000"),
            ("LANKA_LOW_STOCK_THRESHOLD", "3"),
            ("LANKA_CURRENCY", "usd"),
            ("LANKA_SEED", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::from_toml("[server]\nport = 9002\n").unwrap();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.store.low_stock_threshold, 3);
        assert_eq!(config.store.currency, "USD");
        assert!(!config.store.seed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_override_is_reported() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_overrides(|key| (key == "LANKA_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_validation() {
        let mut config = ServerConfig::default();
        config.store.currency = "Rupees".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.server.bind = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.advisor.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file(Path::new("/nonexistent/lanka/server.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }
}
