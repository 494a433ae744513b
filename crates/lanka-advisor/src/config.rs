//! # Advisor Configuration
//!
//! Lives under `[advisor]` in the server's `server.toml`:
//!
//! ```toml
//! [advisor]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "LANKA_ADVISOR_API_KEY"   # name of the variable, not the key
//! timeout_secs = 30
//! ```
//!
//! The key itself is only ever read from the environment.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};
use lanka_core::RESTOCK_HISTORY_WINDOW;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Settings for the language model round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Chat-completions URL of an OpenAI-compatible endpoint.
    pub endpoint: String,

    /// Model name sent with each request.
    pub model: String,

    /// Environment variable holding the bearer token.
    pub api_key_env: String,

    /// Whole-request timeout.
    /// Default: 30 seconds
    pub timeout_secs: u64,

    /// Sampling temperature.
    /// Default: 0.2
    pub temperature: f32,

    /// How many recent transactions are sent.
    /// Default: 20
    pub history_window: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "LANKA_ADVISOR_API_KEY".to_string(),
            timeout_secs: 30,
            temperature: 0.2,
            history_window: RESTOCK_HISTORY_WINDOW,
        }
    }
}

impl AdvisorConfig {
    /// Checks the settings are usable.
    pub fn validate(&self) -> AdvisorResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(AdvisorError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.model.trim().is_empty() {
            return Err(AdvisorError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AdvisorError::InvalidConfig(
                "api_key_env must name an environment variable".to_string(),
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AdvisorError::InvalidConfig(format!(
                "timeout_secs must be between 1 and {}",
                MAX_TIMEOUT_SECS
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AdvisorError::InvalidConfig(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.history_window == 0 {
            return Err(AdvisorError::InvalidConfig(
                "history_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> AdvisorResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(AdvisorError::MissingApiKey(self.api_key_env.clone())),
        }
    }
}
