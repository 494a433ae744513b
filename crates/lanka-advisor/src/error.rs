//! # Advisor Error Types
//!
//! Every variant carries detail for the logs. Callers show users only
//! [`RESTOCK_FAILURE_MESSAGE`].

use lanka_core::CoreError;
use lanka_store::StoreError;
use thiserror::Error;

/// The only failure text a user ever sees from the advisor.
pub const RESTOCK_FAILURE_MESSAGE: &str = "Failed to generate restocking suggestions.";

/// Result type alias for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Restock advisor failures.
#[derive(Debug, Error)]
pub enum AdvisorError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid advisor configuration.
    #[error("Invalid advisor configuration: {0}")]
    InvalidConfig(String),

    /// No API key in the configured environment variable.
    #[error("Advisor API key not set (expected in ${0})")]
    MissingApiKey(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be sent or the body could not be read.
    #[error("Advisor request failed: {0}")]
    RequestFailed(String),

    /// The model endpoint did not answer in time.
    #[error("Advisor request timed out after {0} seconds")]
    Timeout(u64),

    /// The model endpoint answered with a non-success status.
    #[error("Advisor endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The endpoint's reply did not have the expected shape.
    #[error("Invalid advisor response: {0}")]
    InvalidResponse(String),

    /// The suggestions were not a JSON array.
    #[error("Restock suggestions are not a JSON array")]
    NotAnArray,

    // =========================================================================
    // Local Errors
    // =========================================================================
    /// Reading the sales log failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Formatting the sales data failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AdvisorError {
    /// The message shown to users, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        RESTOCK_FAILURE_MESSAGE
    }
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_detail() {
        let err = AdvisorError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert_eq!(err.user_message(), "Failed to generate restocking suggestions.");
    }
}
