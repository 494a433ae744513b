//! # Restock Suggester
//!
//! The seam between the advisor and whatever produces suggestions.
//!
//! ```text
//! SuggestRestockInput { recentSalesData: "[...]" }
//!          │
//!          ▼
//!   RestockSuggester::suggest
//!          │
//!          ▼
//! SuggestRestockOutput { restockSuggestions: "[...]" }
//! ```

use async_trait::async_trait;
use lanka_core::{SuggestRestockInput, SuggestRestockOutput};

use crate::error::{AdvisorError, AdvisorResult};

/// Produces restock suggestions from serialized sales data.
///
/// Implementations make one attempt per call. The output's
/// `restock_suggestions` should be a JSON array; the advisor rejects
/// anything else.
#[async_trait]
pub trait RestockSuggester: Send + Sync {
    /// Suggests restock quantities for the items in `input`.
    async fn suggest(&self, input: SuggestRestockInput) -> AdvisorResult<SuggestRestockOutput>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Stands in when no model is configured. Every call fails.
#[derive(Debug, Clone)]
pub struct UnavailableSuggester {
    reason: String,
}

impl UnavailableSuggester {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableSuggester {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RestockSuggester for UnavailableSuggester {
    async fn suggest(&self, _input: SuggestRestockInput) -> AdvisorResult<SuggestRestockOutput> {
        Err(AdvisorError::InvalidConfig(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
