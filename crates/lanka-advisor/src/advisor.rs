//! # Restock Advisor
//!
//! Reads the sales log, hands the recent part of it to a
//! [`RestockSuggester`], and checks what comes back.

use std::sync::Arc;

use lanka_core::restock::format_sales_data;
use lanka_core::{SuggestRestockInput, SuggestRestockOutput, RESTOCK_HISTORY_WINDOW};
use lanka_store::Store;
use tracing::{debug, error, info};

use crate::error::{AdvisorError, AdvisorResult};
use crate::suggester::RestockSuggester;

/// Produces restock suggestions for the store.
///
/// ## Usage
/// ```rust,ignore
/// let advisor = RestockAdvisor::new(store.clone(), Arc::new(HttpSuggester::from_env(config)?));
/// let output = advisor.suggestions().await?;
/// ```
#[derive(Clone)]
pub struct RestockAdvisor {
    store: Store,
    suggester: Arc<dyn RestockSuggester>,
    history_window: usize,
}

impl std::fmt::Debug for RestockAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestockAdvisor")
            .field("suggester", &self.suggester.name())
            .field("history_window", &self.history_window)
            .finish()
    }
}

impl RestockAdvisor {
    /// Creates an advisor looking at the last 20 transactions.
    pub fn new(store: Store, suggester: Arc<dyn RestockSuggester>) -> Self {
        RestockAdvisor {
            store,
            suggester,
            history_window: RESTOCK_HISTORY_WINDOW,
        }
    }

    /// Sets how many recent transactions are considered.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    /// Suggests restock quantities from recent sales.
    ///
    /// ## Returns
    /// * `Ok(placeholder)` - No sales recorded yet; the suggester is not called
    /// * `Ok(output)` - The suggester's answer, guaranteed to be a JSON array
    /// * `Err(AdvisorError)` - Anything went wrong; show
    ///   [`AdvisorError::user_message`] to the user
    pub async fn suggestions(&self) -> AdvisorResult<SuggestRestockOutput> {
        // Owned copy; the store lock is already released here.
        let sales = self.store.sales().recent(self.history_window)?;

        if sales.is_empty() {
            info!("No sales recorded, returning placeholder suggestions");
            return Ok(SuggestRestockOutput::placeholder());
        }

        let recent_sales_data = format_sales_data(&sales, self.history_window)?;
        debug!(
            transactions = sales.len(),
            suggester = self.suggester.name(),
            "Requesting restock suggestions"
        );

        let output = match self
            .suggester
            .suggest(SuggestRestockInput { recent_sales_data })
            .await
        {
            Ok(output) => output,
            Err(err) => {
                error!(error = %err, suggester = self.suggester.name(), "Restock suggester failed");
                return Err(err);
            }
        };

        if !output.is_array() {
            error!(suggester = self.suggester.name(), "Restock suggestions are not a JSON array");
            return Err(AdvisorError::NotAnArray);
        }

        info!(transactions = sales.len(), "Restock suggestions generated");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lanka_core::restock::SalesDataPoint;
    use lanka_core::CartItem;
    use lanka_store::StoreConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Reply {
        Suggestions(&'static str),
        Fail,
    }

    struct ScriptedSuggester {
        reply: Reply,
        calls: AtomicUsize,
        last_input: Mutex<Option<SuggestRestockInput>>,
    }

    impl ScriptedSuggester {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(ScriptedSuggester {
                reply,
                calls: AtomicUsize::new(0),
                last_input: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RestockSuggester for ScriptedSuggester {
        async fn suggest(&self, input: SuggestRestockInput) -> AdvisorResult<SuggestRestockOutput> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_input.lock().unwrap() = Some(input);
            match self.reply {
                Reply::Suggestions(text) => Ok(SuggestRestockOutput {
                    restock_suggestions: text.to_string(),
                }),
                Reply::Fail => Err(AdvisorError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                }),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn sell(store: &Store, item_id: &str, quantity: u32) {
        let item = store.items().require(item_id).unwrap();
        let total = item.price.multiply_quantity(quantity);
        store
            .sales()
            .process_sale(&[CartItem::new(item, quantity)], total)
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_sales_returns_placeholder_without_calling() {
        let store = Store::new(StoreConfig::default());
        let suggester = ScriptedSuggester::new(Reply::Fail);
        let advisor = RestockAdvisor::new(store, suggester.clone());

        let output = advisor.suggestions().await.unwrap();

        assert_eq!(
            output.restock_suggestions,
            r#"[{"itemName":"No sales data available","suggestedRestockQuantity":"N/A"}]"#
        );
        assert_eq!(suggester.calls(), 0);
    }

    #[tokio::test]
    async fn test_passes_through_suggestions() {
        let store = Store::new(StoreConfig::default());
        sell(&store, "ITM004", 3);

        let reply = r#"[{"itemName":"White Sugar 1kg","suggestedRestockQuantity":50}]"#;
        let suggester = ScriptedSuggester::new(Reply::Suggestions(reply));
        let advisor = RestockAdvisor::new(store, suggester.clone());

        let output = advisor.suggestions().await.unwrap();
        assert_eq!(output.restock_suggestions, reply);
        assert_eq!(suggester.calls(), 1);

        let input = suggester.last_input.lock().unwrap().clone().unwrap();
        let points: Vec<SalesDataPoint> = serde_json::from_str(&input.recent_sales_data).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].item_name, "White Sugar 1kg");
        assert_eq!(points[0].quantity_sold, 3);
    }

    #[tokio::test]
    async fn test_only_recent_window_is_sent() {
        let store = Store::new(StoreConfig::default());
        for quantity in 1..=25 {
            sell(&store, "ITM006", quantity);
        }

        let suggester = ScriptedSuggester::new(Reply::Suggestions("[]"));
        let advisor = RestockAdvisor::new(store, suggester.clone());
        advisor.suggestions().await.unwrap();

        let input = suggester.last_input.lock().unwrap().clone().unwrap();
        let points: Vec<SalesDataPoint> = serde_json::from_str(&input.recent_sales_data).unwrap();
        assert_eq!(points.len(), 20);
        assert_eq!(points[0].quantity_sold, 6);
        assert_eq!(points[19].quantity_sold, 25);
    }

    #[tokio::test]
    async fn test_failure_is_reported_once() {
        let store = Store::new(StoreConfig::default());
        sell(&store, "ITM001", 1);

        let suggester = ScriptedSuggester::new(Reply::Fail);
        let advisor = RestockAdvisor::new(store, suggester.clone());

        let err = advisor.suggestions().await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to generate restocking suggestions.");
        assert_eq!(suggester.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_array_output_is_rejected() {
        let store = Store::new(StoreConfig::default());
        sell(&store, "ITM007", 2);

        let suggester = ScriptedSuggester::new(Reply::Suggestions(r#"{"itemName":"Coca-Cola 1.5L"}"#));
        let advisor = RestockAdvisor::new(store, suggester);

        assert!(matches!(
            advisor.suggestions().await,
            Err(AdvisorError::NotAnArray)
        ));
    }

    #[tokio::test]
    async fn test_custom_window() {
        let store = Store::new(StoreConfig::default());
        for _ in 0..5 {
            sell(&store, "ITM002", 1);
        }

        let suggester = ScriptedSuggester::new(Reply::Suggestions("[]"));
        let advisor = RestockAdvisor::new(store, suggester.clone()).with_history_window(2);
        advisor.suggestions().await.unwrap();

        let input = suggester.last_input.lock().unwrap().clone().unwrap();
        let points: Vec<SalesDataPoint> = serde_json::from_str(&input.recent_sales_data).unwrap();
        assert_eq!(points.len(), 2);
    }
}
