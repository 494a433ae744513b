//! # State Module
//!
//! Shared state handed to every handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Router::with_state(AppState)                                          │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┬────────────────┐      │
//! │          ▼                  ▼                  ▼                ▼       │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐ ┌─────────┐  │
//! │  │    Store     │  │  CartState   │  │  RestockAdvisor  │ │ Config  │  │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Arc<dyn         │ │ Arc<..> │  │
//! │  │  StoreData>> │  │    Cart>>    │  │  Suggester>      │ │         │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘ └─────────┘  │
//! │                                                                         │
//! │  LOCK ORDER: cart before store. The store never touches the cart.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartState;

use std::sync::Arc;

use lanka_advisor::{RestockAdvisor, RestockSuggester};
use lanka_core::receipt::ReceiptLayout;
use lanka_store::{Store, StoreConfig};

use crate::config::ServerConfig;

/// Everything a handler can reach.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub cart: CartState,
    pub advisor: RestockAdvisor,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Builds state from configuration and a suggester.
    pub fn new(config: ServerConfig, suggester: Arc<dyn RestockSuggester>) -> Self {
        let store = Store::new(
            StoreConfig::default()
                .low_stock_threshold(config.store.low_stock_threshold)
                .seed(config.store.seed),
        );
        Self::with_store(store, config, suggester)
    }

    /// Builds state around an existing store.
    pub fn with_store(store: Store, config: ServerConfig, suggester: Arc<dyn RestockSuggester>) -> Self {
        let advisor = RestockAdvisor::new(store.clone(), suggester)
            .with_history_window(config.advisor.history_window);

        AppState {
            store,
            cart: CartState::new(),
            advisor,
            config: Arc::new(config),
        }
    }

    /// Paper width and currency for text receipts.
    pub fn receipt_layout(&self) -> ReceiptLayout {
        ReceiptLayout {
            width: self.config.store.receipt_width,
            currency: self.config.store.currency.clone(),
        }
    }
}
