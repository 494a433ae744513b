//! # Store Handle
//!
//! Owns all mutable POS state behind a single mutex.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store (Clone handle)                            │
//! │                                                                         │
//! │  Server startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::default() ← threshold, seeding                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │         Arc<Mutex<StoreData>>             │                         │
//! │  │  items ─ sales ─ receipt_settings         │                         │
//! │  │  next_item_seq ─ next_sale_seq            │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       │ every handler clones the handle                                 │
//! │       ▼                                                                 │
//! │  store.items()    store.sales()    store.settings()                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Critical sections are short and never span an `.await`, so a std mutex
//! is used rather than an async one.

use std::sync::{Arc, Mutex, MutexGuard};

use lanka_core::{Item, ReceiptSettings, SaleTransaction, DEFAULT_LOW_STOCK_THRESHOLD};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::repository::item::ItemRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::settings::SettingsRepository;
use crate::seed;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use lanka_store::StoreConfig;
///
/// let config = StoreConfig::default().low_stock_threshold(5);
/// assert_eq!(config.low_stock_threshold, 5);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Stock level at or below which a sale raises a "running low" alert.
    /// Default: 10
    pub low_stock_threshold: u32,

    /// Whether to load the demo catalog and shop identity.
    /// Default: true
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed: true,
        }
    }
}

impl StoreConfig {
    /// Sets the low-stock threshold.
    pub fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Sets whether to load seed data.
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// An empty store with default settings (for testing).
    pub fn empty() -> Self {
        StoreConfig::default().seed(false)
    }
}

// =============================================================================
// Store Data
// =============================================================================

/// Everything the store holds. Only reachable through the lock.
#[derive(Debug)]
pub(crate) struct StoreData {
    pub(crate) items: Vec<Item>,
    /// Append-only, oldest first.
    pub(crate) sales: Vec<SaleTransaction>,
    pub(crate) receipt_settings: ReceiptSettings,
    pub(crate) low_stock_threshold: u32,
    next_item_seq: u64,
    next_sale_seq: u64,
}

impl StoreData {
    fn new(items: Vec<Item>, receipt_settings: ReceiptSettings, low_stock_threshold: u32) -> Self {
        // Continue numbering after the highest ITMnnn already present.
        let next_item_seq = items
            .iter()
            .filter_map(|item| item.id.strip_prefix("ITM")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        StoreData {
            items,
            sales: Vec::new(),
            receipt_settings,
            low_stock_threshold,
            next_item_seq,
            next_sale_seq: 1,
        }
    }

    /// Issues the next item id: ITM001, ITM002, ...
    pub(crate) fn next_item_id(&mut self) -> String {
        let id = format!("ITM{:03}", self.next_item_seq);
        self.next_item_seq += 1;
        id
    }

    /// Issues the next sale id: SALE0001, SALE0002, ...
    pub(crate) fn next_sale_id(&mut self) -> String {
        let id = format!("SALE{:04}", self.next_sale_seq);
        self.next_sale_seq += 1;
        id
    }

    pub(crate) fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing repository access.
///
/// Cloning is cheap; all clones share the same state.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
///     Ok(Json(state.store.items().list()?))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    data: Arc<Mutex<StoreData>>,
}

impl Store {
    /// Creates a store, seeding it unless the config says otherwise.
    pub fn new(config: StoreConfig) -> Self {
        let (items, settings) = if config.seed {
            (seed::seed_items(), seed::seed_receipt_settings())
        } else {
            (Vec::new(), ReceiptSettings::default())
        };

        info!(
            items = items.len(),
            low_stock_threshold = config.low_stock_threshold,
            seeded = config.seed,
            "Store initialized"
        );

        Self::with_data(items, settings, config.low_stock_threshold)
    }

    /// Creates a store holding exactly the given catalog and settings.
    pub fn with_data(items: Vec<Item>, receipt_settings: ReceiptSettings, low_stock_threshold: u32) -> Self {
        Store {
            data: Arc::new(Mutex::new(StoreData::new(
                items,
                receipt_settings,
                low_stock_threshold,
            ))),
        }
    }

    /// Returns the item repository.
    pub fn items(&self) -> ItemRepository<'_> {
        ItemRepository::new(self)
    }

    /// Returns the sale repository.
    pub fn sales(&self) -> SaleRepository<'_> {
        SaleRepository::new(self)
    }

    /// Returns the settings repository.
    pub fn settings(&self) -> SettingsRepository<'_> {
        SettingsRepository::new(self)
    }

    /// Acquires the store lock.
    pub(crate) fn lock(&self) -> StoreResult<MutexGuard<'_, StoreData>> {
        self.data.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanka_core::Money;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: "Test Item".to_string(),
            price: Money::from_cents(100),
            stock: 1,
            category: None,
        }
    }

    #[test]
    fn test_ids_continue_after_highest_existing() {
        let store = Store::with_data(
            vec![item("ITM002"), item("ITM009"), item("CUSTOM")],
            ReceiptSettings::default(),
            10,
        );
        let mut data = store.lock().unwrap();
        assert_eq!(data.next_item_id(), "ITM010");
        assert_eq!(data.next_item_id(), "ITM011");
        assert_eq!(data.next_sale_id(), "SALE0001");
        assert_eq!(data.next_sale_id(), "SALE0002");
    }

    #[test]
    fn test_empty_config() {
        let store = Store::new(StoreConfig::empty());
        assert!(store.items().list().unwrap().is_empty());
        assert_eq!(store.lock().unwrap().next_item_id(), "ITM001");
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(StoreConfig::default().low_stock_threshold(3));
        let other = store.clone();
        assert_eq!(other.settings().low_stock_threshold().unwrap(), 3);
        assert_eq!(
            store.items().count().unwrap(),
            other.items().count().unwrap()
        );
    }
}
