//! # Sale Repository
//!
//! Sale processing and the sales log.
//!
//! ## Processing a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   process_sale (one critical section)                   │
//! │                                                                         │
//! │  1. BUILD LINES                                                        │
//! │     └── one SaleLineItem per cart entry, subtotal = price × qty        │
//! │                                                                         │
//! │  2. RECORD                                                             │
//! │     └── fresh SALE id, current time, copy of receipt settings          │
//! │     └── append to log                                                  │
//! │                                                                         │
//! │  3. ADJUST STOCK                                                       │
//! │     └── stock = max(0, stock - qty) for each catalog item              │
//! │                                                                         │
//! │  4. ALERT (once per item, after every line is applied)                 │
//! │     └── stock == 0          → "X is out of stock!"                     │
//! │     └── stock <= threshold  → "X is running low (Stock: n)!"           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines whose item id is not in the catalog are still recorded, but no
//! stock is touched and no alert is raised for them.

use chrono::Utc;
use lanka_core::sale::{build_line_items, cart_total};
use lanka_core::{CartItem, Money, SaleTransaction, StockAlert};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Everything a completed sale produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    /// The transaction as appended to the log.
    pub sale: SaleTransaction,
    /// At most one alert per item, in the order items first appear in the cart.
    pub low_stock_alerts: Vec<StockAlert>,
    /// Sum of line subtotals; may differ from `sale.total_amount`.
    pub computed_total: Money,
}

impl SaleOutcome {
    /// Alert texts as shown to the cashier.
    pub fn alert_messages(&self) -> Vec<String> {
        self.low_stock_alerts.iter().map(ToString::to_string).collect()
    }

    /// Whether the caller-supplied total disagreed with the lines.
    pub fn total_mismatch(&self) -> bool {
        self.computed_total != self.sale.total_amount
    }
}

/// Repository for sale operations.
#[derive(Debug, Clone, Copy)]
pub struct SaleRepository<'a> {
    store: &'a Store,
}

impl<'a> SaleRepository<'a> {
    /// Creates a new SaleRepository.
    pub fn new(store: &'a Store) -> Self {
        SaleRepository { store }
    }

    /// Records a sale and decrements stock.
    ///
    /// The log append and every stock change happen under the same lock,
    /// so concurrent sales are applied one after the other.
    ///
    /// `total_amount` is stored as given. A mismatch with the line
    /// subtotals is logged and reported on the outcome, never rejected.
    ///
    /// ## Errors
    /// * `StoreError::EmptySale` - `cart_items` is empty
    /// * `StoreError::Core(AmountOverflow)` - a subtotal or the line sum
    ///   overflows; nothing is recorded
    pub fn process_sale(&self, cart_items: &[CartItem], total_amount: Money) -> StoreResult<SaleOutcome> {
        if cart_items.is_empty() {
            return Err(StoreError::EmptySale);
        }

        let items = build_line_items(cart_items)?;
        let computed_total = cart_total(cart_items)?;

        let mut data = self.store.lock()?;
        let threshold = data.low_stock_threshold;

        let sale = SaleTransaction {
            id: data.next_sale_id(),
            items,
            total_amount,
            timestamp: Utc::now(),
            receipt_settings_snapshot: data.receipt_settings.clone(),
        };

        if computed_total != total_amount {
            warn!(
                sale_id = %sale.id,
                supplied = %total_amount,
                computed = %computed_total,
                "Sale total does not match line subtotals"
            );
        }

        // The same item may appear on several lines.
        let mut touched: Vec<&str> = Vec::new();
        for line in &sale.items {
            let Some(item) = data.item_mut(&line.item_id) else {
                debug!(item_id = %line.item_id, "Sold item not in catalog, stock untouched");
                continue;
            };

            item.stock = item.stock.saturating_sub(line.quantity);
            if !touched.contains(&line.item_id.as_str()) {
                touched.push(&line.item_id);
            }
        }

        let low_stock_alerts: Vec<StockAlert> = touched
            .iter()
            .filter_map(|id| data.items.iter().find(|item| item.id == *id))
            .filter_map(|item| StockAlert::classify(&item.name, item.stock, threshold))
            .collect();

        data.sales.push(sale.clone());
        drop(data);

        info!(
            sale_id = %sale.id,
            lines = sale.items.len(),
            total = %sale.total_amount,
            alerts = low_stock_alerts.len(),
            "Sale processed"
        );

        Ok(SaleOutcome {
            sale,
            low_stock_alerts,
            computed_total,
        })
    }

    /// Every transaction, oldest first.
    pub fn list(&self) -> StoreResult<Vec<SaleTransaction>> {
        Ok(self.store.lock()?.sales.clone())
    }

    /// The last `limit` transactions, oldest first.
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<SaleTransaction>> {
        let data = self.store.lock()?;
        let start = data.sales.len().saturating_sub(limit);
        Ok(data.sales[start..].to_vec())
    }

    /// Gets a sale by id.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<SaleTransaction>> {
        let data = self.store.lock()?;
        Ok(data.sales.iter().find(|sale| sale.id == id).cloned())
    }

    /// Gets a sale by id, failing with `NotFound` if absent.
    pub fn require(&self, id: &str) -> StoreResult<SaleTransaction> {
        self.get_by_id(id)?
            .ok_or_else(|| StoreError::not_found("Sale", id))
    }

    /// Number of transactions in the log.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.store.lock()?.sales.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreConfig;
    use lanka_core::{Item, ReceiptSettings, ReceiptSettingsUpdate};
    use std::thread;

    fn store_with(stock: u32) -> Store {
        let item = Item {
            id: "ITM001".to_string(),
            name: "X".to_string(),
            price: Money::from_cents(100),
            stock,
            category: None,
        };
        Store::with_data(vec![item], ReceiptSettings::default(), 10)
    }

    fn cart_of(store: &Store, quantity: u32) -> Vec<CartItem> {
        let item = store.items().require("ITM001").unwrap();
        vec![CartItem::new(item, quantity)]
    }

    #[test]
    fn test_sale_decrements_stock_and_warns_low() {
        let store = store_with(5);
        let outcome = store
            .sales()
            .process_sale(&cart_of(&store, 3), Money::from_cents(300))
            .unwrap();

        assert_eq!(outcome.sale.id, "SALE0001");
        assert_eq!(outcome.sale.total_amount.cents(), 300);
        assert_eq!(outcome.sale.items[0].subtotal.cents(), 300);
        assert_eq!(store.items().require("ITM001").unwrap().stock, 2);
        assert_eq!(outcome.alert_messages(), vec!["X is running low (Stock: 2)!"]);
        assert!(!outcome.total_mismatch());
    }

    #[test]
    fn test_oversell_clamps_to_zero() {
        let store = store_with(2);
        let outcome = store
            .sales()
            .process_sale(&cart_of(&store, 5), Money::from_cents(500))
            .unwrap();

        assert_eq!(store.items().require("ITM001").unwrap().stock, 0);
        assert_eq!(outcome.alert_messages(), vec!["X is out of stock!"]);
    }

    #[test]
    fn test_repeated_item_lines_raise_one_alert() {
        let store = store_with(5);
        let mut cart = cart_of(&store, 3);
        cart.extend(cart_of(&store, 3));

        let outcome = store
            .sales()
            .process_sale(&cart, Money::from_cents(600))
            .unwrap();

        assert_eq!(outcome.sale.items.len(), 2);
        assert_eq!(store.items().require("ITM001").unwrap().stock, 0);
        assert_eq!(outcome.alert_messages(), vec!["X is out of stock!"]);
    }

    #[test]
    fn test_alerts_follow_first_appearance() {
        let items = vec![
            Item {
                id: "ITM001".to_string(),
                name: "X".to_string(),
                price: Money::from_cents(100),
                stock: 5,
                category: None,
            },
            Item {
                id: "ITM002".to_string(),
                name: "Y".to_string(),
                price: Money::from_cents(100),
                stock: 3,
                category: None,
            },
        ];
        let store = Store::with_data(items, ReceiptSettings::default(), 10);
        let x = store.items().require("ITM001").unwrap();
        let y = store.items().require("ITM002").unwrap();
        let cart = vec![
            CartItem::new(y.clone(), 1),
            CartItem::new(x.clone(), 1),
            CartItem::new(y, 2),
            CartItem::new(x, 1),
        ];

        let outcome = store
            .sales()
            .process_sale(&cart, Money::from_cents(500))
            .unwrap();

        assert_eq!(
            outcome.alert_messages(),
            vec!["Y is out of stock!", "X is running low (Stock: 3)!"]
        );
    }

    #[test]
    fn test_overflowing_line_is_rejected_without_side_effects() {
        let store = store_with(5);
        let mut item = store.items().require("ITM001").unwrap();
        item.price = Money::from_cents(4_611_686_018_427_387_904);

        let result = store
            .sales()
            .process_sale(&[CartItem::new(item, 2)], Money::from_cents(100));

        assert!(matches!(
            result,
            Err(StoreError::Core(lanka_core::CoreError::AmountOverflow))
        ));
        assert_eq!(store.sales().count().unwrap(), 0);
        assert_eq!(store.items().require("ITM001").unwrap().stock, 5);
    }

    #[test]
    fn test_threshold_boundary() {
        let store = store_with(21);

        // 21 - 10 = 11: above threshold, no alert
        let first = store
            .sales()
            .process_sale(&cart_of(&store, 10), Money::from_cents(1000))
            .unwrap();
        assert!(first.low_stock_alerts.is_empty());

        // 11 - 1 = 10: exactly at threshold
        let second = store
            .sales()
            .process_sale(&cart_of(&store, 1), Money::from_cents(100))
            .unwrap();
        assert_eq!(second.alert_messages(), vec!["X is running low (Stock: 10)!"]);
    }

    #[test]
    fn test_supplied_total_is_kept() {
        let store = store_with(50);
        let outcome = store
            .sales()
            .process_sale(&cart_of(&store, 2), Money::from_cents(150))
            .unwrap();

        assert_eq!(outcome.sale.total_amount.cents(), 150);
        assert_eq!(outcome.computed_total.cents(), 200);
        assert!(outcome.total_mismatch());
    }

    #[test]
    fn test_unknown_item_recorded_without_stock_change() {
        let store = store_with(50);
        let ghost = Item {
            id: "ITM404".to_string(),
            name: "Ghost".to_string(),
            price: Money::from_cents(100),
            stock: 1,
            category: None,
        };

        let outcome = store
            .sales()
            .process_sale(&[CartItem::new(ghost, 3)], Money::from_cents(300))
            .unwrap();

        assert_eq!(outcome.sale.items[0].item_id, "ITM404");
        assert!(outcome.low_stock_alerts.is_empty());
        assert_eq!(store.items().require("ITM001").unwrap().stock, 50);
        assert_eq!(store.sales().count().unwrap(), 1);
    }

    #[test]
    fn test_empty_sale_rejected() {
        let store = store_with(5);
        assert!(matches!(
            store.sales().process_sale(&[], Money::zero()),
            Err(StoreError::EmptySale)
        ));
        assert_eq!(store.sales().count().unwrap(), 0);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_edits() {
        let store = Store::new(StoreConfig::default());
        let rice = store.items().require("ITM001").unwrap();
        let outcome = store
            .sales()
            .process_sale(&[CartItem::new(rice, 1)], Money::from_major_minor(250, 0))
            .unwrap();

        store
            .settings()
            .update(ReceiptSettingsUpdate {
                shop_name: Some("Renamed".to_string()),
                ..Default::default()
            })
            .unwrap();

        let logged = store.sales().require(&outcome.sale.id).unwrap();
        assert_eq!(
            logged.receipt_settings_snapshot.shop_name.as_deref(),
            Some("LankaPOS Grocery")
        );
    }

    #[test]
    fn test_log_order_and_recent() {
        let store = store_with(100);
        for _ in 0..5 {
            store
                .sales()
                .process_sale(&cart_of(&store, 1), Money::from_cents(100))
                .unwrap();
        }

        let ids: Vec<_> = store.sales().recent(2).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["SALE0004", "SALE0005"]);
        assert_eq!(store.sales().list().unwrap()[0].id, "SALE0001");
        assert!(store.sales().get_by_id("SALE0099").unwrap().is_none());
    }

    #[test]
    fn test_concurrent_sales_do_not_lose_updates() {
        let store = store_with(1000);
        let cart = cart_of(&store, 1);

        thread::scope(|scope| {
            for _ in 0..8 {
                let store = store.clone();
                let cart = cart.clone();
                scope.spawn(move || {
                    for _ in 0..25 {
                        store
                            .sales()
                            .process_sale(&cart, Money::from_cents(100))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(store.items().require("ITM001").unwrap().stock, 800);
        assert_eq!(store.sales().count().unwrap(), 200);

        let mut ids: Vec<_> = store.sales().list().unwrap().into_iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }
}
