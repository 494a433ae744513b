//! # Sale Math
//!
//! The pure half of sale processing: turning cart lines into frozen sale
//! lines and deciding which stock levels deserve an alert. The stateful half
//! (id issue, stock decrement, log append) lives in `lanka-store`.
//!
//! ## Alert Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stock after sale          alert                                        │
//! │  ────────────────          ─────                                        │
//! │  0                         "<name> is out of stock!"                    │
//! │  1 ..= threshold           "<name> is running low (Stock: <n>)!"       │
//! │  > threshold               none                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CartItem, SaleLineItem};

/// Builds one frozen sale line per cart line.
///
/// ## Errors
/// * `CoreError::AmountOverflow` - a line's price × quantity overflows
pub fn build_line_items(cart_items: &[CartItem]) -> CoreResult<Vec<SaleLineItem>> {
    cart_items
        .iter()
        .map(|line| {
            Ok(SaleLineItem {
                item_id: line.item.id.clone(),
                name: line.item.name.clone(),
                quantity: line.quantity_in_cart,
                price_per_unit: line.item.price,
                subtotal: line.line_total()?,
            })
        })
        .collect()
}

/// Sum of price × quantity over the cart, the figure a caller should send
/// as `totalAmount`.
pub fn cart_total(cart_items: &[CartItem]) -> CoreResult<Money> {
    cart_items
        .iter()
        .try_fold(Money::zero(), |total, line| total.checked_add(line.line_total()?))
}

/// A post-sale stock warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StockAlert {
    RunningLow { name: String, stock: u32 },
    OutOfStock { name: String },
}

impl StockAlert {
    /// Classifies an item's stock after a sale.
    ///
    /// Returns `None` when the stock is above `threshold`.
    pub fn classify(name: &str, stock: u32, threshold: u32) -> Option<StockAlert> {
        if stock == 0 {
            Some(StockAlert::OutOfStock {
                name: name.to_string(),
            })
        } else if stock <= threshold {
            Some(StockAlert::RunningLow {
                name: name.to_string(),
                stock,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for StockAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockAlert::RunningLow { name, stock } => {
                write!(f, "{} is running low (Stock: {})!", name, stock)
            }
            StockAlert::OutOfStock { name } => write!(f, "{} is out of stock!", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Item;

    fn line(id: &str, price_cents: i64, qty: u32) -> CartItem {
        CartItem::new(
            Item {
                id: id.to_string(),
                name: format!("Item {}", id),
                price: Money::from_cents(price_cents),
                stock: 50,
                category: None,
            },
            qty,
        )
    }

    #[test]
    fn test_line_items_carry_subtotals() {
        let cart = vec![line("ITM001", 100, 3), line("ITM002", 45000, 2)];
        let lines = build_line_items(&cart).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].subtotal.cents(), 300);
        assert_eq!(lines[1].price_per_unit.cents(), 45000);
        assert_eq!(lines[1].subtotal.cents(), 90000);

        let line_sum: Money = lines.iter().map(|l| l.subtotal).sum();
        assert_eq!(line_sum, cart_total(&cart).unwrap());
    }

    #[test]
    fn test_oversized_price_is_an_error() {
        let cart = vec![line("ITM001", 100, 1), line("ITM002", 4_611_686_018_427_387_904, 2)];
        assert!(matches!(build_line_items(&cart), Err(CoreError::AmountOverflow)));
        assert!(matches!(cart_total(&cart), Err(CoreError::AmountOverflow)));

        let near_max = vec![line("ITM001", i64::MAX, 1), line("ITM002", 1, 1)];
        assert!(build_line_items(&near_max).is_ok());
        assert!(matches!(cart_total(&near_max), Err(CoreError::AmountOverflow)));
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StockAlert::classify("X", 11, 10), None);
        assert_eq!(
            StockAlert::classify("X", 10, 10),
            Some(StockAlert::RunningLow {
                name: "X".to_string(),
                stock: 10
            })
        );
        assert_eq!(
            StockAlert::classify("X", 1, 10),
            Some(StockAlert::RunningLow {
                name: "X".to_string(),
                stock: 1
            })
        );
        assert_eq!(
            StockAlert::classify("X", 0, 10),
            Some(StockAlert::OutOfStock {
                name: "X".to_string()
            })
        );
    }

    #[test]
    fn test_zero_threshold_only_reports_out_of_stock() {
        assert_eq!(StockAlert::classify("X", 1, 0), None);
        assert!(matches!(
            StockAlert::classify("X", 0, 0),
            Some(StockAlert::OutOfStock { .. })
        ));
    }

    #[test]
    fn test_alert_messages() {
        let low = StockAlert::classify("X", 2, 10).unwrap();
        assert_eq!(low.to_string(), "X is running low (Stock: 2)!");

        let out = StockAlert::classify("X", 0, 10).unwrap();
        assert_eq!(out.to_string(), "X is out of stock!");
    }
}
