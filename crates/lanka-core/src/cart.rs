//! # Register Cart
//!
//! The cart a cashier builds before completing a sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier Action           Cart Method            Effect                 │
//! │  ──────────────           ───────────            ──────                 │
//! │                                                                         │
//! │  Click item ─────────────► add_item(item, 1) ──► qty + 1 (≤ stock)     │
//! │                                                                         │
//! │  Click minus ────────────► decrement(id) ──────► qty - 1, drop at 0    │
//! │                                                                         │
//! │  Click trash ────────────► remove_item(id) ────► line removed          │
//! │                                                                         │
//! │  Sale completed ─────────► clear() ────────────► empty                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by item id (adding the same item raises its quantity)
//! - Every line has quantity >= 1
//! - A line's quantity never exceeds the item's stock as seen when it was added

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::sale::cart_total;
use crate::types::{CartItem, Item};
use crate::MAX_CART_ITEMS;

/// The register cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of `item`, capped by the item's stock.
    ///
    /// ## Behavior
    /// - Out-of-stock items are rejected outright
    /// - If the item is already in the cart its quantity grows and the line's
    ///   item snapshot is refreshed (so the stock cap is current)
    /// - Going past available stock is rejected, the cart is left unchanged
    pub fn add_item(&mut self, item: &Item, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if item.is_out_of_stock() {
            return Err(CoreError::OutOfStock {
                name: item.name.clone(),
            });
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.item.id == item.id) {
            let new_qty = line.quantity_in_cart.saturating_add(quantity);
            if new_qty > item.stock {
                return Err(CoreError::StockLimitReached {
                    name: item.name.clone(),
                    available: item.stock,
                });
            }
            line.item = item.clone();
            line.quantity_in_cart = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        if quantity > item.stock {
            return Err(CoreError::StockLimitReached {
                name: item.name.clone(),
                available: item.stock,
            });
        }

        self.items.push(CartItem::new(item.clone(), quantity));
        Ok(())
    }

    /// Removes one unit of an item; the line disappears when it reaches zero.
    pub fn decrement(&mut self, item_id: &str) -> CoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|l| l.item.id == item_id)
            .ok_or_else(|| CoreError::ItemNotInCart(item_id.to_string()))?;

        if self.items[index].quantity_in_cart > 1 {
            self.items[index].quantity_in_cart -= 1;
        } else {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Removes an item's line regardless of quantity.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|l| l.item.id != item_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|l| l.quantity_in_cart as u64).sum()
    }

    /// Sum of price × quantity over every line.
    pub fn total(&self) -> CoreResult<Money> {
        cart_total(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_amount: Money,
}

impl TryFrom<&Cart> for CartTotals {
    type Error = CoreError;

    fn try_from(cart: &Cart) -> CoreResult<Self> {
        Ok(CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_amount: cart.total()?,
        })
    }
}
