//! # Domain Types
//!
//! Core domain types used throughout LankaPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      Item       │   │ SaleTransaction │   │  ReceiptSettings    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id  (ITM001)   │   │  id (SALE0001)  │   │  shop_name          │   │
//! │  │  name           │   │  items[]        │   │  shop_address       │   │
//! │  │  price (Money)  │   │  total_amount   │   │  shop_contact       │   │
//! │  │  stock (u32)    │   │  timestamp      │   │  item_id, ... flags │   │
//! │  │  category?      │   │  settings snap  │   │                     │   │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────────┘   │
//! │           │                     │                                       │
//! │  ┌────────▼────────┐   ┌────────▼────────┐                             │
//! │  │    CartItem     │   │  SaleLineItem   │                             │
//! │  │  Item + qty     │──►│  frozen copy    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `SaleLineItem` freezes the item name and unit price at sale time, and
//! every `SaleTransaction` carries the `ReceiptSettings` that were active when
//! it was created, so historical receipts render the same way forever.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// User Role
// =============================================================================

/// Who is operating the register.
///
/// Cashiers run sales; admins additionally manage items, receipt settings
/// and restock suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Cashier,
}

impl UserRole {
    /// Returns true if this role may use admin-only operations.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Cashier => write!(f, "cashier"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "cashier" => Ok(UserRole::Cashier),
            other => Err(format!("Unknown role: '{}'. Valid roles: admin, cashier", other)),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchasable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Business identifier (`ITM001`). Immutable once assigned.
    pub id: String,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand. Only the sale processor lowers it.
    pub stock: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl Item {
    /// Case-insensitive match against name, category and id.
    ///
    /// An empty (or whitespace) query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
            || self.id.to_lowercase().contains(&needle)
    }

    /// Returns true if there is nothing left to sell.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

/// Data for a new catalog item; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub price: Money,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl NewItem {
    /// Attaches an id, producing the catalog entry.
    pub fn with_id(self, id: impl Into<String>) -> Item {
        Item {
            id: id.into(),
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: self.category,
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item plus the quantity the customer is buying.
///
/// Serializes flat (`{id, name, price, stock, category, quantityInCart}`),
/// so a front end can send back exactly what it listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub item: Item,

    pub quantity_in_cart: u32,
}

impl CartItem {
    /// Creates a cart line for `quantity` units of `item`.
    pub fn new(item: Item, quantity: u32) -> Self {
        CartItem {
            item,
            quantity_in_cart: quantity,
        }
    }

    /// Unit price × quantity.
    ///
    /// Prices can arrive straight from a request body, so the product is
    /// checked rather than allowed to wrap.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.item.price.checked_multiply_quantity(self.quantity_in_cart)
    }
}

// =============================================================================
// Sale Transaction
// =============================================================================

/// A line on a completed sale. Frozen at sale time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineItem {
    pub item_id: String,
    /// Item name at time of sale (frozen).
    pub name: String,
    pub quantity: u32,
    /// Unit price at time of sale (frozen).
    pub price_per_unit: Money,
    /// price_per_unit × quantity.
    pub subtotal: Money,
}

/// A completed sale. Appended to the sales log once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleTransaction {
    pub id: String,
    pub items: Vec<SaleLineItem>,
    pub total_amount: Money,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    /// Receipt settings in force when the sale was made.
    pub receipt_settings_snapshot: ReceiptSettings,
}

// =============================================================================
// Receipt Settings
// =============================================================================

/// A field that can be shown or hidden on a printed receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ReceiptField {
    ShopName,
    ShopAddress,
    ShopContact,
    ItemId,
    ItemName,
    ItemPrice,
    ItemQuantity,
    ItemSubtotal,
    ItemCategory,
    Discount,
    GrandTotal,
    Timestamp,
}

/// What a printed receipt shows.
///
/// Shop identity fields are printed when present and non-empty; every
/// other field has its own visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptSettings {
    #[ts(optional)]
    pub shop_name: Option<String>,
    #[ts(optional)]
    pub shop_address: Option<String>,
    #[ts(optional)]
    pub shop_contact: Option<String>,
    pub item_id: bool,
    pub item_name: bool,
    pub item_price: bool,
    pub item_quantity: bool,
    pub item_subtotal: bool,
    pub item_category: bool,
    pub discount: bool,
    pub grand_total: bool,
    pub timestamp: bool,
}

impl Default for ReceiptSettings {
    /// Every line-level field visible, no shop identity, no category or
    /// discount lines.
    fn default() -> Self {
        ReceiptSettings {
            shop_name: None,
            shop_address: None,
            shop_contact: None,
            item_id: true,
            item_name: true,
            item_price: true,
            item_quantity: true,
            item_subtotal: true,
            item_category: false,
            discount: false,
            grand_total: true,
            timestamp: true,
        }
    }
}

impl ReceiptSettings {
    /// Returns true if `field` should be printed.
    pub fn is_visible(&self, field: ReceiptField) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        match field {
            ReceiptField::ShopName => present(&self.shop_name),
            ReceiptField::ShopAddress => present(&self.shop_address),
            ReceiptField::ShopContact => present(&self.shop_contact),
            ReceiptField::ItemId => self.item_id,
            ReceiptField::ItemName => self.item_name,
            ReceiptField::ItemPrice => self.item_price,
            ReceiptField::ItemQuantity => self.item_quantity,
            ReceiptField::ItemSubtotal => self.item_subtotal,
            ReceiptField::ItemCategory => self.item_category,
            ReceiptField::Discount => self.discount,
            ReceiptField::GrandTotal => self.grand_total,
            ReceiptField::Timestamp => self.timestamp,
        }
    }
}

/// A partial update to [`ReceiptSettings`].
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSettingsUpdate {
    #[ts(optional)]
    pub shop_name: Option<String>,
    #[ts(optional)]
    pub shop_address: Option<String>,
    #[ts(optional)]
    pub shop_contact: Option<String>,
    #[ts(optional)]
    pub item_id: Option<bool>,
    #[ts(optional)]
    pub item_name: Option<bool>,
    #[ts(optional)]
    pub item_price: Option<bool>,
    #[ts(optional)]
    pub item_quantity: Option<bool>,
    #[ts(optional)]
    pub item_subtotal: Option<bool>,
    #[ts(optional)]
    pub item_category: Option<bool>,
    #[ts(optional)]
    pub discount: Option<bool>,
    #[ts(optional)]
    pub grand_total: Option<bool>,
    #[ts(optional)]
    pub timestamp: Option<bool>,
}

impl ReceiptSettingsUpdate {
    /// Shallow-merges the provided fields over `settings`.
    pub fn apply_to(self, settings: &mut ReceiptSettings) {
        if let Some(v) = self.shop_name {
            settings.shop_name = Some(v);
        }
        if let Some(v) = self.shop_address {
            settings.shop_address = Some(v);
        }
        if let Some(v) = self.shop_contact {
            settings.shop_contact = Some(v);
        }

        let flags = [
            (self.item_id, &mut settings.item_id),
            (self.item_name, &mut settings.item_name),
            (self.item_price, &mut settings.item_price),
            (self.item_quantity, &mut settings.item_quantity),
            (self.item_subtotal, &mut settings.item_subtotal),
            (self.item_category, &mut settings.item_category),
            (self.discount, &mut settings.discount),
            (self.grand_total, &mut settings.grand_total),
            (self.timestamp, &mut settings.timestamp),
        ];
        for (update, slot) in flags {
            if let Some(v) = update {
                *slot = v;
            }
        }
    }

    /// Returns true if the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == ReceiptSettingsUpdate::default()
    }
}
