//! # lanka-core: Pure Business Logic for LankaPOS
//!
//! This crate is the **heart** of LankaPOS. It contains the sale, cart,
//! receipt and restock-data logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LankaPOS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front End                                │   │
//! │  │    Sales screen ──► Items screen ──► Settings screen            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    pos-server (axum)                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lanka-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐   │   │
//! │  │   │  types  │ │ money  │ │  cart  │ │  sale   │ │ receipt  │   │   │
//! │  │   │  Item   │ │ Money  │ │  Cart  │ │ alerts  │ │ render   │   │   │
//! │  │   └─────────┘ └────────┘ └────────┘ └─────────┘ └──────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              lanka-store (catalog, sales log, settings)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, SaleTransaction, ReceiptSettings, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Register cart with stock-capped quantities
//! - [`sale`] - Line item construction and stock alert classification
//! - [`receipt`] - Plain-text receipt rendering from a settings snapshot
//! - [`restock`] - Sales-data projection for the restock advisor
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use lanka_core::money::Money;
//! use lanka_core::sale::StockAlert;
//!
//! let unit = Money::from_major_minor(250, 0); // LKR 250.00
//! assert_eq!(unit.multiply_quantity(3).cents(), 75_000);
//!
//! let alert = StockAlert::classify("Red Dhal 1kg", 4, 10).unwrap();
//! assert_eq!(alert.to_string(), "Red Dhal 1kg is running low (Stock: 4)!");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod receipt;
pub mod restock;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use restock::{RestockSuggestion, SuggestRestockInput, SuggestRestockOutput, SuggestedQuantity};
pub use sale::StockAlert;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which an item is reported as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Number of most recent transactions fed to the restock advisor.
pub const RESTOCK_HISTORY_WINDOW: usize = 20;

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in one sale.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price accepted, in cents (LKR 10,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Currency shown on receipts when none is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "LKR";
