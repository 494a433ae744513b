//! # Repository Module
//!
//! Typed access to the store, one repository per entity.
//!
//! ```text
//! HTTP handler
//!      │
//!      │  store.items().search("rice")
//!      ▼
//! ItemRepository ─────┐
//! SaleRepository ─────┼──► Store::lock() ──► StoreData
//! SettingsRepository ─┘
//! ```
//!
//! Repositories borrow the [`Store`](crate::Store) handle; each method takes
//! the lock once and returns owned values.
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Catalog listing, search and inserts
//! - [`SaleRepository`](sale::SaleRepository) - Sale processing and the sales log
//! - [`SettingsRepository`](settings::SettingsRepository) - Receipt settings and threshold

pub mod item;
pub mod sale;
pub mod settings;
