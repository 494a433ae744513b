//! # lanka-store: In-Memory Store for LankaPOS
//!
//! This crate holds the item catalog, the sales log and the receipt
//! settings, and performs sale processing against them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LankaPOS Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (process_sale)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   lanka-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │    Store      │    │   Repositories   │   │    Seed     │  │   │
//! │  │   │  (store.rs)   │    │                  │   │  (seed.rs)  │  │   │
//! │  │   │               │◄───│ ItemRepository   │   │             │  │   │
//! │  │   │ Arc<Mutex<    │    │ SaleRepository   │   │ 7 grocery   │  │   │
//! │  │   │  StoreData>>  │    │ SettingsRepo...  │   │ items       │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lanka_core::CartItem;
//! use lanka_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default());
//! let milk = store.items().require("ITM003").unwrap();
//! let total = milk.price.multiply_quantity(2);
//!
//! let outcome = store
//!     .sales()
//!     .process_sale(&[CartItem::new(milk, 2)], total)
//!     .unwrap();
//! assert_eq!(outcome.sale.id, "SALE0001");
//! assert_eq!(store.items().require("ITM003").unwrap().stock, 48);
//! ```

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use repository::item::ItemRepository;
pub use repository::sale::{SaleOutcome, SaleRepository};
pub use repository::settings::SettingsRepository;
pub use store::{Store, StoreConfig};
