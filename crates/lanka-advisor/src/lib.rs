//! # lanka-advisor: Restock Advisor
//!
//! Asks a language model how much of each item to reorder, based on the
//! most recent sales.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  RestockAdvisor::suggestions()                                         │
//! │       │                                                                 │
//! │       ├── store.sales().recent(20)  (lock released before any await)   │
//! │       │                                                                 │
//! │       ├── empty? ──► placeholder, done                                 │
//! │       │                                                                 │
//! │       ├── format_sales_data ──► SuggestRestockInput                    │
//! │       │                                                                 │
//! │       ├── RestockSuggester::suggest  (one attempt)                     │
//! │       │                                                                 │
//! │       └── output must be a JSON array                                  │
//! │                                                                         │
//! │  Any failure ──► AdvisorError, shown as                                │
//! │                  "Failed to generate restocking suggestions."          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod http;
pub mod prompt;
pub mod suggester;

pub use advisor::RestockAdvisor;
pub use config::AdvisorConfig;
pub use error::{AdvisorError, AdvisorResult, RESTOCK_FAILURE_MESSAGE};
pub use http::HttpSuggester;
pub use suggester::{RestockSuggester, UnavailableSuggester};
