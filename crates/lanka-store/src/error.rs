//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError (cart / validation rule)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup and lock failures              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in pos-server) ← Serialized for the front end               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lanka_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A sale was submitted with no lines.
    #[error("Cannot process a sale with no items")]
    EmptySale,

    /// Another thread panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Business rule failure from lanka-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
