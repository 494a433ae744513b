//! # Error Types
//!
//! Domain-specific error types for lanka-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lanka-core errors (this file)                                         │
//! │  ├── CoreError        - Cart and sale rule violations                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lanka-store errors                                                    │
//! │  └── StoreError       - Lookup and lock failures                       │
//! │                                                                         │
//! │  lanka-advisor errors                                                  │
//! │  └── AdvisorError     - Language model round trip failures             │
//! │                                                                         │
//! │  pos-server errors                                                     │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item id is not a line in the cart.
    #[error("Item {0} is not in the cart")]
    ItemNotInCart(String),

    /// Item has no stock left to add to a cart.
    #[error("{name} is currently out of stock.")]
    OutOfStock { name: String },

    /// Cart already holds every unit currently in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock: 3, cart has 3
    ///      │
    ///      ▼
    /// add one more
    ///      │
    ///      ▼
    /// StockLimitReached { name: "Red Dhal 1kg", available: 3 }
    /// ```
    #[error("Cannot add more {name}. Max stock available ({available}).")]
    StockLimitReached { name: String, available: u32 },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// A line subtotal or total does not fit in the money type.
    #[error("Amount is too large")]
    AmountOverflow,

    /// Sales data could not be serialized for the advisor.
    #[error("Failed to serialize sales data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, so a rejected request never
/// leaves a half-applied change behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value cannot be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::StockLimitReached {
            name: "Red Dhal 1kg".to_string(),
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add more Red Dhal 1kg. Max stock available (3)."
        );

        let err = CoreError::OutOfStock {
            name: "Coca-Cola 1.5L".to_string(),
        };
        assert_eq!(err.to_string(), "Coca-Cola 1.5L is currently out of stock.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::Negative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
