//! # Validation Module
//!
//! Input validation for catalog and sale requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end form                                               │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP handler (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Trusts its input (no checks), clamps stock at zero               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lanka_core::validation::validate_new_item;
//!
//! let item = validate_new_item("White Sugar 1kg", 28000, 120, Some("Groceries")).unwrap();
//! assert_eq!(item.stock, 120);
//!
//! assert!(validate_new_item("Tea", 0, 10, None).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewItem;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MIN_ITEM_NAME_LEN: usize = 3;
const MAX_ITEM_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;
const MAX_SHOP_FIELD_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - At least 3 characters after trimming
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    let len = name.chars().count();
    if len < MIN_ITEM_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_ITEM_NAME_LEN,
        });
    }

    if len > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an optional category; blank categories are dropped.
pub fn validate_category(category: Option<&str>) -> ValidationResult<Option<String>> {
    let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(Some(category.to_string()))
}

/// Validates a shop identity string (name, address, contact).
pub fn validate_shop_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.chars().count() > MAX_SHOP_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_SHOP_FIELD_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents: positive and at most `MAX_PRICE_CENTS`.
pub fn validate_price(price_cents: i64) -> ValidationResult<Money> {
    if price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    if price_cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }
    Ok(Money::from_cents(price_cents))
}

/// Validates an opening stock count: a non-negative integer.
pub fn validate_stock(stock: i64) -> ValidationResult<u32> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }
    u32::try_from(stock).map_err(|_| ValidationError::OutOfRange {
        field: "stock".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

/// Validates a quantity on a sale line.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<u32> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY as i64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(quantity as u32)
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a new catalog item.
pub fn validate_new_item(
    name: &str,
    price_cents: i64,
    stock: i64,
    category: Option<&str>,
) -> ValidationResult<NewItem> {
    validate_item_name(name)?;
    let price = validate_price(price_cents)?;
    let stock = validate_stock(stock)?;
    let category = validate_category(category)?;

    Ok(NewItem {
        name: name.trim().to_string(),
        price,
        stock,
        category,
    })
}
