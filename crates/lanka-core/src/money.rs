//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A sale total built by summing float subtotals can drift away from     │
//! │  the sum the customer sees on the receipt.                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents)                              │
//! │    LKR 250.00 is stored as 25000                                        │
//! │    sum(subtotal) is exact, so totalAmount == sum(subtotal) holds        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lanka_core::money::Money;
//!
//! let price = Money::from_major_minor(980, 0); // LKR 980.00
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.to_string(), "1960.00");
//! assert_eq!(line.format_with("LKR"), "LKR 1960.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents of LKR).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps, differences can be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a bare integer**: `{"price": 25000}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use lanka_core::money::Money;
    ///
    /// let price = Money::from_cents(8000); // LKR 80.00
    /// assert_eq!(price.cents(), 8000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rupees and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Item: White Sugar 1kg  LKR 280.00
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: LKR 840.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// [`multiply_quantity`](Money::multiply_quantity) for amounts that come
    /// from outside the process.
    ///
    /// ## Errors
    /// * `CoreError::AmountOverflow` - the product does not fit in an i64
    pub fn checked_multiply_quantity(&self, qty: u32) -> CoreResult<Self> {
        self.0
            .checked_mul(i64::from(qty))
            .map(Money)
            .ok_or(CoreError::AmountOverflow)
    }

    /// Adds two amounts, failing instead of wrapping.
    pub fn checked_add(self, other: Self) -> CoreResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(CoreError::AmountOverflow)
    }

    /// Formats the amount prefixed by a currency code, as printed on receipts.
    pub fn format_with(&self, currency: &str) -> String {
        format!("{} {}", currency, self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering: `25000` → `250.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(98050);
        assert_eq!(money.cents(), 98050);
        assert_eq!(money.major(), 980);
        assert_eq!(money.minor(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(250, 0).cents(), 25000);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(25000).to_string(), "250.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(8000).format_with("LKR"), "LKR 80.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_cents(100), Money::from_cents(250), Money::from_cents(5)];
        let by_ref: Money = lines.iter().sum();
        let by_value: Money = lines.into_iter().sum();
        assert_eq!(by_ref.cents(), 355);
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_cents(28000);
        assert_eq!(price.checked_multiply_quantity(3).unwrap().cents(), 84000);
        assert_eq!(price.checked_add(Money::from_cents(50)).unwrap().cents(), 28050);

        let huge = Money::from_cents(4_611_686_018_427_387_904);
        assert!(matches!(
            huge.checked_multiply_quantity(2),
            Err(CoreError::AmountOverflow)
        ));
        assert!(matches!(
            Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)),
            Err(CoreError::AmountOverflow)
        ));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(25000)).unwrap();
        assert_eq!(json, "25000");
    }
}
