//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A basket full of £3.50 curries must sum EXACTLY, because checkout     │
//! │  compares the computed total against the customer's expected total     │
//! │  with strict equality.                                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    350 + 350 = 700, always. Equality is integer equality.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use takeaway_core::money::Money;
//!
//! // Create from pence (preferred)
//! let price = Money::from_pence(350); // £3.50
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // £7.00
//! let total = price + Money::from_pence(300);    // £6.50
//!
//! // NEVER do this:
//! // let bad = Money::from_float(3.50); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays closed; validators reject negative
///   prices at the boundaries where they are not allowed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a bare pence integer
///
/// ## Where Money Flows
/// ```text
/// Menu entry (pence) ──► OrderLine.unit_price ──► OrderLine.line_total()
///                                                        │
///                        Basket.total() ◄────────────────┘
///                              │
///                              ▼
///                        checkout(expected) — strict integer equality
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::money::Money;
    ///
    /// let price = Money::from_pence(350); // Represents £3.50
    /// assert_eq!(price.pence(), 350);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from major and minor units (pounds and pence).
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::money::Money;
    ///
    /// let price = Money::from_pounds_pence(3, 50); // £3.50
    /// assert_eq!(price.pence(), 350);
    ///
    /// let refund = Money::from_pounds_pence(-5, 50); // -£5.50
    /// assert_eq!(refund.pence(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_pounds_pence(-5, 50)` = -£5.50, not -£4.50
    #[inline]
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        if pounds < 0 {
            Money(pounds * 100 - pence)
        } else {
            Money(pounds * 100 + pence)
        }
    }

    /// Returns the value in pence (smallest currency unit).
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (pence) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(350).pence_part(), 50);
    /// assert_eq!(Money::from_pence(-550).pence_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn pence_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(400); // £4.00 vindaloo
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.pence(), 800); // £8.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders money the way the basket summary and
/// checkout messages need it: `£` prefix, always two decimal digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.pounds().abs(),
            self.pence_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_from_pounds_pence() {
        let money = Money::from_pounds_pence(3, 50);
        assert_eq!(money.pence(), 350);

        let negative = Money::from_pounds_pence(-5, 50);
        assert_eq!(negative.pence(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(350)), "£3.50");
        assert_eq!(format!("{}", Money::from_pence(300)), "£3.00");
        assert_eq!(format!("{}", Money::from_pence(1450)), "£14.50");
        assert_eq!(format!("{}", Money::from_pence(-550)), "-£5.50");
        assert_eq!(format!("{}", Money::from_pence(0)), "£0.00");
    }

    #[test]
    fn test_whole_pounds_render_two_decimals() {
        // 3 -> "£3.00", 3.5 -> "£3.50": display always shows two digits
        assert_eq!(Money::from_pounds_pence(3, 0).to_string(), "£3.00");
        assert_eq!(Money::from_pounds_pence(3, 50).to_string(), "£3.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a - b).pence(), 500);
        let result: Money = a * 3;
        assert_eq!(result.pence(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.pence(), 1500);
        acc -= b;
        assert_eq!(acc.pence(), 1000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_pence(400);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.pence(), 800);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_pence(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }

    /// Repeated fractional-pound prices accumulate exactly: the failure
    /// mode checkout's strict equality exists to guard against.
    #[test]
    fn test_half_pound_increments_sum_exactly() {
        let korai = Money::from_pence(350);
        let mut total = Money::zero();
        for _ in 0..10 {
            total += korai;
        }
        assert_eq!(total, Money::from_pence(3500));
        assert_eq!(total.to_string(), "£35.00");
    }

    #[test]
    fn test_serde_round_trip_as_pence_integer() {
        let price = Money::from_pence(350);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "350");

        let back: Money = serde_json::from_str("350").unwrap();
        assert_eq!(back, price);
    }
}
