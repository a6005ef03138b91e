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
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is a count of the smallest currency unit (i64).        │
//! │    Catalog prices are whole rupees; totals and tax stay exact.         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loom_core::money::Money;
//!
//! // Catalog prices are whole rupees
//! let price = Money::from_rupees(8_500); // LKR 8,500.00
//!
//! // Arithmetic operations
//! let line_total = price * 3;
//! assert_eq!(line_total, Money::from_rupees(25_500));
//!
//! // NEVER construct money from floats; parse display strings with
//! // `CurrencyFormat::parse` instead.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::pricing::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents of a
/// Sri Lankan rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic on differences never wraps into a panic
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support; snapshots carry the raw cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    ///
    /// let price = Money::from_cents(1_250_050); // LKR 12,500.50
    /// assert_eq!(price.cents(), 1_250_050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Catalog prices are listed in whole rupees; this is the constructor
    /// the embedded product data uses.
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    ///
    /// let price = Money::from_rupees(8_500);
    /// assert_eq!(price.cents(), 850_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    ///
    /// let price = Money::from_cents(1_250_050);
    /// assert_eq!(price.rupees(), 12_500);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional cent portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math throughout: `(amount * bps + 5000) / 10000`. The +5000
    /// term rounds the half-cent case up instead of truncating.
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    /// use loom_core::pricing::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(38_000);
    /// let rate = TaxRate::from_bps(500); // 5%
    ///
    /// assert_eq!(subtotal.calculate_tax(rate), Money::from_rupees(1_900));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 intermediate prevents overflow on large amounts
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use loom_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(8_500);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_rupees(25_500));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::currency::CurrencyFormat`]
/// for user-facing display; it carries the currency code and grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs {}.{:02}", sign, self.rupees().abs(), self.cents_part())
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
    fn test_from_cents() {
        let money = Money::from_cents(1_250_050);
        assert_eq!(money.cents(), 1_250_050);
        assert_eq!(money.rupees(), 12_500);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(8_500);
        assert_eq!(money.cents(), 850_000);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(8_500)), "Rs 8500.00");
        assert_eq!(format!("{}", Money::from_cents(1_250_050)), "Rs 12500.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-Rs 5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1_000);
        let b = Money::from_rupees(500);

        assert_eq!(a + b, Money::from_rupees(1_500));
        assert_eq!(a - b, Money::from_rupees(500));
        assert_eq!(a * 3, Money::from_rupees(3_000));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_rupees(1_500));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_tax_calculation_exact() {
        // LKR 38,000 at 5% = LKR 1,900 exactly
        let amount = Money::from_rupees(38_000);
        let tax = amount.calculate_tax(TaxRate::from_bps(500));
        assert_eq!(tax, Money::from_rupees(1_900));
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // 999 cents at 5% = 49.95 cents, rounds to 50
        let amount = Money::from_cents(999);
        let tax = amount.calculate_tax(TaxRate::from_bps(500));
        assert_eq!(tax.cents(), 50);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(4_200);
        assert_eq!(unit_price.multiply_quantity(2), Money::from_rupees(8_400));
    }
}
