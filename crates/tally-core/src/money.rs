//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart that sums f64 prices drifts a cent at a time:                   │
//! │    3 × $9.99 = $29.970000000000002  → "$29.97" only by luck            │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Prices are exact decimals end to end. 3 × 9.99 IS 29.97.            │
//! │    Rounding happens once, explicitly, at the display edge.             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents (exact)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value backed by an exact decimal.
///
/// ## Design Decisions
/// - **`Decimal` (signed)**: exact base-10 arithmetic; negative values stay
///   representable so validation can reject them with a real message
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Serde as JSON number**: the persisted cart stores `price` as a plain
///   number, so the field uses `rust_decimal::serde::float`
///
/// Equality and ordering follow decimal value, not representation:
/// `9.9 == 9.90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Wraps a raw decimal amount.
    #[inline]
    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to 2 decimal places for display.
    ///
    /// Accumulation stays unrounded; callers round once at the edge so
    /// per-line rounding error never compounds across a large cart.
    /// Midpoints round half-to-even (Bankers Rounding), `Decimal`'s default.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let exact = Money::from_cents(999) * 3; // 29.97, already 2 dp
    /// assert_eq!(exact.rounded(), Money::from_cents(2997));
    /// ```
    #[inline]
    pub fn rounded(&self) -> Self {
        Money(self.0.round_dp(2))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// The price's contribution to a derived line identity.
    ///
    /// Trailing fractional zeros carry no value and are stripped, so the
    /// same price always yields the same identity regardless of how it was
    /// written: `9.99` → `"9.99"`, `15.00` → `"15"`, `9.90` → `"9.9"`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(999).identity_component(), "9.99");
    /// assert_eq!(Money::from_cents(1500).identity_component(), "15");
    /// ```
    pub fn identity_component(&self) -> String {
        self.0.normalize().to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Always two decimal places, sign ahead of the currency symbol: `$10.99`,
/// `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Parses a plain decimal string such as `"9.99"`.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summation over unrounded amounts (used by the subtotal aggregate).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));
    }

    #[test]
    fn test_value_equality_ignores_scale() {
        // 9.9 and 9.90 are the same amount of money
        let a: Money = "9.9".parse().unwrap();
        let b: Money = "9.90".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounded_uses_bankers_rounding() {
        let low: Money = "2.345".parse().unwrap();
        let high: Money = "2.355".parse().unwrap();
        assert_eq!(low.rounded().to_string(), "$2.34");
        assert_eq!(high.rounded().to_string(), "$2.36");
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    }

    #[test]
    fn test_identity_component_strips_trailing_zeros() {
        assert_eq!(Money::from_cents(999).identity_component(), "9.99");
        assert_eq!(Money::from_cents(1500).identity_component(), "15");
        assert_eq!(Money::from_cents(990).identity_component(), "9.9");
        assert_eq!(Money::zero().identity_component(), "0");
    }

    #[test]
    fn test_parse() {
        let money: Money = " 9.99 ".parse().unwrap();
        assert_eq!(money, Money::from_cents(999));
        assert!("ten dollars".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_serializes_as_json_number() {
        let price = Money::from_cents(999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "9.99");

        let parsed: Money = serde_json::from_str("9.99").unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_json_round_trip_whole_amounts() {
        // 15.00 may serialize as 15.0; what matters is value equality back
        let fee = Money::from_cents(1500);
        let json = serde_json::to_string(&fee).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fee);
    }
}
