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
//! │  A 10% coupon on a $10.01 order:                                        │
//! │    1001 * 0.10 = 100.10000000000001 → which cent do you charge?        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    floor(1001 * 1000 / 10000) = 100 cents, deterministically           │
//! │    The customer is never over-discounted by accumulated drift          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pierogi_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Intermediate results of `subtotal - discount` may dip
///   below zero before the aggregator floors them; the type must carry that
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for the JSON boundary
///
/// ## Where Money Flows
/// ```text
/// OrderItem.unit_price_cents ──► line total ──► subtotal
///                                                  │
///          discounts ◄── tax ◄── delivery fee ◄────┤
///                                                  ▼
///                                       PricingResult.total_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pierogi_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a basis-point rate, truncating DOWN to the integer cent.
    ///
    /// ## Why Floor, Not Round?
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Every percentage in the pricing rules (vip tier, FIRST10 coupon,  │
    /// │  zone tax) is defined as floor(amount × rate).                     │
    /// │                                                                     │
    /// │  floor(1001 × 10%) = 100, never 100.1 and never 101                │
    /// │                                                                     │
    /// │  Truncating in ONE place keeps every rule exact and means the      │
    /// │  result can never exceed the amount it was computed from.          │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math with an i128 intermediate so large orders cannot
    /// overflow: `amount_cents * bps / 10000`. All pricing inputs are
    /// non-negative, so integer division here IS floor division.
    ///
    /// ## Example
    /// ```rust
    /// use pierogi_core::money::Money;
    /// use pierogi_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(1500); // $15.00
    /// let rate = Rate::from_bps(800);         // 8%
    ///
    /// // $15.00 × 8% = $1.20 exactly
    /// assert_eq!(subtotal.percent_floor(rate).cents(), 120);
    ///
    /// // $10.01 × 10% = $1.001 → floors to $1.00
    /// let odd = Money::from_cents(1001);
    /// assert_eq!(odd.percent_floor(Rate::from_bps(1000)).cents(), 100);
    /// ```
    pub fn percent_floor(&self, rate: Rate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pierogi_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // one 6-pack at $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the smaller of two Money values.
    ///
    /// Used by the discount engine to cap the combined discount at the
    /// order subtotal.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Clamps a (possibly negative) intermediate value at zero.
    ///
    /// ## Example
    /// ```rust
    /// use pierogi_core::money::Money;
    ///
    /// let over_discounted = Money::from_cents(-50);
    /// assert_eq!(over_discounted.floor_at_zero().cents(), 0);
    /// assert_eq!(Money::from_cents(50).floor_at_zero().cents(), 50);
    /// ```
    #[inline]
    pub const fn floor_at_zero(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. Currency formatting for customers
/// is the presentation layer's job, not this crate's.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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
