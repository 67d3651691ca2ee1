//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total is Σ(price × quantity). Summing floats drifts.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹79,999.00 is stored as 7_999_900 paise                              │
//! │    Every total is exact, only the display layer rounds                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_rupees(1_299);
//! let line = price * 3;
//! assert_eq!(line.rupees(), 3_897);
//! assert_eq!(line.to_string(), "₹3,897.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as "₹40 short of free delivery"
///   are plain subtractions
/// - **Single field tuple struct**: serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLineItem.line_total ──► Cart.total
///                                                   │
///                         DeliveryPolicy ──────────►├──► OrderSummary.grand_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount. Used as the open upper bound of a
    /// price range.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_paise(129_950);
    /// assert_eq!(price.paise(), 129_950);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Saturates instead of overflowing for absurdly large inputs.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees.saturating_mul(PAISE_PER_RUPEE))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(129_950).rupees(), 1_299);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Rounds to whole rupees, half away from zero.
    ///
    /// The storefront shows prices without a fractional part, so ₹12.50
    /// displays as ₹13.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1_250).rounded_rupees(), 13);
    /// assert_eq!(Money::from_paise(1_249).rounded_rupees(), 12);
    /// assert_eq!(Money::from_paise(-1_250).rounded_rupees(), -13);
    /// ```
    pub const fn rounded_rupees(&self) -> i64 {
        // Round on the remainder so amounts near the i64 limits never overflow.
        let half = PAISE_PER_RUPEE / 2;
        let rupees = self.0 / PAISE_PER_RUPEE;
        let rest = self.0 % PAISE_PER_RUPEE;
        if rest >= half {
            rupees + 1
        } else if rest <= -half {
            rupees - 1
        } else {
            rupees
        }
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

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates at [`Money::MAX`]; a cart has no quantity ceiling, so the
    /// product of two large numbers must not wrap into a negative total.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(299);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_rupees(897));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `₹` with Indian digit grouping (last three digits, then pairs)
/// and two paise digits: `₹1,23,456.78`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            group_indian(self.rupees().unsigned_abs()),
            self.paise_part()
        )
    }
}

/// Groups an integer the way `en-IN` number formatting does.
///
/// ```text
/// 999       → 999
/// 1000      → 1,000
/// 123456    → 1,23,456
/// 12345678  → 1,23,45,678
/// ```
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by a quantity.
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

// =============================================================================
// Unit Tests
// =============================================================================
