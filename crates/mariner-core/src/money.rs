//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In the browser form fields:                                            │
//! │    16949.15 * 0.09 = 1525.4234999999999  (which way does it round?)     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    1694915 paise × 9% = 152542.35 → 152542 paise (₹1,525.42)            │
//! │    Rounding happens once, in integer arithmetic, half-up                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form fields still arrive as `f64`. They are converted exactly once, at
//! the boundary, by [`Money::try_from_rupees_f64`].
//!
//! ## Usage
//! ```rust
//! use mariner_core::money::Money;
//!
//! let fee = Money::from_rupees_paise(16949, 15);
//! assert_eq!(fee.paise(), 1694915);
//! assert_eq!(fee.to_string(), "₹16,949.15");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{TaxRate, RATE_UNITS_PER_PERCENT};
use crate::validation::{validate_amount, ValidationResult};

/// Largest paise count an `f64` can hold exactly (2^53 - 1).
pub const MAX_EXACT_PAISE: i64 = 9_007_199_254_740_991;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: a net total may go below zero when deductions
///   exceed the base; inputs themselves are validated non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Form field (f64) ──► Money ──┬──► AdjustmentLine amounts (CGST, TDS)  │
/// │                               │                                         │
/// │                               └──► TotalsResult.net ──► amount in words │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// ## Example
    /// ```rust
    /// use mariner_core::money::Money;
    ///
    /// let fee = Money::from_rupees_paise(10, 99);
    /// assert_eq!(fee.paise(), 1099);
    ///
    /// let refund = Money::from_rupees_paise(-5, 50);
    /// assert_eq!(refund.paise(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts only the rupee part carries the sign:
    /// `from_rupees_paise(-5, 50)` is -₹5.50, not -₹4.50.
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Converts a user-entered rupee amount into paise.
    ///
    /// ## Splitting Rules
    /// ```text
    /// rupees = floor(amount)
    /// paise  = round((amount - rupees) × 100)
    /// paise == 100  →  rupees += 1, paise = 0
    /// ```
    ///
    /// Rejects negative, NaN and infinite input, and amounts too large
    /// to be split into an exact paise count.
    ///
    /// ## Example
    /// ```rust
    /// use mariner_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_rupees_f64(0.5).unwrap().paise(), 50);
    /// assert_eq!(Money::try_from_rupees_f64(2.999).unwrap().paise(), 300);
    /// assert!(Money::try_from_rupees_f64(-1.0).is_err());
    /// ```
    pub fn try_from_rupees_f64(amount: f64) -> ValidationResult<Self> {
        validate_amount("amount", amount)?;

        let rupees = amount.floor();
        if rupees > (MAX_EXACT_PAISE / 100) as f64 {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "too large to represent in exact paise".to_string(),
            });
        }

        let mut rupees = rupees as i64;
        let mut paise = ((amount - rupees as f64) * 100.0).round() as i64;
        if paise >= 100 {
            rupees += 1;
            paise = 0;
        }

        Ok(Money::from_rupees_paise(rupees, paise))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use mariner_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).rupees(), 10);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates a percentage of this amount, rounded half-up to the paise.
    ///
    /// ## Half-Up Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Printed invoices round currency the way the accountant does:       │
    /// │    152542.35 paise → 152542    152542.50 paise → 152543             │
    /// │                                                                     │
    /// │  Integer form: (paise × units + D/2) / D                            │
    /// │  D = 100 × RATE_UNITS_PER_PERCENT; the product is exact in u128     │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Halves round away from zero. Returns `None` when the result does
    /// not fit in [`MAX_EXACT_PAISE`].
    ///
    /// ## Example
    /// ```rust
    /// use mariner_core::money::Money;
    /// use mariner_core::types::TaxRate;
    ///
    /// let base = Money::from_paise(1694915);      // ₹16,949.15
    /// let cgst = base.checked_percentage(TaxRate::from_bps(900)).unwrap(); // 9%
    /// assert_eq!(cgst.paise(), 152542);           // ₹1,525.42
    /// ```
    pub fn checked_percentage(&self, rate: TaxRate) -> Option<Money> {
        const DIVISOR: u128 = 100 * RATE_UNITS_PER_PERCENT;

        let scaled = (self.0.unsigned_abs() as u128).checked_mul(rate.units())?;
        let paise = scaled.checked_add(DIVISOR / 2)? / DIVISOR;
        if paise > MAX_EXACT_PAISE as u128 {
            return None;
        }

        let paise = paise as i64;
        Some(Money(if self.0 < 0 { -paise } else { paise }))
    }

    /// Returns the amount in rupees as a float (for JSON and display only).
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Formats without symbol or grouping: `"1234567.89"`.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Groups a rupee count the Indian way: last three digits, then pairs.
///
/// `1234567` → `"12,34,567"`.
fn group_indian(rupees: u64) -> String {
    let digits = rupees.to_string();
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

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount the way Indian invoices print it: `₹12,34,567.89`.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
