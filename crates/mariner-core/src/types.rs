//! # Domain Types
//!
//! Core domain types shared by the totals calculator and voucher assembly.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ AdjustmentLine  │   │  TotalsResult   │   │   TotalsLine    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  base (Money)   │──►│  name           │       │
//! │  │  kind           │   │  lines          │   │  amount (Money) │       │
//! │  │  value          │   │  net (Money)    │   │  sign           │       │
//! │  │  sign           │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ AdjustmentKind  │   │      Sign       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  units (u128)   │   │  Percentage     │   │  Add            │       │
//! │  │  10^9 = 1%      │   │  FlatAmount     │   │  Subtract       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_percentage, ValidationResult};

// =============================================================================
// Tax Rate
// =============================================================================

/// Fixed-point units in one percent.
pub const RATE_UNITS_PER_PERCENT: u128 = 1_000_000_000;

const RATE_UNITS_PER_BPS: u128 = RATE_UNITS_PER_PERCENT / 100;

/// Tax rate in fixed point, 10^9 units per percent.
///
/// ## Precision
/// ```text
/// 1 unit = 0.000000001%. Rates below a basis point are kept as entered:
///   ₹10,00,000 × 33.333%  = ₹3,33,330.00
///   ₹10,00,000 × 0.005%   = ₹50.00
///
/// The only rounding is the final one, to the paise.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u128);

impl TaxRate {
    /// Creates a tax rate from basis points (900 bps = 9%).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps as u128 * RATE_UNITS_PER_BPS)
    }

    /// Creates a tax rate from a percentage as entered (9.0 = 9%).
    ///
    /// ## Errors
    /// Negative or non-finite percentages, and rates beyond the fixed-point
    /// range (about 3.4 × 10^29 percent).
    pub fn try_from_percentage(pct: f64) -> ValidationResult<Self> {
        validate_percentage("rate", pct)?;

        let units = (pct * RATE_UNITS_PER_PERCENT as f64).round();
        if units >= u128::MAX as f64 {
            return Err(ValidationError::InvalidFormat {
                field: "rate".to_string(),
                reason: format!("{}% is too large", pct),
            });
        }

        Ok(TaxRate(units as u128))
    }

    /// Returns the raw fixed-point units.
    #[inline]
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / RATE_UNITS_PER_PERCENT as f64
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Adjustment Kind / Sign
// =============================================================================

/// How an adjustment line's `value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// `value` is a percent of the original base (9.0 = 9%).
    Percentage,
    /// `value` is a rupee amount used verbatim.
    FlatAmount,
}

/// Whether an adjustment line raises or lowers the net total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Added to the net (CGST, SGST, freight).
    #[default]
    Add,
    /// Deducted from the net (TDS, discounts).
    Subtract,
}

impl Sign {
    /// Applies the sign to an amount.
    #[inline]
    pub fn apply(&self, amount: Money) -> Money {
        match self {
            Sign::Add => amount,
            Sign::Subtract => -amount,
        }
    }

    /// Symbol used in printed totals and the compact line syntax.
    pub fn symbol(&self) -> char {
        match self {
            Sign::Add => '+',
            Sign::Subtract => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Sign {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Sign::Add),
            "-" | "sub" | "subtract" => Ok(Sign::Subtract),
            other => Err(ValidationError::InvalidFormat {
                field: "sign".to_string(),
                reason: format!("unknown sign '{}', expected + or -", other),
            }),
        }
    }
}

// =============================================================================
// Adjustment Line
// =============================================================================

/// One line item applied on top of a base amount.
///
/// ## Examples
/// ```text
/// CGST 9%     →  { "CGST", Percentage, 9.0,   Add }
/// SGST 9%     →  { "SGST", Percentage, 9.0,   Add }
/// TDS 2%      →  { "TDS",  Percentage, 2.0,   Subtract }
/// Freight 250 →  { "Freight", FlatAmount, 250.0, Add }
/// ```
///
/// Percentages are always taken from the original base. CGST and SGST on
/// the same invoice are two independent 9% levies, never 9% of 9%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustmentLine {
    pub name: String,
    pub kind: AdjustmentKind,
    pub value: f64,
    #[serde(default)]
    pub sign: Sign,
}

impl AdjustmentLine {
    /// A percentage line.
    pub fn percentage(name: impl Into<String>, pct: f64, sign: Sign) -> Self {
        AdjustmentLine {
            name: name.into(),
            kind: AdjustmentKind::Percentage,
            value: pct,
            sign,
        }
    }

    /// A flat rupee line.
    pub fn flat(name: impl Into<String>, amount: f64, sign: Sign) -> Self {
        AdjustmentLine {
            name: name.into(),
            kind: AdjustmentKind::FlatAmount,
            value: amount,
            sign,
        }
    }

    /// Central GST levy.
    pub fn cgst(pct: f64) -> Self {
        Self::percentage("CGST", pct, Sign::Add)
    }

    /// State GST levy.
    pub fn sgst(pct: f64) -> Self {
        Self::percentage("SGST", pct, Sign::Add)
    }

    /// Integrated GST levy (inter-state supply).
    pub fn igst(pct: f64) -> Self {
        Self::percentage("IGST", pct, Sign::Add)
    }

    /// Tax deducted at source by the payer.
    pub fn tds(pct: f64) -> Self {
        Self::percentage("TDS", pct, Sign::Subtract)
    }

    /// Splits a total GST rate evenly into CGST and SGST lines.
    ///
    /// ```rust
    /// use mariner_core::types::AdjustmentLine;
    ///
    /// let lines = AdjustmentLine::gst_split(18.0);
    /// assert_eq!(lines[0], AdjustmentLine::cgst(9.0));
    /// assert_eq!(lines[1], AdjustmentLine::sgst(9.0));
    /// ```
    pub fn gst_split(total_pct: f64) -> [Self; 2] {
        let half = total_pct / 2.0;
        [Self::cgst(half), Self::sgst(half)]
    }

    /// Returns the tax rate for a percentage line, `None` for flat lines
    /// and unusable values.
    pub fn rate(&self) -> Option<TaxRate> {
        match self.kind {
            AdjustmentKind::Percentage => TaxRate::try_from_percentage(self.value).ok(),
            AdjustmentKind::FlatAmount => None,
        }
    }
}

impl fmt::Display for AdjustmentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AdjustmentKind::Percentage => write!(f, "{}:{}%:{}", self.name, self.value, self.sign),
            AdjustmentKind::FlatAmount => write!(f, "{}:{}:{}", self.name, self.value, self.sign),
        }
    }
}

/// Parses the compact line syntax `NAME:VALUE[%][:+|-]`.
///
/// ```rust
/// use mariner_core::types::{AdjustmentKind, AdjustmentLine, Sign};
///
/// let tds: AdjustmentLine = "TDS:2%:-".parse().unwrap();
/// assert_eq!(tds, AdjustmentLine::tds(2.0));
///
/// let freight: AdjustmentLine = "Freight:250".parse().unwrap();
/// assert_eq!(freight.kind, AdjustmentKind::FlatAmount);
/// assert_eq!(freight.sign, Sign::Add);
/// ```
impl FromStr for AdjustmentLine {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ValidationError::InvalidFormat {
            field: "adjustment line".to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (name, value, sign) = match parts.as_slice() {
            [name, value] => (*name, *value, Sign::Add),
            [name, value, sign] => (*name, *value, sign.parse()?),
            _ => {
                return Err(invalid(format!(
                    "'{}' is not NAME:VALUE[%][:+|-]",
                    s
                )))
            }
        };

        if name.is_empty() {
            return Err(ValidationError::Required {
                field: "adjustment name".to_string(),
            });
        }

        let (number, kind) = match value.strip_suffix('%') {
            Some(pct) => (pct.trim(), AdjustmentKind::Percentage),
            None => (value, AdjustmentKind::FlatAmount),
        };

        let value: f64 = number
            .parse()
            .map_err(|_| invalid(format!("'{}' is not a number", number)))?;

        Ok(AdjustmentLine {
            name: name.to_string(),
            kind,
            value,
            sign,
        })
    }
}

// =============================================================================
// Totals
// =============================================================================

/// A computed adjustment, rounded to the paise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsLine {
    pub name: String,
    pub amount: Money,
    pub sign: Sign,
}

/// Output of the totals calculator.
///
/// `net = base + Σ (Add ? amount : -amount)` over the rounded line amounts,
/// so the printed lines always add up to the printed net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsResult {
    pub base: Money,
    /// Same order as the input lines.
    pub lines: Vec<TotalsLine>,
    pub net: Money,
}

impl TotalsResult {
    /// Sum of every `Add` line.
    pub fn total_added(&self) -> Money {
        self.lines
            .iter()
            .filter(|line| line.sign == Sign::Add)
            .map(|line| line.amount)
            .sum()
    }

    /// Sum of every `Subtract` line.
    pub fn total_subtracted(&self) -> Money {
        self.lines
            .iter()
            .filter(|line| line.sign == Sign::Subtract)
            .map(|line| line.amount)
            .sum()
    }

    /// Looks up a computed line by name (first match).
    pub fn line(&self, name: &str) -> Option<&TotalsLine> {
        self.lines.iter().find(|line| line.name == name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
