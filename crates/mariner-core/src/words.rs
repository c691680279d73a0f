//! # Amount in Words
//!
//! Renders a rupee amount the way it is printed on receipts and vouchers:
//! `"One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy
//! Eight Rupees Only"`.
//!
//! ## Indian Digit Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Divisor        Label       Example                                     │
//! │  ──────────     ────────    ───────────────────────────────────────     │
//! │  10,000,000     Crore       1,23,45,678 → One Crore ...                 │
//! │     100,000     Lakh          23,45,678 → Twenty Three Lakh ...         │
//! │       1,000     Thousand         45,678 → Forty Five Thousand ...       │
//! │         100     Hundred             678 → Six Hundred ...               │
//! │        1-99     ones / teens / tens  78 → Seventy Eight                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A group whose quotient is zero is left out entirely. The crore quotient
//! is itself spelled recursively, so there is no top label at which
//! decomposition stops: `10^9` is "One Hundred Crore".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

// =============================================================================
// Words Style
// =============================================================================

/// Formatting options for amount-in-words output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordsStyle {
    /// Currency code printed before the rupee words, e.g. `"INR"`.
    #[serde(default)]
    pub currency_prefix: Option<String>,
}

impl WordsStyle {
    /// Words with a leading currency code: `"INR One Hundred Rupees Only"`.
    pub fn with_prefix(code: impl Into<String>) -> Self {
        WordsStyle {
            currency_prefix: Some(code.into()),
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Converts a rupee amount to words.
///
/// ## Example
/// ```rust
/// use mariner_core::words::to_words;
///
/// assert_eq!(to_words(1234.0).unwrap(), "One Thousand Two Hundred Thirty Four Rupees Only");
/// assert_eq!(to_words(0.5).unwrap(), "Zero Rupees and Fifty Paise Only");
/// assert!(to_words(-1.0).is_err());
/// ```
///
/// ## Errors
/// [`CoreError::InvalidAmount`] for negative, NaN, infinite or
/// unrepresentably large input. Nothing is rendered on failure.
pub fn to_words(amount: f64) -> CoreResult<String> {
    to_words_with(amount, &WordsStyle::default())
}

/// Converts a rupee amount to words using the given style.
///
/// ```rust
/// use mariner_core::words::{to_words_with, WordsStyle};
///
/// let words = to_words_with(100.0, &WordsStyle::with_prefix("INR")).unwrap();
/// assert_eq!(words, "INR One Hundred Rupees Only");
/// ```
pub fn to_words_with(amount: f64, style: &WordsStyle) -> CoreResult<String> {
    let money = Money::try_from_rupees_f64(amount)
        .map_err(|e| CoreError::invalid_amount(amount, e.to_string()))?;

    money_to_words(money, style)
}

/// Converts an already-split [`Money`] value to words.
///
/// Negative amounts are rejected rather than printed as their absolute value.
pub fn money_to_words(money: Money, style: &WordsStyle) -> CoreResult<String> {
    if money.is_negative() {
        return Err(CoreError::invalid_amount(
            money.to_f64(),
            "amount must not be negative",
        ));
    }

    let mut words = String::new();
    if let Some(code) = &style.currency_prefix {
        words.push_str(code);
        words.push(' ');
    }

    words.push_str(&integer_to_words(money.rupees() as u64));
    words.push_str(" Rupees");

    let paise = money.paise_part() as u64;
    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&integer_to_words(paise));
        words.push_str(" Paise");
    }

    words.push_str(" Only");
    Ok(words)
}

/// Spells a whole number using Indian grouping.
///
/// ```rust
/// use mariner_core::words::integer_to_words;
///
/// assert_eq!(integer_to_words(0), "Zero");
/// assert_eq!(integer_to_words(100_000), "One Lakh");
/// assert_eq!(integer_to_words(1_000_000_000), "One Hundred Crore");
/// ```
pub fn integer_to_words(n: u64) -> String {
    match n {
        0 => "Zero".to_string(),
        _ => spell(n),
    }
}

// =============================================================================
// Recursion
// =============================================================================

/// Spells `n >= 1`. Zero never reaches here: empty groups are skipped.
fn spell(n: u64) -> String {
    match n {
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => match n % 10 {
            0 => TENS[(n / 10) as usize].to_string(),
            ones => format!("{} {}", TENS[(n / 10) as usize], ONES[ones as usize]),
        },
        100..=999 => spell_group(n, HUNDRED, "Hundred"),
        1_000..=99_999 => spell_group(n, THOUSAND, "Thousand"),
        100_000..=9_999_999 => spell_group(n, LAKH, "Lakh"),
        _ => spell_group(n, CRORE, "Crore"),
    }
}

fn spell_group(n: u64, divisor: u64, label: &str) -> String {
    match (n / divisor, n % divisor) {
        (upper, 0) => format!("{} {}", spell(upper), label),
        (upper, lower) => format!("{} {} {}", spell(upper), label, spell(lower)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
