//! # Validation Module
//!
//! Input validation for amounts, adjustment lines and voucher headers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form wizard (front-end)                                      │
//! │  ├── Empty fields treated as 0                                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: mariner-core                                                 │
//! │  └── THIS MODULE: reject anything that would print a wrong figure      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API                                                  │
//! │  └── Uniqueness of voucher numbers, ledger constraints                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mariner_core::validation::{validate_amount, validate_voucher_number};
//!
//! assert!(validate_amount("base", 16949.15).is_ok());
//! assert!(validate_voucher_number("PR/2024-25/0001").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest adjustment line name accepted ("CGST", "Pilotage Surcharge", ...).
pub const MAX_LINE_NAME_LEN: usize = 50;

/// Longest voucher number accepted.
pub const MAX_VOUCHER_NUMBER_LEN: usize = 30;

/// Longest party (payer / customer) name accepted.
pub const MAX_PARTY_NAME_LEN: usize = 200;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount entered in rupees.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must not be negative
/// - Zero is allowed
pub fn validate_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a percentage value.
///
/// ## Rules
/// - Must be finite and non-negative
/// - No upper bound: surcharges above 100% are legal
pub fn validate_percentage(field: &str, pct: f64) -> ValidationResult<()> {
    validate_amount(field, pct)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an adjustment line name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 50 characters
pub fn validate_line_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "adjustment name".to_string(),
        });
    }

    if name.chars().count() > MAX_LINE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "adjustment name".to_string(),
            max: MAX_LINE_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a voucher number.
///
/// ## Rules
/// - Must not be empty
/// - At most 30 characters
/// - Only letters, digits, hyphens, slashes and underscores
///
/// ## Example
/// ```rust
/// use mariner_core::validation::validate_voucher_number;
///
/// assert!(validate_voucher_number("SV-0042").is_ok());
/// assert!(validate_voucher_number("").is_err());
/// assert!(validate_voucher_number("SV 0042").is_err());
/// ```
pub fn validate_voucher_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "voucher number".to_string(),
        });
    }

    if number.len() > MAX_VOUCHER_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "voucher number".to_string(),
            max: MAX_VOUCHER_NUMBER_LEN,
        });
    }

    if !number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "voucher number".to_string(),
            reason: "must contain only letters, numbers, hyphens, slashes, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates the payer or customer name printed on a voucher.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_party_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "party name".to_string(),
        });
    }

    if name.chars().count() > MAX_PARTY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "party name".to_string(),
            max: MAX_PARTY_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("base", 0.0).is_ok());
        assert!(validate_amount("base", 16949.15).is_ok());

        assert_eq!(
            validate_amount("base", -0.01),
            Err(ValidationError::MustNotBeNegative {
                field: "base".to_string()
            })
        );
        assert_eq!(
            validate_amount("base", f64::NAN),
            Err(ValidationError::NotFinite {
                field: "base".to_string()
            })
        );
        assert!(validate_amount("base", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("CGST", 9.0).is_ok());
        assert!(validate_percentage("Surcharge", 150.0).is_ok());
        assert!(validate_percentage("TDS", -2.0).is_err());
        assert!(validate_percentage("Surcharge", 1500.0).is_ok());
        assert!(validate_percentage("CGST", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_line_name() {
        assert!(validate_line_name("CGST").is_ok());
        assert!(validate_line_name("").is_err());
        assert!(validate_line_name("   ").is_err());
        assert!(validate_line_name(&"X".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_voucher_number() {
        assert!(validate_voucher_number("PR-0001").is_ok());
        assert!(validate_voucher_number("INV/2024-25/17").is_ok());
        assert!(validate_voucher_number("rate_list_3").is_ok());

        assert!(validate_voucher_number("").is_err());
        assert!(validate_voucher_number("has space").is_err());
        assert!(validate_voucher_number(&"9".repeat(31)).is_err());
    }

    #[test]
    fn test_validate_party_name() {
        assert!(validate_party_name("Oceanic Shipping Pvt. Ltd.").is_ok());
        assert!(validate_party_name("").is_err());
        assert!(validate_party_name(&"A".repeat(201)).is_err());
    }
}
