//! # Error Types
//!
//! Domain-specific error types for mariner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mariner-core errors (this file)                                       │
//! │  ├── CoreError        - Rejected amounts and totals inputs             │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  mariner-cli errors (separate crate)                                   │
//! │  └── CliError         - Config, I/O and argument failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → operator message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field or value in the message
//! 3. Errors are enum variants, never String
//! 4. Every failure happens before any computation, so no partial result leaks

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core computation errors.
///
/// Both the words converter and the totals calculator reject bad input up
/// front. Callers are expected to clamp or default empty form fields before
/// calling in; these errors surface as validation messages in the UI.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Amount cannot be rendered in words.
    ///
    /// ## When This Occurs
    /// - Amount is negative
    /// - Amount is NaN or infinite
    /// - Amount is too large to split into exact paise
    /// - A voucher's net total went negative
    #[error("Invalid amount {value}: {reason}")]
    InvalidAmount { value: f64, reason: String },

    /// Totals calculator input was rejected.
    ///
    /// ## When This Occurs
    /// - Negative or non-finite base amount
    /// - Negative or non-finite adjustment value
    /// - Adjustment line with an empty or oversized name
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn invalid_amount(value: f64, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., bad voucher number, bad adjustment line).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_amount(-5.0, "amount must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid amount -5: amount must not be negative"
        );

        let err = CoreError::invalid_input("base", "must not be negative");
        assert_eq!(err.to_string(), "Invalid input for base: must not be negative");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "party name".to_string(),
        };
        assert_eq!(err.to_string(), "party name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "CGST".to_string(),
        };
        assert_eq!(err.to_string(), "CGST must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "number".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
