//! # mariner-core: Pure Billing Logic for Mariner Back Office
//!
//! This crate holds the computation behind the institute's payment receipts,
//! sales vouchers and tax invoices, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Mariner Back Office Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end form wizards                       │   │
//! │  │   Party ──► Amount ──► GST / TDS ──► Preview ──► Print          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed bindings (ts-rs)                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ mariner-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   words   │  │  totals   │  │  voucher  │  │   │
//! │  │   │   Money   │  │ to_words  │  │ compute_  │  │  Voucher  │  │   │
//! │  │   │  TaxRate  │  │ lakh/crore│  │  totals   │  │  prepare  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Backend HTTP API (not in this repo)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in integer paise
//! - [`types`] - Tax rates, adjustment lines, totals
//! - [`words`] - Amount in words, Indian numbering (lakh, crore)
//! - [`totals`] - GST / TDS / flat adjustment calculator
//! - [`voucher`] - Receipt, sales voucher and tax invoice assembly
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use mariner_core::{compute_totals, to_words, AdjustmentLine};
//!
//! let totals = compute_totals(16949.15, &AdjustmentLine::gst_split(18.0)).unwrap();
//! assert_eq!(totals.net.to_string(), "₹19,999.99");
//!
//! let words = to_words(totals.net.to_f64()).unwrap();
//! assert_eq!(
//!     words,
//!     "Nineteen Thousand Nine Hundred Ninety Nine Rupees and Ninety Nine Paise Only"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;
pub mod voucher;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::compute_totals;
pub use types::*;
pub use voucher::{Voucher, VoucherDraft, VoucherKind};
pub use words::{integer_to_words, money_to_words, to_words, to_words_with, WordsStyle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest amount the back office is expected to print in words.
///
/// Larger amounts still convert. The words tests pin the spelling at
/// this bound.
pub const MAX_PRACTICAL_AMOUNT: f64 = 999_999_999.99;

/// Currency code used when a currency-prefixed style is requested
/// without naming a code.
pub const DEFAULT_CURRENCY_CODE: &str = "INR";
