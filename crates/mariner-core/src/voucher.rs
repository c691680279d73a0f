//! # Vouchers
//!
//! Assembles the figures printed on a payment receipt, sales voucher or
//! tax invoice from a wizard's collected inputs.
//!
//! ## Voucher Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wizard step 1: party + number + date ─┐                                │
//! │  Wizard step 2: base amount            ├──► VoucherDraft                │
//! │  Wizard step 3: CGST / SGST / TDS      ─┘         │                     │
//! │                                                   ▼                     │
//! │                                          Voucher::prepare()             │
//! │                                   ┌───────────────┼───────────────┐     │
//! │                                   ▼               ▼               ▼     │
//! │                              validation     compute_totals   to words  │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                   Voucher (sent to backend / printed)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisting the voucher and printing it belong to the surrounding
//! application. This module only produces the value.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::totals::compute_totals;
use crate::types::{AdjustmentLine, TotalsResult};
use crate::validation::{validate_party_name, validate_voucher_number};
use crate::words::{money_to_words, WordsStyle};

// =============================================================================
// Voucher Kind
// =============================================================================

/// The bookkeeping documents the back office issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VoucherKind {
    /// Acknowledges money received from a trainee or company.
    PaymentReceipt,
    /// Records a sale of course seats to a company.
    SalesVoucher,
    /// GST tax invoice.
    TaxInvoice,
}

impl VoucherKind {
    /// Heading printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            VoucherKind::PaymentReceipt => "Payment Receipt",
            VoucherKind::SalesVoucher => "Sales Voucher",
            VoucherKind::TaxInvoice => "Tax Invoice",
        }
    }
}

impl fmt::Display for VoucherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for VoucherKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "receipt" | "payment_receipt" | "payment-receipt" => Ok(VoucherKind::PaymentReceipt),
            "sales" | "sales_voucher" | "sales-voucher" => Ok(VoucherKind::SalesVoucher),
            "invoice" | "tax_invoice" | "tax-invoice" => Ok(VoucherKind::TaxInvoice),
            other => Err(ValidationError::InvalidFormat {
                field: "voucher kind".to_string(),
                reason: format!(
                    "unknown kind '{}'. Valid options: receipt, sales, invoice",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Everything the wizard has collected for one voucher.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoucherDraft {
    pub kind: VoucherKind,
    pub number: String,
    pub party_name: String,
    #[ts(as = "String")]
    pub issued_on: NaiveDate,
    /// Pre-tax amount in rupees as entered.
    pub base: f64,
    #[serde(default)]
    pub lines: Vec<AdjustmentLine>,
    #[serde(default)]
    pub style: WordsStyle,
}

// =============================================================================
// Voucher
// =============================================================================

/// A fully computed voucher, ready to be stored or printed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub kind: VoucherKind,
    /// Business identifier printed on the document.
    pub number: String,
    pub party_name: String,
    #[ts(as = "String")]
    pub issued_on: NaiveDate,
    pub totals: TotalsResult,
    /// Net total spelled out, e.g. "Nineteen Thousand ... Rupees Only".
    pub amount_in_words: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Voucher {
    /// Validates the draft and computes its totals and amount in words.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use mariner_core::types::AdjustmentLine;
    /// use mariner_core::voucher::{Voucher, VoucherDraft, VoucherKind};
    /// use mariner_core::words::WordsStyle;
    ///
    /// let draft = VoucherDraft {
    ///     kind: VoucherKind::TaxInvoice,
    ///     number: "INV/2024-25/0017".to_string(),
    ///     party_name: "Oceanic Shipping Pvt. Ltd.".to_string(),
    ///     issued_on: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
    ///     base: 16949.15,
    ///     lines: AdjustmentLine::gst_split(18.0).to_vec(),
    ///     style: WordsStyle::default(),
    /// };
    ///
    /// let voucher = Voucher::prepare(draft).unwrap();
    /// assert_eq!(voucher.totals.net.to_plain_string(), "19999.99");
    /// assert_eq!(
    ///     voucher.amount_in_words,
    ///     "Nineteen Thousand Nine Hundred Ninety Nine Rupees and Ninety Nine Paise Only"
    /// );
    /// ```
    ///
    /// ## Errors
    /// - `Validation` for a bad voucher number or party name
    /// - `InvalidInput` for a bad base or adjustment line
    /// - `InvalidAmount` when deductions leave a negative net
    pub fn prepare(draft: VoucherDraft) -> CoreResult<Self> {
        Self::prepare_at(draft, Utc::now())
    }

    /// Same as [`Voucher::prepare`] with an explicit creation timestamp.
    pub fn prepare_at(draft: VoucherDraft, created_at: DateTime<Utc>) -> CoreResult<Self> {
        validate_voucher_number(&draft.number)?;
        validate_party_name(&draft.party_name)?;

        let totals = compute_totals(draft.base, &draft.lines)?;
        let amount_in_words = money_to_words(totals.net, &draft.style)?;

        Ok(Voucher {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            number: draft.number.trim().to_string(),
            party_name: draft.party_name.trim().to_string(),
            issued_on: draft.issued_on,
            totals,
            amount_in_words,
            created_at,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Sign;

    fn draft() -> VoucherDraft {
        VoucherDraft {
            kind: VoucherKind::PaymentReceipt,
            number: " PR-0001 ".to_string(),
            party_name: "Capt. R. Menon".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            base: 25000.0,
            lines: vec![AdjustmentLine::tds(2.0)],
            style: WordsStyle::with_prefix("INR"),
        }
    }

    #[test]
    fn test_prepare_receipt() {
        let voucher = Voucher::prepare(draft()).unwrap();

        assert_eq!(voucher.kind, VoucherKind::PaymentReceipt);
        assert_eq!(voucher.number, "PR-0001");
        assert_eq!(voucher.totals.net.paise(), 2450000);
        assert_eq!(
            voucher.amount_in_words,
            "INR Twenty Four Thousand Five Hundred Rupees Only"
        );
        assert!(Uuid::parse_str(&voucher.id).is_ok());
    }

    #[test]
    fn test_prepare_at_uses_given_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-04-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let voucher = Voucher::prepare_at(draft(), at).unwrap();
        assert_eq!(voucher.created_at, at);
    }

    #[test]
    fn test_each_voucher_gets_fresh_id() {
        let a = Voucher::prepare(draft()).unwrap();
        let b = Voucher::prepare(draft()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.totals, b.totals);
    }

    #[test]
    fn test_invalid_header_rejected() {
        let mut bad = draft();
        bad.number = "PR 0001".to_string();
        assert!(matches!(Voucher::prepare(bad), Err(CoreError::Validation(_))));

        let mut bad = draft();
        bad.party_name = "   ".to_string();
        assert!(matches!(Voucher::prepare(bad), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_invalid_totals_rejected() {
        let mut bad = draft();
        bad.base = -100.0;
        assert!(matches!(Voucher::prepare(bad), Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn test_negative_net_cannot_be_worded() {
        let mut bad = draft();
        bad.base = 100.0;
        bad.lines = vec![AdjustmentLine::flat("Refund", 500.0, Sign::Subtract)];
        assert!(matches!(Voucher::prepare(bad), Err(CoreError::InvalidAmount { .. })));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("receipt".parse::<VoucherKind>().unwrap(), VoucherKind::PaymentReceipt);
        assert_eq!("Sales".parse::<VoucherKind>().unwrap(), VoucherKind::SalesVoucher);
        assert_eq!("tax-invoice".parse::<VoucherKind>().unwrap(), VoucherKind::TaxInvoice);
        assert!("ledger".parse::<VoucherKind>().is_err());
    }

    #[test]
    fn test_draft_from_front_end_json() {
        let json = r#"{
            "kind": "tax_invoice",
            "number": "INV-9",
            "party_name": "Harbour Logistics",
            "issued_on": "2024-07-01",
            "base": 1000,
            "lines": [
                {"name": "CGST", "kind": "percentage", "value": 9, "sign": "add"},
                {"name": "SGST", "kind": "percentage", "value": 9}
            ]
        }"#;

        let draft: VoucherDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.style, WordsStyle::default());

        let voucher = Voucher::prepare(draft).unwrap();
        assert_eq!(voucher.totals.net.paise(), 118000);
        assert_eq!(voucher.amount_in_words, "One Thousand One Hundred Eighty Rupees Only");
    }
}
