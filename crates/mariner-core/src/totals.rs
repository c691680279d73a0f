//! # Invoice Totals
//!
//! Computes adjustment amounts and the net total for receipts, sales
//! vouchers and tax invoices.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base ₹16,949.15                                                        │
//! │    │                                                                    │
//! │    ├──► CGST 9%  = base × 9%  = ₹1,525.42  (+)                          │
//! │    ├──► SGST 9%  = base × 9%  = ₹1,525.42  (+)    every percentage is   │
//! │    └──► TDS  2%  = base × 2%  = ₹338.98    (-)    taken from the base,  │
//! │                                                   never a running total │
//! │                                                                         │
//! │  net = base + Σ signed rounded amounts = ₹19,661.01                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each line amount is rounded half-up to the paise before it is summed,
//! so the figures printed on a voucher always add up to its net.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{AdjustmentKind, AdjustmentLine, TaxRate, TotalsLine, TotalsResult};
use crate::validation::{validate_amount, validate_line_name};

/// Computes each adjustment and the net total.
///
/// Lines are applied in the given order and the output keeps that order.
///
/// ## Example
/// ```rust
/// use mariner_core::totals::compute_totals;
/// use mariner_core::types::AdjustmentLine;
///
/// let totals = compute_totals(
///     16949.15,
///     &[AdjustmentLine::cgst(9.0), AdjustmentLine::sgst(9.0)],
/// )
/// .unwrap();
///
/// assert_eq!(totals.lines[0].amount.to_plain_string(), "1525.42");
/// assert_eq!(totals.lines[1].amount.to_plain_string(), "1525.42");
/// assert_eq!(totals.net.to_plain_string(), "19999.99");
/// ```
///
/// ## Errors
/// [`CoreError::InvalidInput`] when the base or any line value is negative
/// or non-finite, or a line name is empty. Every line is checked before a
/// result is built, so a failure never yields partial totals.
pub fn compute_totals(base: f64, lines: &[AdjustmentLine]) -> CoreResult<TotalsResult> {
    let base_money = Money::try_from_rupees_f64(base).map_err(|e| input_error("base", e))?;

    let lines = lines
        .iter()
        .map(|line| compute_line(base_money, line))
        .collect::<CoreResult<Vec<_>>>()?;

    let net = lines
        .iter()
        .fold(base_money, |net, line| net + line.sign.apply(line.amount));

    Ok(TotalsResult {
        base: base_money,
        lines,
        net,
    })
}

fn compute_line(base: Money, line: &AdjustmentLine) -> CoreResult<TotalsLine> {
    validate_line_name(&line.name).map_err(|e| input_error("adjustment name", e))?;

    let amount = match line.kind {
        AdjustmentKind::Percentage => {
            let rate = TaxRate::try_from_percentage(line.value)
                .map_err(|e| input_error(&line.name, e))?;
            base.checked_percentage(rate).ok_or_else(|| {
                CoreError::invalid_input(&line.name, "amount is too large to represent in paise")
            })?
        }
        AdjustmentKind::FlatAmount => {
            validate_amount(&line.name, line.value).map_err(|e| input_error(&line.name, e))?;
            Money::try_from_rupees_f64(line.value).map_err(|e| input_error(&line.name, e))?
        }
    };

    Ok(TotalsLine {
        name: line.name.trim().to_string(),
        amount,
        sign: line.sign,
    })
}

fn input_error(field: &str, err: ValidationError) -> CoreError {
    CoreError::invalid_input(field, err.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sign;

    #[test]
    fn test_default_invoice_example() {
        let totals = compute_totals(
            16949.15,
            &[AdjustmentLine::cgst(9.0), AdjustmentLine::sgst(9.0)],
        )
        .unwrap();

        assert_eq!(totals.base.paise(), 1694915);
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[0].name, "CGST");
        assert_eq!(totals.lines[0].amount.paise(), 152542);
        assert_eq!(totals.lines[1].name, "SGST");
        assert_eq!(totals.lines[1].amount.paise(), 152542);
        // Rounded lines are summed: 16949.15 + 1525.42 + 1525.42
        assert_eq!(totals.net.paise(), 1999999);
    }

    #[test]
    fn test_empty_lines_returns_base() {
        let totals = compute_totals(20000.0, &[]).unwrap();
        assert!(totals.lines.is_empty());
        assert_eq!(totals.net, totals.base);
        assert_eq!(totals.net.paise(), 2000000);
    }

    #[test]
    fn test_percentages_do_not_compound() {
        let totals = compute_totals(
            10000.0,
            &[
                AdjustmentLine::cgst(9.0),
                AdjustmentLine::sgst(9.0),
                AdjustmentLine::tds(2.0),
            ],
        )
        .unwrap();

        assert_eq!(totals.lines[0].amount.paise(), 90000);
        assert_eq!(totals.lines[1].amount.paise(), 90000);
        // TDS is 2% of the gross base, not of base + GST
        assert_eq!(totals.lines[2].amount.paise(), 20000);
        assert_eq!(totals.lines[2].sign, Sign::Subtract);
        assert_eq!(totals.net.paise(), 1160000);
        assert_eq!(totals.total_added().paise(), 180000);
        assert_eq!(totals.total_subtracted().paise(), 20000);
    }

    #[test]
    fn test_flat_amounts_used_verbatim() {
        let totals = compute_totals(
            5000.0,
            &[
                AdjustmentLine::flat("Freight", 250.5, Sign::Add),
                AdjustmentLine::flat("Discount", 100.0, Sign::Subtract),
            ],
        )
        .unwrap();

        assert_eq!(totals.line("Freight").unwrap().amount.paise(), 25050);
        assert_eq!(totals.line("Discount").unwrap().amount.paise(), 10000);
        assert_eq!(totals.net.paise(), 515050);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let totals = compute_totals(
            1000.0,
            &[
                AdjustmentLine::tds(1.0),
                AdjustmentLine::flat("Courier", 40.0, Sign::Add),
                AdjustmentLine::igst(18.0),
            ],
        )
        .unwrap();

        let names: Vec<&str> = totals.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["TDS", "Courier", "IGST"]);
    }

    #[test]
    fn test_deductions_may_push_net_below_zero() {
        let totals = compute_totals(
            100.0,
            &[AdjustmentLine::flat("Advance adjusted", 150.0, Sign::Subtract)],
        )
        .unwrap();
        assert_eq!(totals.net.paise(), -5000);
    }

    #[test]
    fn test_negative_base_rejected() {
        let result = compute_totals(-1.0, &[AdjustmentLine::cgst(9.0)]);
        assert!(matches!(result, Err(CoreError::InvalidInput { ref field, .. }) if field == "base"));
    }

    #[test]
    fn test_negative_line_value_rejected() {
        let result = compute_totals(
            1000.0,
            &[
                AdjustmentLine::cgst(9.0),
                AdjustmentLine::flat("Freight", -10.0, Sign::Add),
            ],
        );
        assert!(matches!(result, Err(CoreError::InvalidInput { ref field, .. }) if field == "Freight"));

        let result = compute_totals(1000.0, &[AdjustmentLine::percentage("TDS", -2.0, Sign::Subtract)]);
        assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        assert!(compute_totals(f64::NAN, &[]).is_err());
        assert!(compute_totals(f64::INFINITY, &[]).is_err());
        assert!(compute_totals(100.0, &[AdjustmentLine::cgst(f64::NAN)]).is_err());
    }

    #[test]
    fn test_blank_line_name_rejected() {
        let result = compute_totals(100.0, &[AdjustmentLine::flat("  ", 10.0, Sign::Add)]);
        assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_base_gives_zero_percentages() {
        let totals = compute_totals(0.0, &AdjustmentLine::gst_split(18.0)).unwrap();
        assert!(totals.lines.iter().all(|l| l.amount.is_zero()));
        assert!(totals.net.is_zero());
    }

    #[test]
    fn test_half_paise_rounds_up() {
        // ₹10.50 × 5% = 52.5 paise → 53 paise
        let totals = compute_totals(10.5, &[AdjustmentLine::percentage("Cess", 5.0, Sign::Add)]).unwrap();
        assert_eq!(totals.lines[0].amount.paise(), 53);
        assert_eq!(totals.net.paise(), 1103);
    }

    #[test]
    fn test_fractional_rates_are_not_rounded_to_basis_points() {
        let totals = compute_totals(
            1_000_000.0,
            &[AdjustmentLine::percentage("Cess", 33.333, Sign::Add)],
        )
        .unwrap();
        assert_eq!(totals.lines[0].amount.to_plain_string(), "333330.00");
        assert_eq!(totals.net.to_plain_string(), "1333330.00");

        let totals = compute_totals(
            1_000_000.0,
            &[AdjustmentLine::percentage("Cess", 0.005, Sign::Add)],
        )
        .unwrap();
        assert_eq!(totals.lines[0].amount.paise(), 5000);
    }

    #[test]
    fn test_sub_paise_fraction_rounds_half_up() {
        // ₹1.00 × 0.125% = 0.125 paise → 0; ₹4.00 × 0.125% = 0.5 paise → 1
        let levy = |base| compute_totals(base, &[AdjustmentLine::percentage("Levy", 0.125, Sign::Add)]);
        assert_eq!(levy(1.0).unwrap().lines[0].amount.paise(), 0);
        assert_eq!(levy(4.0).unwrap().lines[0].amount.paise(), 1);
    }

    #[test]
    fn test_percentages_above_hundred_are_accepted() {
        let totals = compute_totals(
            100.0,
            &[AdjustmentLine::percentage("Surcharge", 1500.0, Sign::Add)],
        )
        .unwrap();
        assert_eq!(totals.lines[0].amount.to_plain_string(), "1500.00");
        assert_eq!(totals.net.to_plain_string(), "1600.00");
    }

    #[test]
    fn test_unrepresentable_line_amount_rejected() {
        let result = compute_totals(
            1_000_000.0,
            &[AdjustmentLine::percentage("Surcharge", 1e20, Sign::Add)],
        );
        assert!(matches!(result, Err(CoreError::InvalidInput { ref field, .. }) if field == "Surcharge"));
    }

    #[test]
    fn test_totals_json_shape() {
        let totals = compute_totals(100.0, &[AdjustmentLine::tds(2.0)]).unwrap();
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["base"], 10000);
        assert_eq!(json["lines"][0]["name"], "TDS");
        assert_eq!(json["lines"][0]["amount"], 200);
        assert_eq!(json["lines"][0]["sign"], "subtract");
        assert_eq!(json["net"], 9800);
    }
}
