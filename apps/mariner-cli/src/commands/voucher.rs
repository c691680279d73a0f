//! `mariner voucher --kind <KIND> --number <N> --party <NAME> <BASE>`

use chrono::Local;
use tracing::info;

use mariner_core::{Voucher, VoucherDraft};

use super::totals::{collect_lines, render_totals};
use super::words::resolve_style;
use super::{to_json, Context};
use crate::cli::VoucherArgs;
use crate::config::OutputFormat;
use crate::error::CliResult;

pub fn run(args: &VoucherArgs, ctx: &Context) -> CliResult<String> {
    let draft = build_draft(args, ctx);
    let voucher = Voucher::prepare(draft)?;

    info!(
        id = %voucher.id,
        kind = %voucher.kind,
        number = %voucher.number,
        net = %voucher.totals.net,
        "Voucher prepared"
    );

    match ctx.output {
        OutputFormat::Text => Ok(render_voucher(&voucher)),
        OutputFormat::Json => to_json(&voucher),
    }
}

fn build_draft(args: &VoucherArgs, ctx: &Context) -> VoucherDraft {
    VoucherDraft {
        kind: args.kind,
        number: args.number.clone(),
        party_name: args.party.clone(),
        issued_on: args.date.unwrap_or_else(|| Local::now().date_naive()),
        base: args.totals.base,
        lines: collect_lines(&args.totals, &ctx.config),
        style: resolve_style(&args.style, &ctx.config),
    }
}

/// Header, totals table and the amount in words.
pub(crate) fn render_voucher(voucher: &Voucher) -> String {
    format!(
        "{title}\nNo.   {number}\nDate  {date}\nTo    {party}\n\n{table}\n\nAmount in words: {words}",
        title = voucher.kind.title(),
        number = voucher.number,
        date = voucher.issued_on.format("%d-%m-%Y"),
        party = voucher.party_name,
        table = render_totals(&voucher.totals),
        words = voucher.amount_in_words,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{StyleArgs, TotalsArgs};
    use crate::config::MarinerConfig;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use mariner_core::{AdjustmentLine, Sign, VoucherKind};

    fn args() -> VoucherArgs {
        VoucherArgs {
            kind: VoucherKind::TaxInvoice,
            number: "INV/2024-25/0017".to_string(),
            party: "Oceanic Shipping Pvt. Ltd.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1),
            totals: TotalsArgs {
                base: 16949.15,
                lines: Vec::new(),
                gst: true,
                igst: false,
                tds: false,
            },
            style: StyleArgs::default(),
        }
    }

    fn ctx(json: bool) -> Context {
        Context::new(MarinerConfig::default(), None, json)
    }

    #[test]
    fn test_tax_invoice_text() {
        let out = run(&args(), &ctx(false)).unwrap();

        assert!(out.starts_with("Tax Invoice\nNo.   INV/2024-25/0017\nDate  01-07-2024\n"));
        assert!(out.contains("To    Oceanic Shipping Pvt. Ltd."));
        assert!(out.contains("Net                           ₹19,999.99"));
        assert!(out.ends_with(
            "Amount in words: Nineteen Thousand Nine Hundred Ninety Nine Rupees and Ninety Nine Paise Only"
        ));
    }

    #[test]
    fn test_receipt_json() {
        let mut a = args();
        a.kind = VoucherKind::PaymentReceipt;
        a.totals.base = 25000.0;
        a.totals.gst = false;
        a.totals.tds = true;
        a.style.prefix = true;

        let out = run(&a, &ctx(true)).unwrap();
        let voucher: Voucher = serde_json::from_str(&out).unwrap();

        assert_eq!(voucher.kind, VoucherKind::PaymentReceipt);
        assert_eq!(voucher.totals.net.paise(), 2450000);
        assert_eq!(
            voucher.amount_in_words,
            "INR Twenty Four Thousand Five Hundred Rupees Only"
        );
    }

    #[test]
    fn test_date_defaults_to_today() {
        let mut a = args();
        a.date = None;

        let before = Local::now().date_naive();
        let draft = build_draft(&a, &ctx(false));
        let after = Local::now().date_naive();
        assert!(draft.issued_on == before || draft.issued_on == after);
    }

    #[test]
    fn test_bad_voucher_number() {
        let mut a = args();
        a.number = "INV 17".to_string();

        let err = run(&a, &ctx(false)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_negative_net_cannot_be_issued() {
        let mut a = args();
        a.totals.gst = false;
        a.totals.base = 100.0;
        a.totals.lines = vec![AdjustmentLine::flat("Refund", 500.0, Sign::Subtract)];

        let err = run(&a, &ctx(false)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
    }
}
