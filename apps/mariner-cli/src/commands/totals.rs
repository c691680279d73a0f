//! `mariner totals <BASE>`
//!
//! Line order on the printout: `--gst` / `--igst` first, then each
//! `--line` in the order given, then `--tds`.

use tracing::{debug, info};

use mariner_core::{compute_totals, AdjustmentLine, TotalsResult};

use super::{to_json, Context};
use crate::cli::TotalsArgs;
use crate::config::{MarinerConfig, OutputFormat};
use crate::error::CliResult;

const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 16;

pub fn run(args: &TotalsArgs, ctx: &Context) -> CliResult<String> {
    let lines = collect_lines(args, &ctx.config);
    debug!(base = args.base, lines = lines.len(), "Computing totals");

    let totals = compute_totals(args.base, &lines)?;
    info!(net = %totals.net, "Totals computed");

    match ctx.output {
        OutputFormat::Text => Ok(render_totals(&totals)),
        OutputFormat::Json => to_json(&totals),
    }
}

/// Expands the preset flags around the explicit `--line` values.
pub(crate) fn collect_lines(args: &TotalsArgs, config: &MarinerConfig) -> Vec<AdjustmentLine> {
    let mut lines = Vec::with_capacity(args.lines.len() + 3);

    if args.gst {
        lines.extend(config.gst_lines());
    }
    if args.igst {
        lines.push(config.igst_line());
    }
    lines.extend(args.lines.iter().cloned());
    if args.tds {
        lines.push(config.tds_line());
    }

    lines
}

/// Renders the totals as a fixed-width table.
///
/// ```text
/// Base                          ₹16,949.15
/// + CGST                         ₹1,525.42
/// + SGST                         ₹1,525.42
/// ────────────────────────────────────────
/// Net                           ₹19,999.99
/// ```
pub(crate) fn render_totals(totals: &TotalsResult) -> String {
    let mut rows = Vec::with_capacity(totals.lines.len() + 3);

    rows.push(row("Base", &totals.base.to_string()));
    for line in &totals.lines {
        let label = format!("{} {}", line.sign.symbol(), line.name);
        rows.push(row(&label, &line.amount.to_string()));
    }
    rows.push("─".repeat(LABEL_WIDTH + AMOUNT_WIDTH));
    rows.push(row("Net", &totals.net.to_string()));

    rows.join("\n")
}

fn row(label: &str, amount: &str) -> String {
    format!(
        "{:<label_w$}{:>amount_w$}",
        label,
        amount,
        label_w = LABEL_WIDTH,
        amount_w = AMOUNT_WIDTH
    )
}
