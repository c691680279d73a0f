//! Command-line definitions for `mariner`.

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use mariner_core::{AdjustmentLine, VoucherKind};

#[derive(Debug, Parser)]
#[command(name = "mariner", version)]
#[command(about = "Amounts in words, GST/TDS totals and vouchers for the back office")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Spell an amount in words, Indian numbering
    Words(WordsArgs),
    /// Apply GST, TDS and flat adjustments to a base amount
    Totals(TotalsArgs),
    /// Prepare a receipt, sales voucher or tax invoice
    Voucher(VoucherArgs),
    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Amount in rupees, e.g. 1234.50
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Currency prefix flags shared by `words` and `voucher`.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Prefix the words with the configured currency code
    #[arg(long)]
    pub prefix: bool,

    /// Prefix the words with this currency code (implies --prefix)
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,
}

#[derive(Debug, Args)]
pub struct TotalsArgs {
    /// Pre-tax amount in rupees
    #[arg(allow_negative_numbers = true)]
    pub base: f64,

    /// Adjustment line NAME:VALUE[%][:+|-], e.g. CGST:9% or Discount:500:-
    #[arg(short, long = "line", value_name = "LINE")]
    pub lines: Vec<AdjustmentLine>,

    /// Add CGST and SGST at the configured rates
    #[arg(long, conflicts_with = "igst")]
    pub gst: bool,

    /// Add IGST at the configured rate
    #[arg(long)]
    pub igst: bool,

    /// Deduct TDS at the configured rate
    #[arg(long)]
    pub tds: bool,
}

#[derive(Debug, Args)]
pub struct VoucherArgs {
    /// receipt, sales or invoice
    #[arg(long, value_name = "KIND")]
    pub kind: VoucherKind,

    /// Voucher number, e.g. INV/2024-25/0017
    #[arg(long)]
    pub number: String,

    /// Party the voucher is issued to
    #[arg(long)]
    pub party: String,

    /// Issue date (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub totals: TotalsArgs,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use mariner_core::Sign;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_words() {
        let cli = parse(&["mariner", "words", "1234.5", "--currency", "USD"]);
        match cli.command {
            Command::Words(args) => {
                assert_eq!(args.amount, 1234.5);
                assert_eq!(args.style.currency.as_deref(), Some("USD"));
                assert!(!args.style.prefix);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_reaches_command() {
        let cli = parse(&["mariner", "words", "-5"]);
        assert!(matches!(cli.command, Command::Words(ref a) if a.amount == -5.0));
    }

    #[test]
    fn test_parse_totals_lines() {
        let cli = parse(&[
            "mariner", "totals", "16949.15", "--gst", "-l", "Freight:250", "--line", "TDS:2%:-",
            "--json",
        ]);
        assert!(cli.json);

        let Command::Totals(args) = cli.command else {
            panic!("expected totals");
        };
        assert_eq!(args.base, 16949.15);
        assert!(args.gst);
        assert!(!args.tds);
        assert_eq!(args.lines.len(), 2);
        assert_eq!(args.lines[0], AdjustmentLine::flat("Freight", 250.0, Sign::Add));
        assert_eq!(args.lines[1], AdjustmentLine::tds(2.0));
    }

    #[test]
    fn test_malformed_line_is_a_usage_error() {
        let result = Cli::try_parse_from(["mariner", "totals", "100", "--line", "CGST"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_gst_and_igst_conflict() {
        let result = Cli::try_parse_from(["mariner", "totals", "100", "--gst", "--igst"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_voucher() {
        let cli = parse(&[
            "mariner", "voucher", "--kind", "invoice", "--number", "INV-1", "--party",
            "Harbour Logistics", "--date", "2024-07-01", "1000", "--gst", "--prefix",
        ]);

        let Command::Voucher(args) = cli.command else {
            panic!("expected voucher");
        };
        assert_eq!(args.kind, VoucherKind::TaxInvoice);
        assert_eq!(args.number, "INV-1");
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(args.totals.base, 1000.0);
        assert!(args.totals.gst);
        assert!(args.style.prefix);
    }

    #[test]
    fn test_parse_config_commands() {
        let cli = parse(&["mariner", "config", "init", "--force", "--config", "/tmp/m.toml"]);
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Init { force: true })));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/m.toml")));

        let cli = parse(&["mariner", "-vv", "config", "show"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Show)));
    }
}
