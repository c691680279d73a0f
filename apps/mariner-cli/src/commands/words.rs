//! `mariner words <AMOUNT>`

use serde::Serialize;
use tracing::debug;

use mariner_core::{to_words_with, WordsStyle};

use super::{to_json, Context};
use crate::cli::{StyleArgs, WordsArgs};
use crate::config::{MarinerConfig, OutputFormat};
use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct WordsOutput<'a> {
    amount: f64,
    words: &'a str,
}

pub fn run(args: &WordsArgs, ctx: &Context) -> CliResult<String> {
    let style = resolve_style(&args.style, &ctx.config);
    debug!(amount = args.amount, prefix = ?style.currency_prefix, "Converting amount to words");

    let words = to_words_with(args.amount, &style)?;

    match ctx.output {
        OutputFormat::Text => Ok(words),
        OutputFormat::Json => to_json(&WordsOutput {
            amount: args.amount,
            words: &words,
        }),
    }
}

/// Flags first: `--currency CODE`, then `--prefix`, then `[format]`.
pub(crate) fn resolve_style(flags: &StyleArgs, config: &MarinerConfig) -> WordsStyle {
    match (&flags.currency, flags.prefix) {
        (Some(code), _) => WordsStyle::with_prefix(code.trim().to_uppercase()),
        (None, true) => WordsStyle::with_prefix(config.format.currency_code.clone()),
        (None, false) => config.words_style(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, ErrorCode};

    fn ctx(output: OutputFormat) -> Context {
        let mut config = MarinerConfig::default();
        config.format.output = output;
        Context::new(config, None, false)
    }

    fn args(amount: f64) -> WordsArgs {
        WordsArgs {
            amount,
            style: StyleArgs::default(),
        }
    }

    #[test]
    fn test_words_text() {
        let out = run(&args(12345678.0), &ctx(OutputFormat::Text)).unwrap();
        assert_eq!(
            out,
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
        );
    }

    #[test]
    fn test_words_json() {
        let out = run(&args(0.5), &ctx(OutputFormat::Json)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["amount"], 0.5);
        assert_eq!(json["words"], "Zero Rupees and Fifty Paise Only");
    }

    #[test]
    fn test_negative_amount_fails_without_output() {
        let err = run(&args(-5.0), &ctx(OutputFormat::Text)).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
    }

    #[test]
    fn test_style_resolution() {
        let mut config = MarinerConfig::default();
        let none = StyleArgs::default();
        assert_eq!(resolve_style(&none, &config), WordsStyle::default());

        let prefix = StyleArgs {
            prefix: true,
            currency: None,
        };
        assert_eq!(resolve_style(&prefix, &config), WordsStyle::with_prefix("INR"));

        let explicit = StyleArgs {
            prefix: false,
            currency: Some(" usd ".to_string()),
        };
        assert_eq!(resolve_style(&explicit, &config), WordsStyle::with_prefix("USD"));

        config.format.currency_prefix = true;
        assert_eq!(resolve_style(&none, &config), WordsStyle::with_prefix("INR"));
    }

    #[test]
    fn test_prefixed_words() {
        let mut a = args(100.0);
        a.style.prefix = true;
        let out = run(&a, &ctx(OutputFormat::Text)).unwrap();
        assert_eq!(out, "INR One Hundred Rupees Only");
    }
}
