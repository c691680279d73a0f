//! # mariner-cli
//!
//! Library half of the `mariner` binary. `main.rs` only calls [`run`]; the
//! rest lives here so it can be unit tested.
//!
//! ## Module Organization
//! ```text
//! mariner_cli/
//! ├── lib.rs          ◄─── You are here (startup, logging, error reporting)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── MarinerConfig (TOML + MARINER_* env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Context + dispatch
//! │   ├── words.rs    ◄─── mariner words
//! │   ├── totals.rs   ◄─── mariner totals
//! │   ├── voucher.rs  ◄─── mariner voucher
//! │   └── config.rs   ◄─── mariner config
//! └── error.rs        ◄─── CliError, ErrorReport
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap) ── usage errors exit 2 before anything else  │
//! │  2. Load config ── file, then MARINER_* env, then validate              │
//! │  3. Initialize logging ── RUST_LOG, else -v, else config log.level      │
//! │  4. Log the config notices held back during step 2                      │
//! │  5. Run the subcommand ── Ok(text) to stdout, Err to stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ConfigCommand};
use commands::Context;
use config::{LoadedConfig, MarinerConfig, OutputFormat};
use error::{CliError, CliResult, ErrorReport};

/// Runs the `mariner` command line and returns the process exit code.
///
/// On failure stderr carries only the error report, so `--json` callers
/// can parse it as one document.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => return report(&err, cli.json),
    };

    init_tracing(&loaded.config.log.level, cli.verbose);
    log_startup(&loaded);
    debug!(command = ?cli.command, "Starting");

    let ctx = Context::new(loaded.config, cli.config.clone(), cli.json);
    match commands::execute(&cli, &ctx) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_failure(&err);
            report(&err, ctx.output == OutputFormat::Json)
        }
    }
}

/// Loads the config a command needs.
///
/// `config init` and `config path` must work even when the existing file
/// is broken, so they fall back to defaults instead of failing.
pub fn load_config(cli: &Cli) -> CliResult<LoadedConfig> {
    match cli.command {
        Command::Config(ConfigCommand::Init { .. }) | Command::Config(ConfigCommand::Path) => {
            Ok(MarinerConfig::load_or_default(cli.config.clone()))
        }
        _ => MarinerConfig::load(cli.config.clone()),
    }
}

/// Logs what happened while loading config.
fn log_startup(loaded: &LoadedConfig) {
    match &loaded.source {
        Some(path) => debug!(?path, "Loaded config from file"),
        None => debug!("No config file, using defaults"),
    }

    for notice in &loaded.notices {
        notice.log();
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout stays
/// clean for scripts.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Overrides everything else
/// - `-v` / `-vv` - debug / trace for mariner crates
/// - Default: `[log] level` from config (warn)
fn init_tracing(config_level: &str, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config_level, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filter_directive(config_level: &str, verbose: u8) -> String {
    match verbose {
        0 => config_level.to_lowercase(),
        1 => format!("{},mariner_core=debug,mariner_cli=debug", config_level.to_lowercase()),
        _ => format!("{},mariner_core=trace,mariner_cli=trace", config_level.to_lowercase()),
    }
}

/// Debug-level record of a failed command.
fn log_failure(err: &CliError) {
    debug!(error = %err, code = ?err.code(), "Command failed");
}

/// Prints the error on stderr and maps it to an exit code.
fn report(err: &CliError, json: bool) -> ExitCode {
    eprintln!("{}", render_report(err, json));
    ExitCode::from(err.exit_code())
}

/// Renders the stderr text for a failed command.
fn render_report(err: &CliError, json: bool) -> String {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(&ErrorReport::from(err)) {
            return body;
        }
    }
    format!("error: {}", err)
}
