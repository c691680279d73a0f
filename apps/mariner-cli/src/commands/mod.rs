//! # Subcommands
//!
//! One module per `mariner` subcommand. Every handler returns the text it
//! wants printed, so nothing reaches stdout unless the whole command
//! succeeded.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch + shared output helpers)
//! ├── words.rs    ◄─── mariner words
//! ├── totals.rs   ◄─── mariner totals
//! ├── voucher.rs  ◄─── mariner voucher
//! └── config.rs   ◄─── mariner config show | init | path
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► Cli (clap) ──► MarinerConfig::load ──► Context                │
//! │                                                     │                   │
//! │                                   ┌─────────────────┼──────────────┐    │
//! │                                   ▼                 ▼              ▼    │
//! │                              words::run       totals::run    voucher::run│
//! │                                   │                 │              │    │
//! │                                   └──────► mariner-core ◄──────────┘    │
//! │                                                     │                   │
//! │                              Ok(String) ──► stdout  │  Err ──► stderr   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod totals;
pub mod voucher;
pub mod words;

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::config::{MarinerConfig, OutputFormat};
use crate::error::CliResult;

/// What every handler gets to work with.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: MarinerConfig,
    /// `--config` as given, `None` for the platform default.
    pub config_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Context {
    /// `--json` wins over the configured output format.
    pub fn new(config: MarinerConfig, config_path: Option<PathBuf>, json: bool) -> Self {
        let output = if json {
            OutputFormat::Json
        } else {
            config.format.output
        };

        Context {
            config,
            config_path,
            output,
        }
    }
}

/// Runs the parsed subcommand and returns its rendered output.
pub fn execute(cli: &Cli, ctx: &Context) -> CliResult<String> {
    match &cli.command {
        Command::Words(args) => words::run(args, ctx),
        Command::Totals(args) => totals::run(args, ctx),
        Command::Voucher(args) => voucher::run(args, ctx),
        Command::Config(cmd) => config::run(cmd, ctx),
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
