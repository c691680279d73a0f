//! `mariner config show | init | path`

use tracing::info;

use super::{to_json, Context};
use crate::cli::ConfigCommand;
use crate::config::{MarinerConfig, OutputFormat};
use crate::error::{CliError, CliResult};

pub fn run(cmd: &ConfigCommand, ctx: &Context) -> CliResult<String> {
    match cmd {
        ConfigCommand::Show => match ctx.output {
            OutputFormat::Text => Ok(toml::to_string_pretty(&ctx.config)?),
            OutputFormat::Json => to_json(&ctx.config),
        },
        ConfigCommand::Init { force } => init(ctx, *force),
        ConfigCommand::Path => {
            let path = MarinerConfig::resolve_path(ctx.config_path.clone())?;
            Ok(path.display().to_string())
        }
    }
}

fn init(ctx: &Context, force: bool) -> CliResult<String> {
    let path = MarinerConfig::resolve_path(ctx.config_path.clone())?;

    if path.exists() && !force {
        return Err(CliError::ConfigExists(path));
    }

    let saved = MarinerConfig::default().save(Some(path))?;
    info!(path = ?saved, force, "Default config written");

    Ok(format!("Wrote {}", saved.display()))
}
