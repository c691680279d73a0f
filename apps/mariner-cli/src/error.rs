//! # CLI Error Type
//!
//! Unified error type for every `mariner` subcommand.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in mariner                                │
//! │                                                                         │
//! │  Subcommand                                                             │
//! │  Result<String, CliError>                                               │
//! │         │                                                               │
//! │         ├── Config file unreadable? ─── CliError::Io / Toml ──┐         │
//! │         │                                                     │         │
//! │         ├── Bad amount or line? ─── CoreError ── CliError ────┤         │
//! │         │                                                     ▼         │
//! │         │                                  ErrorReport { code, message }│
//! │         │                                  printed on stderr, exit ≠ 0  │
//! │         ▼                                                               │
//! │  Success ──► rendered output on stdout                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed command prints nothing on stdout, so scripts never pick up a
//! half-rendered voucher.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use mariner_core::CoreError;

/// Errors raised by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Amount, totals or voucher input was rejected by the core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `config init` would overwrite an existing file.
    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    /// The platform has no config directory and no `--config` was given.
    #[error("No config path available; pass --config <PATH>")]
    NoConfigPath,

    /// File system error while reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// JSON output could not be produced.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

/// Machine-readable error codes for `--json` consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount could not be rendered in words.
    InvalidAmount,
    /// Totals or voucher input failed validation.
    ValidationError,
    /// Config file or values are unusable.
    ConfigError,
    /// Anything else (I/O, serialization).
    Internal,
}

impl CliError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Core(CoreError::InvalidAmount { .. }) => ErrorCode::InvalidAmount,
            CliError::Core(_) => ErrorCode::ValidationError,
            CliError::InvalidConfig(_)
            | CliError::ConfigExists(_)
            | CliError::NoConfigPath
            | CliError::ConfigParse(_)
            | CliError::ConfigSerialize(_) => ErrorCode::ConfigError,
            CliError::Io(_) | CliError::Json(_) => ErrorCode::Internal,
        }
    }

    /// Process exit status: 2 for rejected input, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::InvalidAmount | ErrorCode::ValidationError => 2,
            ErrorCode::ConfigError | ErrorCode::Internal => 1,
        }
    }
}

/// What a `--json` consumer receives on stderr when a command fails.
///
/// ```json
/// { "code": "INVALID_AMOUNT", "message": "Invalid amount -5: amount must not be negative" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&CliError> for ErrorReport {
    fn from(err: &CliError) -> Self {
        ErrorReport {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mariner_core::{compute_totals, to_words};

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: CliError = to_words(-5.0).unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
        assert_eq!(err.exit_code(), 2);

        let err: CliError = compute_totals(-1.0, &[]).unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_map_to_codes() {
        let err = CliError::ConfigExists(PathBuf::from("/tmp/config.toml"));
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Config file already exists: /tmp/config.toml (use --force to overwrite)"
        );
    }

    #[test]
    fn test_error_report_json() {
        let err: CliError = to_words(-5.0).unwrap_err().into();
        let json = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert_eq!(json["code"], "INVALID_AMOUNT");
        assert_eq!(json["message"], "Invalid amount -5: amount must not be negative");
    }
}
