//! # CLI Configuration
//!
//! Operator defaults for the `mariner` tool: currency code, tax rates and
//! log level.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --json, --prefix, --currency INR                                   │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MARINER_CGST_PERCENT=6                                             │
//! │     MARINER_OUTPUT=json                                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/mariner/config.toml (Linux)                              │
//! │     ~/Library/Application Support/in.mariner.mariner/config.toml       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     INR, CGST 9%, SGST 9%, IGST 18%, TDS 2%, text output               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [format]
//! currency_code = "INR"
//! currency_prefix = false   # print "INR One Hundred Rupees Only"
//! output = "text"           # text | json
//!
//! [tax]
//! cgst_percent = 9.0
//! sgst_percent = 9.0
//! igst_percent = 18.0
//! tds_percent = 2.0
//!
//! [log]
//! level = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

use mariner_core::validation::validate_percentage;
use mariner_core::{AdjustmentLine, WordsStyle, DEFAULT_CURRENCY_CODE};

use crate::error::{CliError, CliResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Highest rate accepted for the configured GST/TDS shortcuts. Ad-hoc
/// `--line` percentages are not bounded.
pub const MAX_CONFIGURED_PERCENT: f64 = 100.0;

// =============================================================================
// Output Format
// =============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable tables and sentences.
    #[default]
    Text,
    /// One pretty-printed JSON document per command.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Format Settings
// =============================================================================

/// How amounts are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSettings {
    /// ISO currency code used for prefixed words.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Prefix amount-in-words with the currency code by default.
    #[serde(default)]
    pub currency_prefix: bool,

    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            currency_code: default_currency_code(),
            currency_prefix: false,
            output: OutputFormat::default(),
        }
    }
}

// =============================================================================
// Tax Settings
// =============================================================================

/// Rates behind the `--gst`, `--igst` and `--tds` shortcuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSettings {
    #[serde(default = "default_cgst")]
    pub cgst_percent: f64,

    #[serde(default = "default_sgst")]
    pub sgst_percent: f64,

    /// Inter-state supplies charge IGST instead of CGST + SGST.
    #[serde(default = "default_igst")]
    pub igst_percent: f64,

    /// Deducted by the paying company; printed as a subtraction.
    #[serde(default = "default_tds")]
    pub tds_percent: f64,
}

fn default_cgst() -> f64 {
    9.0
}
fn default_sgst() -> f64 {
    9.0
}
fn default_igst() -> f64 {
    18.0
}
fn default_tds() -> f64 {
    2.0
}

impl Default for TaxSettings {
    fn default() -> Self {
        TaxSettings {
            cgst_percent: default_cgst(),
            sgst_percent: default_sgst(),
            igst_percent: default_igst(),
            tds_percent: default_tds(),
        }
    }
}

// =============================================================================
// Log Settings
// =============================================================================

/// Logging defaults. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Load Notices
// =============================================================================

/// A config problem that was worked around instead of failing the command.
///
/// Config is loaded before the log subscriber exists, so notices travel
/// with the loaded config and are logged once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNotice {
    /// A `MARINER_*` variable did not parse and was ignored.
    IgnoredOverride { key: &'static str, value: String },
    /// The config could not be loaded; defaults were used.
    UsedDefaults { reason: String },
}

impl ConfigNotice {
    /// Logs the notice at warn level.
    pub fn log(&self) {
        match self {
            ConfigNotice::IgnoredOverride { key, value } => {
                warn!(key, value = %value, "Ignoring unparseable environment override")
            }
            ConfigNotice::UsedDefaults { reason } => {
                warn!("Failed to load config: {}. Using defaults.", reason)
            }
        }
    }
}

impl fmt::Display for ConfigNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigNotice::IgnoredOverride { key, value } => {
                write!(f, "ignored {}={:?}", key, value)
            }
            ConfigNotice::UsedDefaults { reason } => write!(f, "using defaults: {}", reason),
        }
    }
}

/// Effective config plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: MarinerConfig,
    /// File the config was read from, if one existed.
    pub source: Option<PathBuf>,
    pub notices: Vec<ConfigNotice>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete `mariner` configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarinerConfig {
    #[serde(default)]
    pub format: FormatSettings,

    #[serde(default)]
    pub tax: TaxSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl MarinerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<LoadedConfig> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with overrides read through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> CliResult<LoadedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut source = None;

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                config = Self::from_file(&path)?;
                source = Some(path);
            }
        }

        let notices = config.apply_overrides(lookup);
        config.validate()?;

        Ok(LoadedConfig {
            config,
            source,
            notices,
        })
    }

    /// Loads config or returns defaults if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> LoadedConfig {
        Self::load(config_path).unwrap_or_else(|e| LoadedConfig {
            config: Self::default(),
            source: None,
            notices: vec![ConfigNotice::UsedDefaults {
                reason: e.to_string(),
            }],
        })
    }

    /// Reads and parses one config file without env overrides.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        let path = Self::resolve_path(config_path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        let code = &self.format.currency_code;
        if code.is_empty() || code.len() > 8 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CliError::InvalidConfig(format!(
                "currency_code must be 1-8 ASCII letters or digits, got: '{}'",
                code
            )));
        }

        let rates = [
            ("cgst_percent", self.tax.cgst_percent),
            ("sgst_percent", self.tax.sgst_percent),
            ("igst_percent", self.tax.igst_percent),
            ("tds_percent", self.tax.tds_percent),
        ];
        for (field, pct) in rates {
            validate_percentage(field, pct).map_err(|e| CliError::InvalidConfig(e.to_string()))?;
            if pct > MAX_CONFIGURED_PERCENT {
                return Err(CliError::InvalidConfig(format!(
                    "{} must not exceed {}%, got: {}",
                    field, MAX_CONFIGURED_PERCENT, pct
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(CliError::InvalidConfig(format!(
                "Unknown log level: '{}'. Valid options: {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Applies overrides from any key lookup. Unparseable values are
    /// ignored and returned as notices.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<ConfigNotice>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut notices = Vec::new();
        let mut ignore = |key: &'static str, value: String| {
            notices.push(ConfigNotice::IgnoredOverride { key, value });
        };

        if let Some(code) = lookup("MARINER_CURRENCY_CODE") {
            self.format.currency_code = code.trim().to_uppercase();
        }

        if let Some(prefix) = lookup("MARINER_CURRENCY_PREFIX") {
            match parse_bool(&prefix) {
                Some(flag) => self.format.currency_prefix = flag,
                None => ignore("MARINER_CURRENCY_PREFIX", prefix),
            }
        }

        if let Some(output) = lookup("MARINER_OUTPUT") {
            match output.parse() {
                Ok(parsed) => self.format.output = parsed,
                Err(_) => ignore("MARINER_OUTPUT", output),
            }
        }

        let rates: [(&'static str, &mut f64); 4] = [
            ("MARINER_CGST_PERCENT", &mut self.tax.cgst_percent),
            ("MARINER_SGST_PERCENT", &mut self.tax.sgst_percent),
            ("MARINER_IGST_PERCENT", &mut self.tax.igst_percent),
            ("MARINER_TDS_PERCENT", &mut self.tax.tds_percent),
        ];
        for (key, slot) in rates {
            if let Some(value) = lookup(key) {
                match value.trim().parse::<f64>() {
                    Ok(pct) => *slot = pct,
                    Err(_) => ignore(key, value),
                }
            }
        }

        if let Some(level) = lookup("MARINER_LOG_LEVEL") {
            self.log.level = level.trim().to_lowercase();
        }

        notices
    }

    /// Returns `config_path` or the platform default.
    pub fn resolve_path(config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        config_path
            .or_else(Self::default_config_path)
            .ok_or(CliError::NoConfigPath)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("in", "mariner", "mariner")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Words style from the `[format]` section.
    pub fn words_style(&self) -> WordsStyle {
        if self.format.currency_prefix {
            WordsStyle::with_prefix(self.format.currency_code.clone())
        } else {
            WordsStyle::default()
        }
    }

    /// CGST and SGST at the configured rates.
    pub fn gst_lines(&self) -> [AdjustmentLine; 2] {
        [
            AdjustmentLine::cgst(self.tax.cgst_percent),
            AdjustmentLine::sgst(self.tax.sgst_percent),
        ]
    }

    /// IGST at the configured rate.
    pub fn igst_line(&self) -> AdjustmentLine {
        AdjustmentLine::igst(self.tax.igst_percent)
    }

    /// TDS deduction at the configured rate.
    pub fn tds_line(&self) -> AdjustmentLine {
        AdjustmentLine::tds(self.tax.tds_percent)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
