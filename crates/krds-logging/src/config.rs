// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and file path configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// `tracing::Level` as it appears in `krds.toml` and `KRDS_LOG`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(pub Level);

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_log_level(s).map(LogLevel)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.0.as_str().to_ascii_lowercase()
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

/// Main configuration structure for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,

    /// Output configuration
    pub output: OutputConfig,

    /// File logging configuration
    pub file: FileConfig,
}

/// Configuration for different output targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable console output (written to stderr, stdout carries artifacts)
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON structured output
    pub json: bool,

    /// Pretty-print console output (vs compact)
    pub pretty_console: bool,
}

/// Configuration for file logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to log file (defaults to ~/.config/krds/krds.log)
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::WARN),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Raise the global level for `-v` flags; never lowers a configured level
    pub fn raise_for_verbosity(&mut self, verbosity: u8) {
        let requested = match verbosity {
            0 => return,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _3_or_more => Level::TRACE,
        };
        // tracing orders levels by verbosity: TRACE > ERROR
        if requested > self.level.0 {
            self.level = LogLevel(requested);
        }
    }

    /// Apply environment variable overrides to this configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Check KRDS_LOG first, then RUST_LOG
        if let Some(level_str) = lookup("KRDS_LOG") {
            self.level = level_str.parse().context("Invalid KRDS_LOG level")?;
        } else if let Some(directives) = lookup("RUST_LOG") {
            self.apply_directives(&directives)?;
        }

        if lookup("KRDS_LOG_JSON").is_some() {
            self.output.json = true;
        }

        if lookup("KRDS_LOG_NO_CONSOLE").is_some() {
            self.output.console = false;
        }

        if let Some(path) = lookup("KRDS_LOG_FILE") {
            self.output.file = true;
            if !path.is_empty() {
                self.file.path = PathBuf::from(path);
            }
        }

        Ok(())
    }

    /// `RUST_LOG` style directives, e.g. `info,krds_components=trace`
    fn apply_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }

            if let Some((module, level_str)) = directive.split_once('=') {
                let level = level_str
                    .parse()
                    .with_context(|| format!("Invalid log level '{level_str}' for '{module}'"))?;
                self.module_levels.insert(module.to_string(), level);
            } else {
                self.level = directive
                    .parse()
                    .with_context(|| format!("Invalid global log level '{directive}'"))?;
            }
        }
        Ok(())
    }
}

/// Get the default log file path: ~/.config/krds/krds.log
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("krds").join("krds.log")
    } else {
        PathBuf::from("krds.log")
    }
}

/// Parse a log level string (case-insensitive).
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ),
    }
}
