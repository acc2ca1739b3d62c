//! Runtime configuration read from environment variables.
//!
//! - `FLINK_TYPES_LOG_LEVEL`: default filter when `RUST_LOG` is unset (default: info)
//! - `FLINK_TYPES_LOG_FORMAT`: `text` or `json` (default: text)
//! - `FLINK_TYPES_PRETTY`: pretty-print JSON output (default: true)

use anyhow::{Result, anyhow};
use std::env;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub pretty_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            pretty_output: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unknown or empty values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("FLINK_TYPES_LOG_LEVEL")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.log_level);

        let log_format = match lookup("FLINK_TYPES_LOG_FORMAT")
            .map(|format| format.trim().to_lowercase())
            .as_deref()
        {
            Some("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        let pretty_output = match lookup("FLINK_TYPES_PRETTY")
            .map(|value| value.trim().to_lowercase())
            .as_deref()
        {
            Some("0") | Some("false") | Some("no") => false,
            Some("1") | Some("true") | Some("yes") => true,
            _ => defaults.pretty_output,
        };

        Self {
            log_level,
            log_format,
            pretty_output,
        }
    }

    /// `RUST_LOG` when set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_tracing(&self) -> Result<()> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(false);

        let result = match self.log_format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Text => builder.try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
    }
}
