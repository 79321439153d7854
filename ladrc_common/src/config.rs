//! Configuration file plumbing: error type, logging section and TOML loader.
//!
//! Every control loop reads one TOML file. The `[logging]` section is
//! optional and drives [`crate::init_tracing`]; the `[controller]` section is
//! described in [`crate::controller::config`].
//!
//! ```rust,no_run
//! use ladrc_common::config::{ConfigError, ConfigLoader, LoggingConfig};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct BenchLoop {
//!     #[serde(default)]
//!     logging: LoggingConfig,
//!     reference: f64,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let bench = BenchLoop::load(Path::new("bench.toml"))?;
//!     ladrc_common::init_tracing(&bench.logging);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure while reading or checking a configuration file.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// Unreadable file, bad TOML, unknown or missing field.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Well-formed file with out-of-domain values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Minimum severity that reaches the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-cycle detail.
    Trace,
    /// Construction summaries.
    Debug,
    /// Diagnostic dumps.
    #[default]
    Info,
    /// Questionable tuning such as poor bandwidth separation.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Line format of the log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record, for log collectors.
    Json,
}

/// `[logging]` section. Both keys are optional.
///
/// ```toml
/// [logging]
/// level = "debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` overrides it.
    #[serde(default)]
    pub level: LogLevel,

    /// Record format.
    #[serde(default)]
    pub format: LogFormat,
}

/// TOML loading for any deserializable configuration type.
///
/// - `ConfigError::FileNotFound` if the file does not exist
/// - `ConfigError::ParseError` for I/O failures and TOML or schema errors
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Parse from TOML text.
    fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Read and parse a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound,
            _ => ConfigError::ParseError(e.to_string()),
        })?;
        Self::from_toml_str(&content)
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
