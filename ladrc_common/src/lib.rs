//! LADRC Common Library
//!
//! This crate provides shared constants, controller parameters, the error
//! taxonomy and configuration loading utilities for all LADRC workspace
//! crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Numeric limits and defaults
//! - [`config`] - Configuration loading traits and types
//! - [`controller`] - Controller parameters, config file layout and errors
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust,no_run
//! use ladrc_common::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = load_config(Path::new("ladrc.toml"))?;
//!     init_tracing(&config.logging);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod consts;
pub mod controller;
pub mod prelude;

use config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber described by `logging`.
///
/// `RUST_LOG` takes precedence over `logging.level` when set. Calling this
/// more than once is harmless: only the first subscriber is installed.
pub fn init_tracing(logging: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_directive()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true);

    let _ = match logging.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(
            builder.json().flatten_event(true).finish(),
        ),
    };
}
