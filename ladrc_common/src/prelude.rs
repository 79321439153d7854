//! Prelude module for common re-exports.
//!
//! ```rust
//! use ladrc_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::{LogFormat, LogLevel, LoggingConfig};
pub use crate::init_tracing;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader};
pub use crate::controller::config::{LadrcConfig, load_config, load_config_from_str};

// ─── Controller ─────────────────────────────────────────────────────
pub use crate::controller::error::{LadrcError, LadrcResult};
pub use crate::controller::params::LadrcParameters;

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{CYCLE_TIME_US, MAX_EXTENDED_ORDER, MAX_PROCESS_ORDER};
