//! TOML layout for a single LADRC control loop.
//!
//! ```toml
//! [logging]            # optional
//! level = "debug"
//! format = "text"
//!
//! [controller]
//! process_order = 1
//! nominal_gain = 2.0
//! controller_bandwidth = 10.0
//! observer_bandwidth = 50.0
//! initial_estimate = 0.0
//! cycle_time_us = 1000
//! diagnostic_dump = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::params::LadrcParameters;
use crate::config::{ConfigError, ConfigLoader, LoggingConfig};

/// Complete configuration for one control loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadrcConfig {
    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Controller tuning and timing.
    pub controller: LadrcParameters,
}

impl LadrcConfig {
    /// Validate the controller section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Load and validate a control loop configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LadrcConfig, ConfigError> {
    let config = LadrcConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a control loop configuration from a TOML string.
pub fn load_config_from_str(content: &str) -> Result<LadrcConfig, ConfigError> {
    let config = LadrcConfig::from_toml_str(content)?;
    config.validate()?;
    Ok(config)
}
