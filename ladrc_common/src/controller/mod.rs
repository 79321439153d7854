//! Controller shared types.
//!
//! Tuning parameters, the TOML file layout for a single control loop, and
//! the error taxonomy raised by the controller core.

pub mod config;
pub mod error;
pub mod params;
