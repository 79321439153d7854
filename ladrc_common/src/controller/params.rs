//! Controller tuning parameters.
//!
//! Four tuning parameters (`nx`, `b0`, `wc`, `wo`) fully determine the gains
//! and state-space matrices. The sampling interval is explicit: the observer
//! integration step `h` is derived from `cycle_time_us`, so the observer's
//! time base always matches the declared loop cadence.

use serde::{Deserialize, Serialize};

use super::error::{LadrcError, LadrcResult};
use crate::consts::{
    CYCLE_TIME_US, CYCLE_TIME_US_MAX, CYCLE_TIME_US_MIN, MAX_PROCESS_ORDER, RK4_STABILITY_LIMIT,
};

/// Tuning and timing parameters for one LADRC instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LadrcParameters {
    /// Order of the dominant plant dynamics (`nx`, 1..=`MAX_PROCESS_ORDER`).
    pub process_order: usize,
    /// Estimated process input gain (`b0`, nonzero).
    pub nominal_gain: f64,
    /// Closed-loop bandwidth [rad/s] (`wc`); controller poles at `-wc`.
    pub controller_bandwidth: f64,
    /// Observer bandwidth [rad/s] (`wo`); observer poles at `-wo`.
    pub observer_bandwidth: f64,
    /// Seed for the first extended-state component `z[0]`.
    #[serde(default)]
    pub initial_estimate: f64,
    /// Sampling interval [µs]; the observer step is `cycle_time_us · 1e-6` s.
    #[serde(default = "default_cycle_time_us")]
    pub cycle_time_us: u32,
    /// Log the constructed gains and matrices when the controller is built.
    #[serde(default)]
    pub diagnostic_dump: bool,
}

fn default_cycle_time_us() -> u32 {
    CYCLE_TIME_US
}

impl LadrcParameters {
    /// Parameters with a zero initial estimate, the default 1 kHz cycle and
    /// no diagnostic dump.
    pub fn new(
        process_order: usize,
        nominal_gain: f64,
        controller_bandwidth: f64,
        observer_bandwidth: f64,
    ) -> Self {
        Self {
            process_order,
            nominal_gain,
            controller_bandwidth,
            observer_bandwidth,
            initial_estimate: 0.0,
            cycle_time_us: CYCLE_TIME_US,
            diagnostic_dump: false,
        }
    }

    /// Set the seed for `z[0]`.
    pub fn with_initial_estimate(mut self, initial_estimate: f64) -> Self {
        self.initial_estimate = initial_estimate;
        self
    }

    /// Set the sampling interval [µs].
    pub fn with_cycle_time_us(mut self, cycle_time_us: u32) -> Self {
        self.cycle_time_us = cycle_time_us;
        self
    }

    /// Enable or disable the construction-time matrix dump.
    pub fn with_diagnostic_dump(mut self, enabled: bool) -> Self {
        self.diagnostic_dump = enabled;
        self
    }

    /// Observer integration step `h` [s].
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.cycle_time_us as f64 / 1_000_000.0
    }

    /// Ratio `wo / wc`. Conventionally 3..5 or more.
    #[inline]
    pub fn observer_separation(&self) -> f64 {
        self.observer_bandwidth / self.controller_bandwidth
    }

    /// Validate every parameter.
    ///
    /// # Errors
    ///
    /// - `LadrcError::DivisionByZero` if `nominal_gain == 0`
    /// - `LadrcError::InvalidConfiguration` for any other out-of-domain value,
    ///   including an observer too fast for the step (`wo·h > RK4_STABILITY_LIMIT`)
    pub fn validate(&self) -> LadrcResult<()> {
        check_tuning(
            self.process_order,
            self.nominal_gain,
            self.controller_bandwidth,
            self.observer_bandwidth,
        )?;
        if !self.initial_estimate.is_finite() {
            return Err(LadrcError::InvalidConfiguration(format!(
                "initial_estimate {} is not finite",
                self.initial_estimate
            )));
        }
        if self.cycle_time_us < CYCLE_TIME_US_MIN || self.cycle_time_us > CYCLE_TIME_US_MAX {
            return Err(LadrcError::InvalidConfiguration(format!(
                "cycle_time_us {} out of range [{}, {}]",
                self.cycle_time_us, CYCLE_TIME_US_MIN, CYCLE_TIME_US_MAX
            )));
        }
        let wo_h = self.observer_bandwidth * self.step_size();
        if wo_h > RK4_STABILITY_LIMIT {
            return Err(LadrcError::InvalidConfiguration(format!(
                "observer_bandwidth · step = {:.3} exceeds RK4 stability limit {} \
                 (lower observer_bandwidth or cycle_time_us)",
                wo_h, RK4_STABILITY_LIMIT
            )));
        }
        Ok(())
    }
}

/// Check the four tuning parameters.
///
/// Checked in order: process order, nominal gain, controller bandwidth,
/// observer bandwidth. The first violation is returned.
pub fn check_tuning(nx: usize, b0: f64, wc: f64, wo: f64) -> LadrcResult<()> {
    if nx < 1 || nx > MAX_PROCESS_ORDER {
        return Err(LadrcError::InvalidConfiguration(format!(
            "process_order {} out of range [1, {}]",
            nx, MAX_PROCESS_ORDER
        )));
    }
    if b0 == 0.0 {
        return Err(LadrcError::DivisionByZero);
    }
    if !b0.is_finite() {
        return Err(LadrcError::InvalidConfiguration(format!(
            "nominal_gain {} is not finite",
            b0
        )));
    }
    if !(wc > 0.0 && wc.is_finite()) {
        return Err(LadrcError::InvalidConfiguration(format!(
            "controller_bandwidth {} must be positive and finite",
            wc
        )));
    }
    if !(wo > 0.0 && wo.is_finite()) {
        return Err(LadrcError::InvalidConfiguration(format!(
            "observer_bandwidth {} must be positive and finite",
            wo
        )));
    }
    Ok(())
}
