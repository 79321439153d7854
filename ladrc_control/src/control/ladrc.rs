//! LADRC controller: observer update followed by the control law.
//!
//! One call per sample tick:
//! 1. Build the observer bound to the previous output `u` and the new
//!    measurement `y`.
//! 2. `z ← RK4(observer, z, h)`.
//! 3. `u0 = K[0]·(r − z[0]) − Σ K[i]·z[i]` for `i = 1..nx-1`.
//! 4. `u = (u0 − z[nx]) · Cg`.
//!
//! The observer always integrates with the output commanded on the
//! previous cycle. The actuator holds that value until the current sample
//! (zero-order hold), so the one-cycle lag is the physically correct input.

use ladrc_common::consts::MIN_OBSERVER_SEPARATION;
use ladrc_common::controller::error::{LadrcError, LadrcResult};
use ladrc_common::controller::params::LadrcParameters;
use tracing::{debug, warn};

use super::gains::{LadrcModel, build_model};
use super::integrator::rk4_step;
use super::observer::ExtendedStateObserver;
use super::vector::StateVector;

/// Reject NaN / ±∞ before it reaches the observer state.
#[inline]
fn check_finite(name: &'static str, value: f64) -> LadrcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LadrcError::NonFiniteInput { name, value })
    }
}

/// Linear Active Disturbance Rejection Controller.
///
/// Owns the extended state `z` and the last output `u`. Not reentrant:
/// calls must be serialised by the owning control loop.
#[derive(Debug, Clone)]
pub struct Ladrc {
    model: LadrcModel,
    /// Extended state estimate.
    z: StateVector,
    /// Output commanded on the previous cycle.
    u: f64,
    /// Observer integration step [s].
    h: f64,
}

impl Ladrc {
    /// Validate `params`, build gains and matrices and seed the state.
    ///
    /// # Errors
    ///
    /// - `LadrcError::DivisionByZero` if `nominal_gain == 0`
    /// - `LadrcError::InvalidConfiguration` for any other invalid parameter
    pub fn new(params: &LadrcParameters) -> LadrcResult<Self> {
        params.validate()?;
        let model = build_model(
            params.process_order,
            params.nominal_gain,
            params.controller_bandwidth,
            params.observer_bandwidth,
            params.initial_estimate,
        )?;

        let separation = params.observer_separation();
        if separation < MIN_OBSERVER_SEPARATION {
            warn!(
                "observer bandwidth {} is only {:.2}x controller bandwidth {}",
                params.observer_bandwidth, separation, params.controller_bandwidth
            );
        }
        if params.diagnostic_dump {
            model.dump();
        }
        debug!(
            "LADRC ready: nx={}, b0={}, wc={}, wo={}, h={}s",
            params.process_order,
            params.nominal_gain,
            params.controller_bandwidth,
            params.observer_bandwidth,
            params.step_size()
        );

        Ok(Self {
            z: model.z_init().clone(),
            model,
            u: 0.0,
            h: params.step_size(),
        })
    }

    /// Run one control cycle and return the new control output.
    ///
    /// # Errors
    ///
    /// - `LadrcError::NonFiniteInput` if `reference` or `measured_output` is
    ///   NaN or infinite
    /// - `LadrcError::NonFiniteState` if the integrated estimate or the new
    ///   output overflows
    ///
    /// On error the controller state is left untouched.
    pub fn compute_control_output(&mut self, reference: f64, measured_output: f64) -> LadrcResult<f64> {
        check_finite("reference", reference)?;
        check_finite("measured_output", measured_output)?;

        let observer = ExtendedStateObserver::new(&self.model, self.u, measured_output);
        let z = rk4_step(&observer, &self.z, self.h)?;

        let k = self.model.k();
        let nx = self.model.process_order();
        let feedback: f64 = k.iter().zip(z.iter()).skip(1).map(|(ki, zi)| ki * zi).sum();
        let u0 = k[0] * (reference - z[0]) - feedback;
        let u = (u0 - z[nx]) * self.model.cg();

        if !z.iter().all(|zi| zi.is_finite()) {
            return Err(LadrcError::NonFiniteState { what: "estimate" });
        }
        if !u.is_finite() {
            return Err(LadrcError::NonFiniteState { what: "output" });
        }

        self.z = z;
        self.u = u;
        Ok(u)
    }

    /// Extended state estimate `z`.
    #[inline]
    pub fn state(&self) -> &[f64] {
        &self.z
    }

    /// Output returned by the last call (0 before the first call).
    #[inline]
    pub fn last_output(&self) -> f64 {
        self.u
    }

    /// Estimated process output `z[0]`.
    #[inline]
    pub fn estimated_output(&self) -> f64 {
        self.z[0]
    }

    /// Estimated total disturbance `z[nx]`.
    #[inline]
    pub fn estimated_disturbance(&self) -> f64 {
        self.z[self.model.process_order()]
    }

    /// Gains and matrices.
    #[inline]
    pub fn model(&self) -> &LadrcModel {
        &self.model
    }

    /// Process order `nx`.
    #[inline]
    pub fn process_order(&self) -> usize {
        self.model.process_order()
    }

    /// Observer integration step `h` [s].
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.h
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
