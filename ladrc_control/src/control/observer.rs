//! Linear Extended State Observer (LESO).
//!
//! ```text
//! dz/dt = Ac·z + Bc·u + L·(y − Cc·z)
//! ```
//!
//! `z[0]` tracks the process output, `z[1..nx]` its derivatives and
//! `z[nx]` the lumped disturbance. `u` and `y` are frozen for the lifetime
//! of one observer value, so all four RK4 stages see the same inputs.

use super::gains::LadrcModel;
use super::integrator::Derivative;
use super::vector::{StateVector, dot};

/// Observer derivative bound to one control input and one measurement.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedStateObserver<'a> {
    model: &'a LadrcModel,
    u: f64,
    y: f64,
}

impl<'a> ExtendedStateObserver<'a> {
    /// Bind the model matrices to control input `u` and measurement `y`.
    #[inline]
    pub fn new(model: &'a LadrcModel, u: f64, y: f64) -> Self {
        Self { model, u, y }
    }

    /// Control input held during this step.
    #[inline]
    pub fn control_input(&self) -> f64 {
        self.u
    }

    /// Measured process output held during this step.
    #[inline]
    pub fn measured_output(&self) -> f64 {
        self.y
    }
}

impl Derivative for ExtendedStateObserver<'_> {
    #[inline]
    fn evaluate(&self, z: &StateVector) -> StateVector {
        let innovation = self.y - dot(self.model.cc(), z);
        self.model
            .ac()
            .mul_vec(z)
            .iter()
            .zip(self.model.bc())
            .zip(self.model.l())
            .map(|((az, b), l)| az + b * self.u + l * innovation)
            .collect()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
