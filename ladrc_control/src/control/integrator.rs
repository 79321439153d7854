//! Fixed-step classical Runge–Kutta (RK4) integrator.
//!
//! ```text
//! k0 = h·F(z)
//! k1 = h·F(z + k0/2)
//! k2 = h·F(z + k1/2)
//! k3 = h·F(z + k2)
//! z' = z + (k0 + 2·k1 + 2·k2 + k3) / 6
//! ```
//!
//! Local truncation error O(h⁵), global error O(h⁴) for smooth `F`.

use ladrc_common::controller::error::{LadrcError, LadrcResult};

use super::vector::StateVector;

/// Right-hand side `dz/dt = F(z)` of an autonomous ODE.
pub trait Derivative {
    /// Evaluate `F(z)`. The result must have the same length as `z`.
    fn evaluate(&self, z: &StateVector) -> StateVector;
}

impl<F> Derivative for F
where
    F: Fn(&StateVector) -> StateVector,
{
    #[inline]
    fn evaluate(&self, z: &StateVector) -> StateVector {
        self(z)
    }
}

/// One RK4 stage: `h·F(z)`, with the dimension check.
#[inline]
fn stage<F: Derivative + ?Sized>(f: &F, z: &StateVector, h: f64) -> LadrcResult<StateVector> {
    let dz = f.evaluate(z);
    if dz.len() != z.len() {
        return Err(LadrcError::DimensionMismatch {
            expected: z.len(),
            actual: dz.len(),
        });
    }
    Ok(dz.iter().map(|d| h * d).collect())
}

/// `z + scale·k`.
#[inline]
fn offset(z: &StateVector, k: &StateVector, scale: f64) -> StateVector {
    z.iter().zip(k.iter()).map(|(zi, ki)| zi + scale * ki).collect()
}

/// Advance `z` by one step of size `h`.
///
/// # Errors
///
/// `LadrcError::DimensionMismatch` if `F` returns a vector whose length
/// differs from `z`.
pub fn rk4_step<F: Derivative + ?Sized>(f: &F, z: &StateVector, h: f64) -> LadrcResult<StateVector> {
    let k0 = stage(f, z, h)?;
    let k1 = stage(f, &offset(z, &k0, 0.5), h)?;
    let k2 = stage(f, &offset(z, &k1, 0.5), h)?;
    let k3 = stage(f, &offset(z, &k2, 1.0), h)?;

    Ok((0..z.len())
        .map(|i| z[i] + (k0[i] + 2.0 * k1[i] + 2.0 * k2[i] + k3[i]) / 6.0)
        .collect())
}

// ─── Tests ──────────────────────────────────────────────────────────
