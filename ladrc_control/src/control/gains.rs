//! Pole-placement gains and state-space matrices.
//!
//! Built once from `(nx, b0, wc, wo)`. All `nx` controller poles sit at
//! `-wc` and all `n = nx + 1` observer poles at `-wo`:
//!
//! ```text
//! K[i] = wc^(n-i-1) · C(nx, i)      i = 0..nx-1
//! L[i] = wo^(i+1)   · C(n, i+1)     i = 0..n-1
//! Ac   = superdiagonal ones (n×n)
//! Bc   = b0 at row nx-1 (n×1)
//! Cc   = [1, 0, …, 0]   (1×n)
//! Cg   = 1 / b0
//! ```

use core::fmt;

use ladrc_common::controller::error::LadrcResult;
use ladrc_common::controller::params::check_tuning;
use tracing::info;

use super::vector::{GainVector, StateMatrix, StateVector, zeros};

/// Binomial coefficient `C(n, k)`.
///
/// Exact in `f64` for every order this crate supports.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Gains and matrices of one controller. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LadrcModel {
    nx: usize,
    k: GainVector,
    l: StateVector,
    ac: StateMatrix,
    bc: StateVector,
    cc: StateVector,
    cg: f64,
    z_init: StateVector,
}

/// Build gains, matrices and the initial extended state.
///
/// # Errors
///
/// - `LadrcError::InvalidConfiguration` if `nx` is out of range or a
///   bandwidth is not positive
/// - `LadrcError::DivisionByZero` if `b0 == 0`
pub fn build_model(nx: usize, b0: f64, wc: f64, wo: f64, z0_init: f64) -> LadrcResult<LadrcModel> {
    check_tuning(nx, b0, wc, wo)?;
    let n = nx + 1;

    let k: GainVector = (0..nx)
        .map(|i| wc.powi((n - i - 1) as i32) * binomial(nx, i))
        .collect();

    let l: StateVector = (0..n)
        .map(|i| wo.powi((i + 1) as i32) * binomial(n, i + 1))
        .collect();

    let mut bc = zeros(n);
    bc[nx - 1] = b0;

    let mut cc = zeros(n);
    cc[0] = 1.0;

    let mut z_init = zeros(n);
    z_init[0] = z0_init;

    Ok(LadrcModel {
        nx,
        k,
        l,
        ac: StateMatrix::shift(n),
        bc,
        cc,
        cg: 1.0 / b0,
        z_init,
    })
}

impl LadrcModel {
    /// Process order `nx`.
    #[inline]
    pub fn process_order(&self) -> usize {
        self.nx
    }

    /// Extended state dimension `n = nx + 1`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.nx + 1
    }

    /// Controller feedback gains `K` (`nx` entries).
    #[inline]
    pub fn k(&self) -> &[f64] {
        &self.k
    }

    /// Observer correction gains `L` (`n` entries).
    #[inline]
    pub fn l(&self) -> &[f64] {
        &self.l
    }

    /// Companion matrix `Ac`.
    #[inline]
    pub fn ac(&self) -> &StateMatrix {
        &self.ac
    }

    /// Input vector `Bc`.
    #[inline]
    pub fn bc(&self) -> &[f64] {
        &self.bc
    }

    /// Output selector `Cc`.
    #[inline]
    pub fn cc(&self) -> &[f64] {
        &self.cc
    }

    /// Control-law normalizer `Cg = 1/b0`.
    #[inline]
    pub fn cg(&self) -> f64 {
        self.cg
    }

    /// Initial extended state `[z0_init, 0, …, 0]`.
    #[inline]
    pub fn z_init(&self) -> &StateVector {
        &self.z_init
    }

    /// Log the model through `tracing` at INFO level.
    pub fn dump(&self) {
        info!("LADRC model (nx = {}):\n{}", self.nx, self);
    }
}

fn write_column(f: &mut fmt::Formatter<'_>, name: &str, v: &[f64]) -> fmt::Result {
    writeln!(f, "{name} =")?;
    for x in v {
        writeln!(f, " [{x}]")?;
    }
    writeln!(f)
}

fn write_row(f: &mut fmt::Formatter<'_>, v: &[f64]) -> fmt::Result {
    write!(f, " [")?;
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{x}")?;
    }
    writeln!(f, "]")
}

impl fmt::Display for LadrcModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "K =")?;
        write_row(f, &self.k)?;
        writeln!(f)?;
        write_column(f, "L", &self.l)?;
        writeln!(f, "Ac =")?;
        for i in 0..self.ac.dim() {
            write_row(f, self.ac.row(i))?;
        }
        writeln!(f)?;
        write_column(f, "Bc", &self.bc)?;
        writeln!(f, "Cc =")?;
        write_row(f, &self.cc)?;
        writeln!(f)?;
        write_column(f, "z_init", &self.z_init)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
