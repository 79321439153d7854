//! # LADRC Control Library
//!
//! Linear Active Disturbance Rejection Controller for processes of unknown
//! order. An extended state observer estimates the process output, its
//! derivatives and a lumped "total disturbance"; the control law cancels
//! the disturbance estimate and applies proportional state feedback.
//!
//! ## Components
//!
//! 1. **Gains** — pole-placement gains `K`, `L` and the state-space matrices
//!    `Ac`, `Bc`, `Cc`, `Cg`, built once at construction.
//! 2. **Integrator** — fixed-step classical Runge–Kutta (RK4).
//! 3. **Observer** — the LESO derivative `Ac·z + Bc·u + L·(y − Cc·z)`.
//! 4. **Ladrc** — owns `z` and `u`, runs one control cycle per call.
//!
//! ## Zero-Allocation RT Loop
//!
//! All vectors are fixed-capacity `heapless` containers sized for
//! `MAX_PROCESS_ORDER`. A control cycle performs zero heap allocations.
//!
//! ```rust
//! use ladrc_control::{Ladrc, LadrcParameters};
//!
//! let params = LadrcParameters::new(1, 2.0, 10.0, 50.0);
//! let mut ctrl = Ladrc::new(&params)?;
//! let u = ctrl.compute_control_output(1.0, 0.0)?;
//! assert!((u - 5.0).abs() < 1e-12);
//! # Ok::<(), ladrc_control::LadrcError>(())
//! ```

#![deny(clippy::disallowed_types)]

pub mod control;

pub use control::gains::{LadrcModel, build_model};
pub use control::integrator::{Derivative, rk4_step};
pub use control::ladrc::Ladrc;
pub use control::observer::ExtendedStateObserver;
pub use control::vector::{GainVector, StateMatrix, StateVector};
pub use ladrc_common::controller::error::{LadrcError, LadrcResult};
pub use ladrc_common::controller::params::LadrcParameters;
