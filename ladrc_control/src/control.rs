//! Control engine root.
//!
//! Gain construction → observer → RK4 integration → control law.

pub mod gains;
pub mod integrator;
pub mod ladrc;
pub mod observer;
pub mod vector;
