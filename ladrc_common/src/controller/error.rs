//! Error taxonomy for the LADRC controller core.
//!
//! Construction errors are terminal: no controller instance is produced.
//! Runtime errors leave the controller state untouched.

use thiserror::Error;

/// Errors raised while building or running a controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LadrcError {
    /// A tuning or timing parameter is outside its valid domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Nominal gain is zero, so the control-law normalizer `1/b0` is undefined.
    #[error("Division by zero: nominal gain must be nonzero")]
    DivisionByZero,

    /// Reference or measurement is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Input name (`reference` or `measured_output`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Observer integration produced NaN or infinity (state or output).
    #[error("Non-finite state: observer integration diverged ({what})")]
    NonFiniteState {
        /// `estimate` or `output`.
        what: &'static str,
    },

    /// Derivative output length disagrees with the state length.
    #[error("Dimension mismatch: expected {expected} states, got {actual}")]
    DimensionMismatch {
        /// State vector length.
        expected: usize,
        /// Derivative output length.
        actual: usize,
    },
}

/// Result type for controller operations.
pub type LadrcResult<T> = Result<T, LadrcError>;
