//! Error types for flux evaluation.

use thiserror::Error;

use rf_rotor::ConfigError;

pub type InductionResult<T> = Result<T, InductionError>;

#[derive(Error, Debug)]
pub enum InductionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Time outside the declared valid range. Surfaced rather than clamped;
    /// clamping would silently falsify the trace.
    #[error("Simulation time must be non-negative (got {t_s} s)")]
    NegativeTime { t_s: f64 },

    #[error("Non-finite simulation time: {t_s}")]
    NonFiniteTime { t_s: f64 },
}
