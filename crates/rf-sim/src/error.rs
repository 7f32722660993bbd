//! Error types for trace computation.

use thiserror::Error;

use rf_induction::InductionError;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite time sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("Time samples must be strictly increasing (index {index})")]
    NonMonotonicSample { index: usize },

    #[error("Time samples must start at or after zero (got {t_s} s)")]
    NegativeStartTime { t_s: f64 },

    #[error("Trace mismatch: {what}")]
    TraceMismatch { what: &'static str },

    #[error(transparent)]
    Induction(#[from] InductionError),
}
