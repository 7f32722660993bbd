//! rf-sim: voltage trace computation for the generator model.
//!
//! Provides:
//! - time grids (uniform or caller-supplied samples)
//! - Lenz's-law voltage from flux, by discrete differencing or closed form
//! - optional Gaussian flux smoothing
//! - per-coil trace runner, parallel across coils
//! - trace summaries (RMS / peak) and series combination

pub mod error;
pub mod grid;
pub mod smoothing;
pub mod summary;
pub mod trace;

pub use error::{SimError, SimResult};
pub use grid::TimeGrid;
pub use smoothing::GaussianSmoothing;
pub use summary::TraceSummary;
pub use trace::{
    DerivativeScheme, TraceOptions, TraceSample, VoltageTrace, combine_series, run_trace,
    run_traces,
};
