//! rf-induction: localized flux model for the rotating generator.
//!
//! A magnet only links a coil while their angular separation is inside a
//! geometry-derived influence window; inside the window the linkage tapers
//! smoothly to zero at the edges. Total flux through a coil is the signed
//! sum over all magnets, so overlapping windows superpose additively.

pub mod error;
pub mod flux;
pub mod window;

pub use error::{InductionError, InductionResult};
pub use flux::FluxEngine;
pub use window::{CosineWindow, FluxWindow, OverlapWindow, lens_overlap_area};
