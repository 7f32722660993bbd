//! rf-core: stable foundation for rotorflux.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - angle (wrapping and shortest-arc arithmetic on the rotor circle)
//! - error (shared error types)

pub mod angle;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use angle::*;
pub use error::{RfError, RfResult};
pub use numeric::*;
pub use units::*;
