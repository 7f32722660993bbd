//! rf-rotor: rotor and coil geometry for the generator model.
//!
//! Value objects describing the rotating magnet assembly and the stationary
//! pickup coils, with fail-fast validation of every geometric constraint.
//! All angular positions are clock angles: radians clockwise from 12 o'clock.

pub mod coil;
pub mod error;
pub mod geometry;
pub mod magnet;
pub mod rotor;

pub use coil::{CoilPosition, evenly_spaced_coils};
pub use error::{ConfigError, RotorResult};
pub use geometry::{DiskGeometry, max_magnets_on_path};
pub use magnet::{Magnet, Polarity, PolarityLayout};
pub use rotor::RotorConfig;
