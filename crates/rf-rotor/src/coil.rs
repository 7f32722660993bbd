//! Stationary pickup coil positions.

use std::f64::consts::TAU;

use rf_core::angle::wrap_tau;
use rf_core::units::{Angle, rad};

use crate::error::{ConfigError, RotorResult};

/// A stationary pickup coil, fixed for the duration of a run.
///
/// `offset` is the coil's clock angle: radians clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilPosition {
    pub id: String,
    pub offset: Angle,
}

impl CoilPosition {
    pub fn new(id: impl Into<String>, offset: Angle) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }

    /// Offset wrapped to [0, 2*pi).
    pub fn offset_rad(&self) -> f64 {
        wrap_tau(self.offset.value)
    }
}

/// Evenly spaced coils, the first at 12 o'clock, indices increasing
/// clockwise. Ids are "c0", "c1", ...
pub fn evenly_spaced_coils(count: usize) -> RotorResult<Vec<CoilPosition>> {
    if count == 0 {
        return Err(ConfigError::NoCoils);
    }
    let pitch = TAU / count as f64;
    Ok((0..count)
        .map(|i| CoilPosition::new(format!("c{i}"), rad(i as f64 * pitch)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_wrap() {
        let coil = CoilPosition::new("c0", rad(-0.1));
        assert!((coil.offset_rad() - (TAU - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn evenly_spaced_layout() {
        let coils = evenly_spaced_coils(3).unwrap();
        assert_eq!(coils.len(), 3);
        assert_eq!(coils[0].id, "c0");
        assert!((coils[0].offset_rad() - 0.0).abs() < 1e-12);
        assert!((coils[1].offset_rad() - TAU / 3.0).abs() < 1e-12);
        assert!((coils[2].offset_rad() - 2.0 * TAU / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_coils_rejected() {
        assert!(matches!(evenly_spaced_coils(0), Err(ConfigError::NoCoils)));
    }
}
