//! Magnet poles and polarity layout around the rotor.

use core::fmt;

use rf_core::angle::wrap_tau;

use crate::error::{ConfigError, RotorResult};

/// Pole facing the coils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    North,
    South,
}

impl Polarity {
    /// Flux sign contributed by this pole: North positive, South negative.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::North => 1.0,
            Polarity::South => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Polarity::North => Polarity::South,
            Polarity::South => Polarity::North,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::North => write!(f, "N"),
            Polarity::South => write!(f, "S"),
        }
    }
}

/// How poles are assigned to magnet slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PolarityLayout {
    /// Even slot index is North, odd is South.
    #[default]
    Alternating,
    /// Caller-supplied pole per slot; length must equal the magnet count.
    Explicit(Vec<Polarity>),
}

impl PolarityLayout {
    pub fn validate(&self, magnet_count: usize) -> RotorResult<()> {
        match self {
            PolarityLayout::Alternating => Ok(()),
            PolarityLayout::Explicit(list) => {
                if list.len() == magnet_count {
                    Ok(())
                } else {
                    Err(ConfigError::PolarityMismatch {
                        got: list.len(),
                        expected: magnet_count,
                    })
                }
            }
        }
    }
}

/// One rotating pole. `lead_angle_rad` is the slot's clock angle at t = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    pub polarity: Polarity,
    pub lead_angle_rad: f64,
}

impl Magnet {
    /// Clock angle of this magnet at time `t_s` for a rotor spinning at
    /// `omega_rad_s` (positive = clockwise), wrapped to [0, 2*pi).
    pub fn angle_at(&self, omega_rad_s: f64, t_s: f64) -> f64 {
        wrap_tau(self.lead_angle_rad + omega_rad_s * t_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn polarity_signs() {
        assert_eq!(Polarity::North.sign(), 1.0);
        assert_eq!(Polarity::South.sign(), -1.0);
        assert_eq!(Polarity::North.flipped(), Polarity::South);
    }

    #[test]
    fn explicit_layout_length_checked() {
        let layout = PolarityLayout::Explicit(vec![Polarity::North, Polarity::South]);
        assert!(layout.validate(2).is_ok());
        assert!(layout.validate(3).is_err());
    }

    #[test]
    fn magnet_angle_wraps_over_full_turns() {
        let magnet = Magnet {
            polarity: Polarity::North,
            lead_angle_rad: 0.5,
        };
        let a = magnet.angle_at(TAU, 2.0); // two full turns
        assert!((a - 0.5).abs() < 1e-9);
    }
}
