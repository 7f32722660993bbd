//! Rotor configuration: magnet layout on the spinning disk.

use std::f64::consts::TAU;

use rf_core::units::{AngularVelocity, Length, Time, s};

use crate::error::{ConfigError, RotorResult};
use crate::geometry::{DiskGeometry, max_magnets_on_path};
use crate::magnet::{Magnet, Polarity, PolarityLayout};

/// Physical layout of the rotating magnets.
///
/// Magnets are evenly spaced on the path circle, slot 0 at 12 o'clock,
/// slot index increasing clockwise. Positive angular velocity spins the
/// rotor clockwise. Fields are plain data; [`RotorConfig::validate`] is the
/// gatekeeper and is called by every consumer before computing.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorConfig {
    pub magnet_count: usize,
    pub magnet_radius: Length,
    pub path_radius: Length,
    pub angular_velocity: AngularVelocity,
    /// Relative pole strength scaling the peak flux. Dimensionless, 1.0 for
    /// the reference magnet.
    pub strength: f64,
    pub polarities: PolarityLayout,
}

impl RotorConfig {
    pub fn new(
        magnet_count: usize,
        magnet_radius: Length,
        path_radius: Length,
        angular_velocity: AngularVelocity,
    ) -> Self {
        Self {
            magnet_count,
            magnet_radius,
            path_radius,
            angular_velocity,
            strength: 1.0,
            polarities: PolarityLayout::Alternating,
        }
    }

    /// Derive the path radius from a disk layout (validates the disk first).
    pub fn on_disk(
        magnet_count: usize,
        disk: DiskGeometry,
        angular_velocity: AngularVelocity,
    ) -> RotorResult<Self> {
        disk.validate()?;
        Ok(Self::new(
            magnet_count,
            disk.magnet_radius,
            disk.path_radius(),
            angular_velocity,
        ))
    }

    pub fn with_polarities(mut self, polarities: PolarityLayout) -> Self {
        self.polarities = polarities;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn validate(&self) -> RotorResult<()> {
        if self.magnet_count == 0 {
            return Err(ConfigError::NoMagnets);
        }

        let r = self.magnet_radius.value;
        let path = self.path_radius.value;
        let omega = self.angular_velocity.value;

        if !r.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "magnet radius",
                value: r,
            });
        }
        if r <= 0.0 {
            return Err(ConfigError::NonPositive {
                what: "magnet radius",
                value: r,
            });
        }
        if !path.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "path radius",
                value: path,
            });
        }
        if path <= 0.0 {
            return Err(ConfigError::NonPositive {
                what: "path radius",
                value: path,
            });
        }
        if path < r {
            return Err(ConfigError::PathInsideMagnet {
                path_radius_m: path,
                magnet_radius_m: r,
            });
        }
        if !omega.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "angular velocity",
                value: omega,
            });
        }
        if !self.strength.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "magnet strength",
                value: self.strength,
            });
        }
        if self.strength <= 0.0 {
            return Err(ConfigError::NonPositive {
                what: "magnet strength",
                value: self.strength,
            });
        }

        self.polarities.validate(self.magnet_count)?;

        let max_fit = self.max_magnet_fit();
        if self.magnet_count > max_fit {
            return Err(ConfigError::TooManyMagnets {
                requested: self.magnet_count,
                max_fit,
            });
        }

        Ok(())
    }

    /// Angular spacing between adjacent magnet slots, radians.
    pub fn pitch_rad(&self) -> f64 {
        TAU / self.magnet_count as f64
    }

    pub fn max_magnet_fit(&self) -> usize {
        max_magnets_on_path(self.magnet_radius.value, self.path_radius.value)
    }

    /// Time for one full rotation, None for a stationary rotor.
    pub fn rotation_period(&self) -> Option<Time> {
        let omega = self.angular_velocity.value;
        if omega == 0.0 {
            None
        } else {
            Some(s(TAU / omega.abs()))
        }
    }

    /// Materialize the magnet slots. Fails on a polarity/count mismatch.
    pub fn magnets(&self) -> RotorResult<Vec<Magnet>> {
        self.polarities.validate(self.magnet_count)?;

        let pitch = self.pitch_rad();
        let magnets = (0..self.magnet_count)
            .map(|i| {
                let polarity = match &self.polarities {
                    PolarityLayout::Alternating => {
                        if i % 2 == 0 {
                            Polarity::North
                        } else {
                            Polarity::South
                        }
                    }
                    PolarityLayout::Explicit(list) => list[i],
                };
                Magnet {
                    polarity,
                    lead_angle_rad: i as f64 * pitch,
                }
            })
            .collect();

        Ok(magnets)
    }
}
