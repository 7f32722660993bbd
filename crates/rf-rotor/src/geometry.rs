//! Disk geometry helpers.

use std::f64::consts::TAU;

use rf_core::units::Length;

use crate::error::{ConfigError, RotorResult};

/// Most magnets that fit side by side on the path circle.
///
/// Chord-to-angle: a face of diameter d on a circle of radius R subtends
/// 2*asin(d / (2R)) of arc.
pub fn max_magnets_on_path(magnet_radius_m: f64, path_radius_m: f64) -> usize {
    let diameter = 2.0 * magnet_radius_m;
    let theta_per_magnet = 2.0 * (diameter / (2.0 * path_radius_m)).asin();
    if !(theta_per_magnet > 0.0) {
        return 0;
    }
    (TAU / theta_per_magnet) as usize
}

/// Rotor disk with magnets inset from its edge. The magnet centers sit on a
/// path circle derived from the disk radius and the edge offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskGeometry {
    pub disk_radius: Length,
    pub offset_from_edge: Length,
    pub magnet_radius: Length,
}

impl DiskGeometry {
    pub fn new(disk_radius: Length, offset_from_edge: Length, magnet_radius: Length) -> Self {
        Self {
            disk_radius,
            offset_from_edge,
            magnet_radius,
        }
    }

    pub fn validate(&self) -> RotorResult<()> {
        let disk = self.disk_radius.value;
        let offset = self.offset_from_edge.value;
        let r = self.magnet_radius.value;

        if !disk.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "disk radius",
                value: disk,
            });
        }
        if disk <= 0.0 {
            return Err(ConfigError::NonPositive {
                what: "disk radius",
                value: disk,
            });
        }
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
        if !offset.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "edge offset",
                value: offset,
            });
        }
        if offset < 0.0 {
            return Err(ConfigError::NegativeOffset { value: offset });
        }

        let diameter = 2.0 * r;
        if diameter > disk {
            return Err(ConfigError::MagnetLargerThanDisk {
                diameter_m: diameter,
                disk_radius_m: disk,
            });
        }
        if diameter + offset > disk {
            return Err(ConfigError::MagnetOverlapsCenter {
                diameter_m: diameter,
                offset_m: offset,
                disk_radius_m: disk,
            });
        }

        Ok(())
    }

    /// Radius of the circle the magnet centers travel on.
    pub fn path_radius(&self) -> Length {
        self.disk_radius - self.offset_from_edge - self.magnet_radius
    }

    pub fn max_magnet_fit(&self) -> usize {
        max_magnets_on_path(self.magnet_radius.value, self.path_radius().value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::units::m;

    #[test]
    fn path_radius_from_disk() {
        let disk = DiskGeometry::new(m(3.2), m(0.2), m(0.5));
        disk.validate().unwrap();
        assert!((disk.path_radius().value - 2.5).abs() < 1e-12);
    }

    #[test]
    fn oversized_magnet_rejected() {
        let disk = DiskGeometry::new(m(1.0), m(0.0), m(0.6));
        assert!(matches!(
            disk.validate(),
            Err(ConfigError::MagnetLargerThanDisk { .. })
        ));
    }

    #[test]
    fn magnet_reaching_center_rejected() {
        let disk = DiskGeometry::new(m(1.0), m(0.5), m(0.3));
        assert!(matches!(
            disk.validate(),
            Err(ConfigError::MagnetOverlapsCenter { .. })
        ));
    }

    #[test]
    fn fit_count_matches_chord_formula() {
        // d = 0.6, R = 0.625: theta per magnet = 2*asin(0.48), about 1.0 rad
        let n = max_magnets_on_path(0.3, 0.625);
        let theta = 2.0 * (0.6_f64 / (2.0 * 0.625)).asin();
        assert_eq!(n, (TAU / theta) as usize);
    }
}
