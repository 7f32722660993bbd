//! Influence window models: how magnet-coil separation maps to flux.

use std::f64::consts::PI;

use rf_rotor::RotorConfig;

/// Maps normalized angular separation to a flux fraction.
///
/// `u = separation / half_width` is in [-1, 1] inside the window. A window
/// shape must be even, maximal (1.0) at u = 0, and zero at |u| = 1 so that
/// flux is continuous where a magnet crosses the window edge.
pub trait FluxWindow: Send + Sync {
    fn name(&self) -> &'static str;

    /// Half-angle of nonzero influence, radians.
    fn half_width_rad(&self, rotor: &RotorConfig) -> f64;

    /// Normalized flux at `u`. Must return 0.0 for |u| >= 1.
    fn shape(&self, rotor: &RotorConfig, u: f64) -> f64;

    /// d(shape)/du, for closed-form voltage. None when the shape has no
    /// usable derivative (the trace runner falls back to differencing).
    fn shape_slope(&self, rotor: &RotorConfig, u: f64) -> Option<f64>;
}

/// Raised-cosine taper over a half-width of `2 * magnet_radius / path_radius`.
///
/// Zero value and zero slope at the window edge, so the induced voltage is
/// continuous when a magnet enters or leaves the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineWindow;

impl FluxWindow for CosineWindow {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn half_width_rad(&self, rotor: &RotorConfig) -> f64 {
        2.0 * rotor.magnet_radius.value / rotor.path_radius.value
    }

    fn shape(&self, _rotor: &RotorConfig, u: f64) -> f64 {
        if u.abs() >= 1.0 {
            return 0.0;
        }
        0.5 * (1.0 + (PI * u).cos())
    }

    fn shape_slope(&self, _rotor: &RotorConfig, u: f64) -> Option<f64> {
        if u.abs() >= 1.0 {
            return Some(0.0);
        }
        Some(-0.5 * PI * (PI * u).sin())
    }
}

/// Intersection area of two circles of radius `r` whose centers are `d`
/// apart (the lens between the magnet face and an equal-sized coil face).
pub fn lens_overlap_area(d: f64, r: f64) -> f64 {
    if d >= 2.0 * r {
        return 0.0;
    }
    if d == 0.0 {
        return PI * r * r;
    }
    let term1 = 2.0 * r * r * (d / (2.0 * r)).acos();
    let term2 = 0.5 * d * (4.0 * r * r - d * d).sqrt();
    term1 - term2
}

/// Face-overlap window: flux proportional to the overlap area between the
/// magnet face and an equal-radius coil face, both centered on the path
/// circle. Half-width `2 * asin(magnet_radius / path_radius)` (separation at
/// which the chord between the centers reaches one diameter).
///
/// The area has a derivative kink at the window edge; pair this window with
/// Gaussian flux smoothing when a clean voltage trace is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapWindow;

impl FluxWindow for OverlapWindow {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn half_width_rad(&self, rotor: &RotorConfig) -> f64 {
        let ratio = rotor.magnet_radius.value / rotor.path_radius.value;
        2.0 * ratio.asin()
    }

    fn shape(&self, rotor: &RotorConfig, u: f64) -> f64 {
        if u.abs() >= 1.0 {
            return 0.0;
        }
        let r = rotor.magnet_radius.value;
        let path = rotor.path_radius.value;
        let theta = u.abs() * self.half_width_rad(rotor);
        let d = 2.0 * path * (theta / 2.0).sin();
        lens_overlap_area(d, r) / (PI * r * r)
    }

    fn shape_slope(&self, _rotor: &RotorConfig, _u: f64) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::units::{m, radps};

    fn rotor() -> RotorConfig {
        RotorConfig::new(4, m(0.5), m(2.5), radps(1.0))
    }

    #[test]
    fn cosine_half_width_is_geometric() {
        let w = CosineWindow.half_width_rad(&rotor());
        assert!((w - 2.0 * 0.5 / 2.5).abs() < 1e-12);
    }

    #[test]
    fn cosine_half_width_mandated_pair() {
        // magnet radius 0.8 on a 2.0 path: half-width is exactly 0.8 rad
        let r = RotorConfig::new(2, m(0.8), m(2.0), radps(1.0));
        let w = CosineWindow.half_width_rad(&r);
        assert!((w - 0.8).abs() < 1e-12);
    }

    #[test]
    fn cosine_shape_endpoints() {
        let r = rotor();
        assert!((CosineWindow.shape(&r, 0.0) - 1.0).abs() < 1e-12);
        assert_eq!(CosineWindow.shape(&r, 1.0), 0.0);
        assert_eq!(CosineWindow.shape(&r, -1.0), 0.0);
        assert_eq!(CosineWindow.shape(&r, 3.0), 0.0);
    }

    #[test]
    fn cosine_slope_vanishes_at_edges() {
        let r = rotor();
        assert_eq!(CosineWindow.shape_slope(&r, 1.0), Some(0.0));
        // slope of 0.5*(1 + cos(pi*u)) tends to 0 as |u| -> 1
        let near_edge = CosineWindow.shape_slope(&r, 0.999).unwrap();
        assert!(near_edge.abs() < 0.01);
        let slope_mid = CosineWindow.shape_slope(&r, 0.5).unwrap();
        assert!((slope_mid + 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn lens_area_limits() {
        let r = 0.5;
        assert!((lens_overlap_area(0.0, r) - PI * r * r).abs() < 1e-12);
        assert_eq!(lens_overlap_area(1.0, r), 0.0);
        assert_eq!(lens_overlap_area(2.0, r), 0.0);

        // half-separated circles overlap less than half their area
        let a = lens_overlap_area(0.5, r);
        assert!(a > 0.0 && a < PI * r * r / 2.0 + 0.1);
    }

    #[test]
    fn lens_area_monotone_in_separation() {
        let r = 0.5;
        let mut prev = lens_overlap_area(0.0, r);
        for i in 1..=20 {
            let d = i as f64 * 0.05;
            let a = lens_overlap_area(d, r);
            assert!(a <= prev + 1e-12);
            prev = a;
        }
    }

    #[test]
    fn overlap_window_endpoints() {
        let r = rotor();
        assert!((OverlapWindow.shape(&r, 0.0) - 1.0).abs() < 1e-12);
        assert!(OverlapWindow.shape(&r, 1.0).abs() < 1e-12);

        let w = OverlapWindow.half_width_rad(&r);
        assert!((w - 2.0 * (0.5_f64 / 2.5).asin()).abs() < 1e-12);
    }

    #[test]
    fn overlap_window_has_no_slope() {
        assert!(OverlapWindow.shape_slope(&rotor(), 0.5).is_none());
    }
}
