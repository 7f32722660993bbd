//! Angle arithmetic on the rotor circle.
//!
//! All angular positions in the engine are "clock angles": radians measured
//! clockwise from 12 o'clock, wrapped to [0, 2*pi). Magnet/coil separations
//! are shortest arcs, signed in (-pi, pi] or unsigned in [0, pi].

use std::f64::consts::{PI, TAU};

/// Wrap an angle into [0, 2*pi).
#[inline]
pub fn wrap_tau(theta: f64) -> f64 {
    theta.rem_euclid(TAU)
}

/// Shortest signed arc from `from` to `to`, in (-pi, pi].
///
/// Positive means `to` sits clockwise of `from`.
#[inline]
pub fn signed_arc(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}

/// Shortest unsigned arc between two angles, in [0, pi].
#[inline]
pub fn arc_distance(theta1: f64, theta2: f64) -> f64 {
    let abs_diff = wrap_tau(theta1 - theta2).abs();
    abs_diff.min(TAU - abs_diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_tau_range() {
        assert!((wrap_tau(TAU) - 0.0).abs() < 1e-12);
        assert!((wrap_tau(-0.1) - (TAU - 0.1)).abs() < 1e-12);
        assert!((wrap_tau(3.0 * TAU + 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_arc_crosses_wrap() {
        // 0.1 rad before 12 o'clock to 0.1 rad after: short way, not 2*pi - 0.2
        let d = signed_arc(TAU - 0.1, 0.1);
        assert!((d - 0.2).abs() < 1e-12);

        let d = signed_arc(0.1, TAU - 0.1);
        assert!((d + 0.2).abs() < 1e-12);
    }

    #[test]
    fn signed_arc_half_turn_is_positive() {
        assert!((signed_arc(0.0, PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn arc_distance_symmetric() {
        let d1 = arc_distance(0.2, TAU - 0.2);
        let d2 = arc_distance(TAU - 0.2, 0.2);
        assert!((d1 - 0.4).abs() < 1e-12);
        assert!((d1 - d2).abs() < 1e-12);
    }
}
