//! Flux evaluation for a coil against the full rotor.

use std::f64::consts::PI;

use rf_core::angle::signed_arc;
use rf_core::units::{Angle, MagneticFlux, Time, rad, wb};
use rf_rotor::{CoilPosition, ConfigError, Magnet, RotorConfig};

use crate::error::{InductionError, InductionResult};
use crate::window::{CosineWindow, FluxWindow};

/// Computes instantaneous flux through a coil from all rotor magnets.
///
/// A pure function of (configuration, time): no internal state beyond the
/// validated inputs. Live parameter changes are handled by constructing a
/// new engine, which is cheap.
pub struct FluxEngine {
    rotor: RotorConfig,
    magnets: Vec<Magnet>,
    window: Box<dyn FluxWindow>,
    half_width_rad: f64,
    peak_flux_wb: f64,
}

impl FluxEngine {
    /// Engine with the default raised-cosine window.
    pub fn new(rotor: RotorConfig) -> InductionResult<Self> {
        Self::with_window(rotor, Box::new(CosineWindow))
    }

    pub fn with_window(rotor: RotorConfig, window: Box<dyn FluxWindow>) -> InductionResult<Self> {
        rotor.validate()?;

        let half_width_rad = window.half_width_rad(&rotor);
        if !(half_width_rad > 0.0 && half_width_rad < PI) {
            return Err(ConfigError::InfluenceWidthOutOfRange {
                width_rad: half_width_rad,
            }
            .into());
        }

        let magnets = rotor.magnets()?;
        let r = rotor.magnet_radius.value;
        let peak_flux_wb = rotor.strength * PI * r * r;

        Ok(Self {
            rotor,
            magnets,
            window,
            half_width_rad,
            peak_flux_wb,
        })
    }

    pub fn rotor(&self) -> &RotorConfig {
        &self.rotor
    }

    pub fn window_name(&self) -> &'static str {
        self.window.name()
    }

    /// Half-angle within which a magnet links this rotor's coils.
    pub fn influence_half_width(&self) -> Angle {
        rad(self.half_width_rad)
    }

    /// Flux of one fully-aligned magnet.
    pub fn peak_flux(&self) -> MagneticFlux {
        wb(self.peak_flux_wb)
    }

    /// Total flux through `coil` at time `t`: signed sum over all magnets,
    /// zero contribution outside each magnet's influence window.
    pub fn flux_at(&self, coil: &CoilPosition, t: Time) -> InductionResult<MagneticFlux> {
        let t_s = check_time(t.value)?;
        let omega = self.rotor.angular_velocity.value;
        let coil_angle = coil.offset_rad();

        let mut total = 0.0;
        for magnet in &self.magnets {
            let delta = signed_arc(coil_angle, magnet.angle_at(omega, t_s));
            if delta.abs() > self.half_width_rad {
                continue;
            }
            let u = delta / self.half_width_rad;
            total += magnet.polarity.sign() * self.peak_flux_wb * self.window.shape(&self.rotor, u);
        }

        Ok(wb(total))
    }

    /// Closed-form dPhi/dt in Wb/s, when the window has a defined slope.
    ///
    /// Returns `Ok(None)` when any in-window magnet has no slope available;
    /// callers fall back to discrete differencing.
    pub fn flux_rate_at(&self, coil: &CoilPosition, t: Time) -> InductionResult<Option<f64>> {
        let t_s = check_time(t.value)?;
        let omega = self.rotor.angular_velocity.value;
        let coil_angle = coil.offset_rad();

        let mut total = 0.0;
        for magnet in &self.magnets {
            let delta = signed_arc(coil_angle, magnet.angle_at(omega, t_s));
            if delta.abs() > self.half_width_rad {
                continue;
            }
            let u = delta / self.half_width_rad;
            match self.window.shape_slope(&self.rotor, u) {
                Some(slope) => {
                    // d(delta)/dt = omega: the wrap jump sits at |delta| = pi,
                    // outside any valid window
                    total += magnet.polarity.sign() * self.peak_flux_wb * slope * omega
                        / self.half_width_rad;
                }
                None => return Ok(None),
            }
        }

        Ok(Some(total))
    }
}

fn check_time(t_s: f64) -> InductionResult<f64> {
    if !t_s.is_finite() {
        return Err(InductionError::NonFiniteTime { t_s });
    }
    if t_s < 0.0 {
        return Err(InductionError::NegativeTime { t_s });
    }
    Ok(t_s)
}
