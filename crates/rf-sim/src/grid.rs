//! Simulation time axes.

use rf_core::units::Time;

use crate::error::{SimError, SimResult};

/// Ordered, non-negative, strictly increasing time samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples_s: Vec<f64>,
}

impl TimeGrid {
    /// `steps` samples covering [0, t_end) at spacing t_end / steps.
    pub fn uniform(t_end: Time, steps: usize) -> SimResult<Self> {
        let t_end_s = t_end.value;
        if !t_end_s.is_finite() {
            return Err(SimError::InvalidArg {
                what: "t_end must be finite",
            });
        }
        if t_end_s <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "t_end must be positive",
            });
        }
        if steps < 2 {
            return Err(SimError::InvalidArg {
                what: "grid needs at least two samples",
            });
        }

        let dt = t_end_s / steps as f64;
        Ok(Self {
            samples_s: (0..steps).map(|i| i as f64 * dt).collect(),
        })
    }

    /// Caller-supplied samples. Out-of-range values are surfaced, never
    /// clamped or sorted.
    pub fn from_samples(samples_s: Vec<f64>) -> SimResult<Self> {
        if samples_s.len() < 2 {
            return Err(SimError::InvalidArg {
                what: "grid needs at least two samples",
            });
        }

        for (index, &t) in samples_s.iter().enumerate() {
            if !t.is_finite() {
                return Err(SimError::NonFiniteSample { index });
            }
        }

        let first = samples_s[0];
        if first < 0.0 {
            return Err(SimError::NegativeStartTime { t_s: first });
        }

        for index in 1..samples_s.len() {
            if samples_s[index] <= samples_s[index - 1] {
                return Err(SimError::NonMonotonicSample { index });
            }
        }

        Ok(Self { samples_s })
    }

    pub fn samples_s(&self) -> &[f64] {
        &self.samples_s
    }

    pub fn len(&self) -> usize {
        self.samples_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples_s.is_empty()
    }

    /// Last sample time.
    pub fn t_last_s(&self) -> f64 {
        *self.samples_s.last().unwrap_or(&0.0)
    }
}
