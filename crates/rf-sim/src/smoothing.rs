//! Gaussian smoothing of flux series.
//!
//! The overlap window has a derivative kink at its edges; smoothing the flux
//! before differencing removes the resulting voltage spikes. Kernel is
//! truncated at 4 sigma with reflected boundaries.

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianSmoothing {
    sigma_samples: f64,
}

impl GaussianSmoothing {
    pub fn new(sigma_samples: f64) -> SimResult<Self> {
        if !sigma_samples.is_finite() {
            return Err(SimError::InvalidArg {
                what: "smoothing sigma must be finite",
            });
        }
        if sigma_samples <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "smoothing sigma must be positive",
            });
        }
        Ok(Self { sigma_samples })
    }

    pub fn sigma_samples(&self) -> f64 {
        self.sigma_samples
    }

    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        if values.is_empty() {
            return Vec::new();
        }

        let sigma = self.sigma_samples;
        let radius = (4.0 * sigma).ceil() as usize;

        let mut kernel = Vec::with_capacity(2 * radius + 1);
        let mut norm = 0.0;
        for offset in -(radius as isize)..=(radius as isize) {
            let x = offset as f64;
            let weight = (-(x * x) / (2.0 * sigma * sigma)).exp();
            kernel.push(weight);
            norm += weight;
        }

        let n = values.len();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let idx = i as isize + k as isize - radius as isize;
                acc += weight * values[reflect_index(idx, n)];
            }
            out.push(acc / norm);
        }
        out
    }
}

/// Fold an index back into [0, n) by reflecting at the array edges
/// (edge samples repeat, matching the usual image-filter convention).
fn reflect_index(mut idx: isize, n: usize) -> usize {
    let n = n as isize;
    loop {
        if idx < 0 {
            idx = -idx - 1;
        } else if idx >= n {
            idx = 2 * n - 1 - idx;
        } else {
            return idx as usize;
        }
    }
}
