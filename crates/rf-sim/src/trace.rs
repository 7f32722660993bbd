//! Trace runner: flux sampling and Lenz's-law voltage.

use rayon::prelude::*;

use rf_core::units::s;
use rf_induction::FluxEngine;
use rf_rotor::CoilPosition;

use crate::error::{SimError, SimResult};
use crate::grid::TimeGrid;
use crate::smoothing::GaussianSmoothing;

/// How voltage is derived from flux.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DerivativeScheme {
    /// v_k = -(flux_k - flux_{k-1}) / (t_k - t_{k-1}), v_0 = 0.
    #[default]
    BackwardDifference,
    /// Closed-form -dPhi/dt where the window provides a slope; falls back
    /// to backward differencing otherwise.
    Analytic,
}

/// Options for trace runs.
#[derive(Clone, Debug, Default)]
pub struct TraceOptions {
    pub scheme: DerivativeScheme,
    /// Flux smoothing before differencing. Trades the exact flat-zero
    /// far-field regions for spike-free voltage; meant for the overlap
    /// window. When set, the scheme is forced to backward differencing so
    /// the smoothing actually reaches the voltage.
    pub smoothing: Option<GaussianSmoothing>,
}

/// One point of a computed trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSample {
    pub t_s: f64,
    pub flux_wb: f64,
    pub v_volts: f64,
}

/// Flux and induced voltage over time for one coil.
#[derive(Clone, Debug, PartialEq)]
pub struct VoltageTrace {
    pub coil_id: String,
    pub coil_offset_rad: f64,
    pub samples: Vec<TraceSample>,
}

/// Compute the trace for one coil over the grid.
pub fn run_trace(
    engine: &FluxEngine,
    coil: &CoilPosition,
    grid: &TimeGrid,
    opts: &TraceOptions,
) -> SimResult<VoltageTrace> {
    let times = grid.samples_s();

    let mut flux = Vec::with_capacity(times.len());
    for &t in times {
        flux.push(engine.flux_at(coil, s(t))?.value);
    }

    let scheme = if opts.smoothing.is_some() {
        if opts.scheme == DerivativeScheme::Analytic {
            tracing::debug!(
                coil = %coil.id,
                "smoothing requested, using backward differencing instead of the analytic scheme"
            );
        }
        DerivativeScheme::BackwardDifference
    } else {
        opts.scheme
    };

    if let Some(smoothing) = &opts.smoothing {
        flux = smoothing.apply(&flux);
    }

    let voltage = match scheme {
        DerivativeScheme::BackwardDifference => backward_difference(times, &flux),
        DerivativeScheme::Analytic => match analytic_voltage(engine, coil, times)? {
            Some(v) => v,
            None => {
                tracing::debug!(
                    coil = %coil.id,
                    window = engine.window_name(),
                    "window has no closed-form slope, falling back to backward differencing"
                );
                backward_difference(times, &flux)
            }
        },
    };

    let samples = times
        .iter()
        .zip(flux.iter().zip(voltage.iter()))
        .map(|(&t_s, (&flux_wb, &v_volts))| TraceSample {
            t_s,
            flux_wb,
            v_volts,
        })
        .collect();

    Ok(VoltageTrace {
        coil_id: coil.id.clone(),
        coil_offset_rad: coil.offset_rad(),
        samples,
    })
}

/// Traces for every coil, computed in parallel. Pure per-coil work, so the
/// map is embarrassingly parallel.
pub fn run_traces(
    engine: &FluxEngine,
    coils: &[CoilPosition],
    grid: &TimeGrid,
    opts: &TraceOptions,
) -> SimResult<Vec<VoltageTrace>> {
    tracing::debug!(
        coils = coils.len(),
        samples = grid.len(),
        window = engine.window_name(),
        "computing voltage traces"
    );
    coils
        .par_iter()
        .map(|coil| run_trace(engine, coil, grid, opts))
        .collect()
}

/// Sum traces sample-by-sample: coils wired in series. All traces must share
/// one time axis.
pub fn combine_series(traces: &[VoltageTrace]) -> SimResult<VoltageTrace> {
    let first = traces.first().ok_or(SimError::TraceMismatch {
        what: "no traces to combine",
    })?;

    for trace in &traces[1..] {
        if trace.samples.len() != first.samples.len() {
            return Err(SimError::TraceMismatch {
                what: "traces have different lengths",
            });
        }
        for (a, b) in trace.samples.iter().zip(first.samples.iter()) {
            if a.t_s != b.t_s {
                return Err(SimError::TraceMismatch {
                    what: "traces have different time axes",
                });
            }
        }
    }

    let samples = (0..first.samples.len())
        .map(|k| TraceSample {
            t_s: first.samples[k].t_s,
            flux_wb: traces.iter().map(|tr| tr.samples[k].flux_wb).sum(),
            v_volts: traces.iter().map(|tr| tr.samples[k].v_volts).sum(),
        })
        .collect();

    Ok(VoltageTrace {
        coil_id: "series".to_string(),
        coil_offset_rad: first.coil_offset_rad,
        samples,
    })
}

fn backward_difference(times: &[f64], flux: &[f64]) -> Vec<f64> {
    let mut voltage = Vec::with_capacity(flux.len());
    for k in 0..flux.len() {
        if k == 0 {
            voltage.push(0.0);
        } else {
            let dt = times[k] - times[k - 1];
            voltage.push(-(flux[k] - flux[k - 1]) / dt);
        }
    }
    voltage
}

fn analytic_voltage(
    engine: &FluxEngine,
    coil: &CoilPosition,
    times: &[f64],
) -> SimResult<Option<Vec<f64>>> {
    let mut voltage = Vec::with_capacity(times.len());
    for &t in times {
        match engine.flux_rate_at(coil, s(t))? {
            Some(rate) => voltage.push(-rate),
            None => return Ok(None),
        }
    }
    Ok(Some(voltage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::units::{m, rad, radps};
    use rf_rotor::RotorConfig;

    fn engine() -> FluxEngine {
        FluxEngine::new(RotorConfig::new(1, m(0.5), m(2.5), radps(1.0))).unwrap()
    }

    #[test]
    fn first_voltage_sample_is_zero() {
        let grid = TimeGrid::uniform(s(1.0), 100).unwrap();
        let coil = CoilPosition::new("c0", rad(0.5));
        let trace = run_trace(&engine(), &coil, &grid, &TraceOptions::default()).unwrap();
        assert_eq!(trace.samples[0].v_volts, 0.0);
        assert_eq!(trace.samples.len(), 100);
    }

    #[test]
    fn combine_series_sums_samples() {
        let grid = TimeGrid::uniform(s(1.0), 50).unwrap();
        let engine = engine();
        let c0 = CoilPosition::new("c0", rad(0.2));
        let c1 = CoilPosition::new("c1", rad(0.4));
        let opts = TraceOptions::default();

        let t0 = run_trace(&engine, &c0, &grid, &opts).unwrap();
        let t1 = run_trace(&engine, &c1, &grid, &opts).unwrap();
        let series = combine_series(&[t0.clone(), t1.clone()]).unwrap();

        for k in 0..50 {
            let expected = t0.samples[k].v_volts + t1.samples[k].v_volts;
            assert!((series.samples[k].v_volts - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn combine_series_rejects_mismatched_axes() {
        let engine = engine();
        let coil = CoilPosition::new("c0", rad(0.2));
        let opts = TraceOptions::default();

        let a = run_trace(
            &engine,
            &coil,
            &TimeGrid::uniform(s(1.0), 50).unwrap(),
            &opts,
        )
        .unwrap();
        let b = run_trace(
            &engine,
            &coil,
            &TimeGrid::uniform(s(2.0), 50).unwrap(),
            &opts,
        )
        .unwrap();

        assert!(matches!(
            combine_series(&[a, b]),
            Err(SimError::TraceMismatch { .. })
        ));
    }

    #[test]
    fn combine_series_rejects_empty() {
        assert!(combine_series(&[]).is_err());
    }

    #[test]
    fn parallel_traces_match_sequential() {
        let engine = engine();
        let coils = rf_rotor::evenly_spaced_coils(3).unwrap();
        let grid = TimeGrid::uniform(s(2.0), 200).unwrap();
        let opts = TraceOptions::default();

        let parallel = run_traces(&engine, &coils, &grid, &opts).unwrap();
        for (coil, trace) in coils.iter().zip(parallel.iter()) {
            let sequential = run_trace(&engine, coil, &grid, &opts).unwrap();
            assert_eq!(trace, &sequential);
        }
    }
}
