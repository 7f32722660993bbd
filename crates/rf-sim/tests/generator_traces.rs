//! Integration tests: voltage traces against the generator physics contracts.

use std::f64::consts::{PI, TAU};

use rf_core::units::{m, rad, radps, s};
use rf_induction::{FluxEngine, OverlapWindow};
use rf_rotor::{CoilPosition, Polarity, PolarityLayout, RotorConfig};
use rf_sim::{DerivativeScheme, GaussianSmoothing, TimeGrid, TraceOptions, run_trace};

/// Single magnet, half-width 2 * 0.5 / 2.5 = 0.4 rad.
fn single_magnet_engine(polarity: Polarity) -> FluxEngine {
    let rotor = RotorConfig::new(1, m(0.5), m(2.5), radps(1.0))
        .with_polarities(PolarityLayout::Explicit(vec![polarity]));
    FluxEngine::new(rotor).unwrap()
}

fn samples_in<'a>(
    trace: &'a rf_sim::VoltageTrace,
    t_min: f64,
    t_max: f64,
) -> impl Iterator<Item = &'a rf_sim::TraceSample> {
    trace
        .samples
        .iter()
        .filter(move |sample| sample.t_s >= t_min && sample.t_s <= t_max)
}

#[test]
fn north_pole_entry_drives_voltage_negative() {
    // coil at 1.0 rad, magnet reaches the window edge at t = 0.6, the coil
    // at t = 1.0, the far edge at t = 1.4
    let engine = single_magnet_engine(Polarity::North);
    let coil = CoilPosition::new("c0", rad(1.0));
    let grid = TimeGrid::uniform(s(2.0), 2000).unwrap();
    let trace = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();

    let entry: Vec<f64> = samples_in(&trace, 0.65, 0.95)
        .map(|sample| sample.v_volts)
        .collect();
    assert!(!entry.is_empty());
    assert!(entry.iter().all(|&v| v < 0.0), "entry half must be negative");

    let exit: Vec<f64> = samples_in(&trace, 1.05, 1.35)
        .map(|sample| sample.v_volts)
        .collect();
    assert!(!exit.is_empty());
    assert!(exit.iter().all(|&v| v > 0.0), "exit half must be positive");

    for sample in samples_in(&trace, 0.0, 0.55) {
        assert_eq!(sample.v_volts, 0.0, "flat before the window");
    }
    for sample in samples_in(&trace, 1.45, 2.0) {
        assert_eq!(sample.v_volts, 0.0, "flat after the window");
    }
}

#[test]
fn south_pole_entry_drives_voltage_positive() {
    let engine = single_magnet_engine(Polarity::South);
    let coil = CoilPosition::new("c0", rad(1.0));
    let grid = TimeGrid::uniform(s(2.0), 2000).unwrap();
    let trace = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();

    assert!(samples_in(&trace, 0.65, 0.95).all(|sample| sample.v_volts > 0.0));
    assert!(samples_in(&trace, 1.05, 1.35).all(|sample| sample.v_volts < 0.0));
}

#[test]
fn analytic_and_discrete_schemes_agree() {
    let engine = single_magnet_engine(Polarity::North);
    let coil = CoilPosition::new("c0", rad(1.0));
    let grid = TimeGrid::uniform(s(2.0), 2000).unwrap();

    let discrete = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();
    let analytic = run_trace(
        &engine,
        &coil,
        &grid,
        &TraceOptions {
            scheme: DerivativeScheme::Analytic,
            smoothing: None,
        },
    )
    .unwrap();

    // skip the seeded v_0 = 0 sample of the discrete scheme
    for (d, a) in discrete.samples[1..]
        .iter()
        .zip(analytic.samples[1..].iter())
    {
        assert!(
            (d.v_volts - a.v_volts).abs() < 0.05,
            "schemes disagree at t = {}: {} vs {}",
            d.t_s,
            d.v_volts,
            a.v_volts
        );
    }
}

#[test]
fn voltage_is_continuous_across_window_edges() {
    let engine = single_magnet_engine(Polarity::North);
    let coil = CoilPosition::new("c0", rad(1.0));
    let grid = TimeGrid::uniform(s(2.0), 2000).unwrap();

    for scheme in [DerivativeScheme::BackwardDifference, DerivativeScheme::Analytic] {
        let trace = run_trace(
            &engine,
            &coil,
            &grid,
            &TraceOptions {
                scheme,
                smoothing: None,
            },
        )
        .unwrap();

        // bounded sample-to-sample jumps everywhere, including the window
        // edge crossings at t = 0.6 and t = 1.4
        for pair in trace.samples[1..].windows(2) {
            let jump = (pair[1].v_volts - pair[0].v_volts).abs();
            assert!(
                jump < 0.05,
                "voltage jump {jump} at t = {} under {scheme:?}",
                pair[1].t_s
            );
        }
    }
}

#[test]
fn three_magnet_scenario_one_excursion_per_pass() {
    // magnets at 0, 120, 240 degrees (N, S, N), coil between slots at 60
    // degrees, one rotation in 3 s; passes at t = 0.5 (N), 1.5 (N), 2.5 (S)
    let period = 3.0;
    let rotor = RotorConfig::new(3, m(0.5), m(2.5), radps(TAU / period));
    let engine = FluxEngine::new(rotor).unwrap();
    let coil = CoilPosition::new("c0", rad(PI / 3.0));
    let grid = TimeGrid::uniform(s(period), 3000).unwrap();
    let trace = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();

    // window spans 0.4 rad, angular gap between passes is 2*pi/3: the
    // influence regions are disjoint in time
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut start = None;
    for (k, sample) in trace.samples.iter().enumerate() {
        if sample.flux_wb != 0.0 {
            if start.is_none() {
                start = Some(k);
            }
        } else if let Some(s0) = start.take() {
            runs.push((s0, k));
        }
    }
    if let Some(s0) = start {
        runs.push((s0, trace.samples.len()));
    }
    assert_eq!(runs.len(), 3, "one influence region per magnet pass");

    // entry voltage sign tracks the pole: N, N, S pass the coil in order
    let expected_entry_signs = [-1.0, -1.0, 1.0];
    for (run, expected) in runs.iter().zip(expected_entry_signs) {
        let first_v = trace.samples[run.0..run.1]
            .iter()
            .map(|sample| sample.v_volts)
            .find(|v| *v != 0.0)
            .expect("run must produce voltage");
        assert_eq!(first_v.signum(), expected);
    }

    // flat zero between the first and second pass
    for sample in samples_in(&trace, 0.75, 1.25) {
        assert_eq!(sample.v_volts, 0.0);
        assert_eq!(sample.flux_wb, 0.0);
    }
}

#[test]
fn stationary_rotor_far_coil_is_flat() {
    let rotor = RotorConfig::new(1, m(0.5), m(2.5), radps(0.0));
    let engine = FluxEngine::new(rotor).unwrap();
    let coil = CoilPosition::new("c0", rad(PI));
    let grid = TimeGrid::uniform(s(5.0), 500).unwrap();
    let trace = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();

    for sample in &trace.samples {
        assert_eq!(sample.flux_wb, 0.0);
        assert_eq!(sample.v_volts, 0.0);
    }
}

#[test]
fn smoothed_overlap_window_trace_is_finite() {
    let rotor = RotorConfig::new(4, m(0.5), m(2.5), radps(0.375 * PI));
    let engine = FluxEngine::with_window(rotor, Box::new(OverlapWindow)).unwrap();
    let coil = CoilPosition::new("c0", rad(PI / 2.0));
    let grid = TimeGrid::uniform(s(8.0), 5000).unwrap();

    let opts = TraceOptions {
        scheme: DerivativeScheme::BackwardDifference,
        smoothing: Some(GaussianSmoothing::new(50.0).unwrap()),
    };
    let trace = run_trace(&engine, &coil, &grid, &opts).unwrap();

    assert_eq!(trace.samples.len(), 5000);
    assert!(trace.samples.iter().all(|sample| sample.v_volts.is_finite()));

    let summary = trace.summary();
    assert!(summary.rms_volts > 0.0);
    assert!(summary.peak_flux_wb > 0.0);
}

#[test]
fn explicit_grid_with_uneven_spacing() {
    let engine = single_magnet_engine(Polarity::North);
    let coil = CoilPosition::new("c0", rad(1.0));
    let times: Vec<f64> = (0..400)
        .map(|i| {
            let t = i as f64 * 0.005;
            t * t / 2.0 + t // accelerating sample density
        })
        .collect();
    let grid = TimeGrid::from_samples(times).unwrap();
    let trace = run_trace(&engine, &coil, &grid, &TraceOptions::default()).unwrap();

    assert_eq!(trace.samples.len(), 400);
    assert!(trace.samples.iter().all(|sample| sample.v_volts.is_finite()));
}
