//! Compile a scenario definition into engine objects.

use rf_core::units::{m, rad, radps, s};
use rf_induction::{FluxEngine, OverlapWindow};
use rf_project::schema::{
    CoilLayoutDef, PathDef, PolarityDef, ScenarioDef, SchemeDef, WindowDef,
};
use rf_rotor::{
    CoilPosition, DiskGeometry, Polarity, PolarityLayout, RotorConfig, evenly_spaced_coils,
};
use rf_sim::{DerivativeScheme, GaussianSmoothing, TimeGrid, TraceOptions};

use crate::error::AppResult;

/// Everything needed to run a scenario's traces.
pub struct CompiledScenario {
    pub engine: FluxEngine,
    pub coils: Vec<CoilPosition>,
    pub grid: TimeGrid,
    pub options: TraceOptions,
}

pub fn compile_scenario(def: &ScenarioDef) -> AppResult<CompiledScenario> {
    let magnet_radius = m(def.rotor.magnet_radius_m);

    let path_radius = match def.rotor.path {
        PathDef::Radius { path_radius_m } => m(path_radius_m),
        PathDef::Disk {
            disk_radius_m,
            offset_from_edge_m,
        } => {
            let disk = DiskGeometry::new(m(disk_radius_m), m(offset_from_edge_m), magnet_radius);
            disk.validate()?;
            disk.path_radius()
        }
    };

    let mut rotor = RotorConfig::new(
        def.rotor.magnets,
        magnet_radius,
        path_radius,
        radps(def.rotor.speed_rad_s),
    )
    .with_strength(def.rotor.strength);

    if let Some(polarities) = &def.rotor.polarities {
        let list = polarities
            .iter()
            .map(|p| match p {
                PolarityDef::N => Polarity::North,
                PolarityDef::S => Polarity::South,
            })
            .collect();
        rotor = rotor.with_polarities(PolarityLayout::Explicit(list));
    }

    let engine = match def.trace.window {
        WindowDef::Cosine => FluxEngine::new(rotor)?,
        WindowDef::Overlap => FluxEngine::with_window(rotor, Box::new(OverlapWindow))?,
    };

    let coils = match &def.coils {
        CoilLayoutDef::EvenlySpaced { count } => evenly_spaced_coils(*count)?,
        CoilLayoutDef::Explicit { offsets_rad } => offsets_rad
            .iter()
            .enumerate()
            .map(|(i, &offset)| CoilPosition::new(format!("c{i}"), rad(offset)))
            .collect(),
    };

    let grid = TimeGrid::uniform(s(def.trace.t_end_s), def.trace.steps)?;

    let smoothing = match def.trace.smoothing_sigma_samples {
        Some(sigma) => Some(GaussianSmoothing::new(sigma)?),
        None => None,
    };

    let options = TraceOptions {
        scheme: match def.trace.scheme {
            SchemeDef::BackwardDifference => DerivativeScheme::BackwardDifference,
            SchemeDef::Analytic => DerivativeScheme::Analytic,
        },
        smoothing,
    };

    Ok(CompiledScenario {
        engine,
        coils,
        grid,
        options,
    })
}
