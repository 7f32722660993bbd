//! Cached trace runs keyed by scenario content.

use std::path::Path;

use rf_results::{RunKind, RunManifest, RunStore, SampleRecord, TraceRecord, compute_run_id};
use rf_sim::{VoltageTrace, run_traces};

use crate::compile::compile_scenario;
use crate::error::{AppError, AppResult};
use crate::scenario_service;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub scenario_path: &'a Path,
    pub scenario_id: &'a str,
    pub options: RunOptions,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub loaded_from_cache: bool,
}

/// Run a scenario's traces, reusing an identical cached run when allowed.
pub fn ensure_run(request: &RunRequest<'_>) -> AppResult<RunResponse> {
    let file = scenario_service::load_scenarios(request.scenario_path)?;
    let scenario = scenario_service::get_scenario(&file, request.scenario_id)?;

    let run_id = compute_run_id(scenario, &request.options.engine_version);
    let store = RunStore::for_scenario_file(request.scenario_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        tracing::info!(run_id = %run_id, scenario = %scenario.id, "reusing cached run");
        return Ok(RunResponse {
            run_id,
            loaded_from_cache: true,
        });
    }

    let compiled = compile_scenario(scenario)?;
    tracing::info!(
        scenario = %scenario.id,
        coils = compiled.coils.len(),
        samples = compiled.grid.len(),
        "computing traces"
    );

    let traces = run_traces(
        &compiled.engine,
        &compiled.coils,
        &compiled.grid,
        &compiled.options,
    )?;
    let records: Vec<TraceRecord> = traces.iter().map(to_record).collect();

    let manifest = RunManifest::new(
        run_id.clone(),
        scenario.id.clone(),
        RunKind::Trace {
            t_end_s: scenario.trace.t_end_s,
            steps: scenario.trace.steps,
            coil_count: compiled.coils.len(),
        },
        request.options.engine_version.clone(),
    );
    store.save_run(&manifest, &records)?;

    Ok(RunResponse {
        run_id,
        loaded_from_cache: false,
    })
}

pub fn load_run(scenario_path: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<TraceRecord>)> {
    let store = RunStore::for_scenario_file(scenario_path)?;
    if !store.has_run(run_id) {
        return Err(AppError::RunNotFound(run_id.to_string()));
    }
    let manifest = store.load_manifest(run_id)?;
    let traces = store.load_traces(run_id)?;
    Ok((manifest, traces))
}

pub fn list_runs(scenario_path: &Path, scenario_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_scenario_file(scenario_path)?;
    Ok(store.list_runs(scenario_id)?)
}

fn to_record(trace: &VoltageTrace) -> TraceRecord {
    TraceRecord {
        coil_id: trace.coil_id.clone(),
        coil_offset_rad: trace.coil_offset_rad,
        samples: trace
            .samples
            .iter()
            .map(|sample| SampleRecord {
                t_s: sample.t_s,
                flux_wb: sample.flux_wb,
                v_volts: sample.v_volts,
            })
            .collect(),
    }
}
