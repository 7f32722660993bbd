//! Query helpers for extracting data from loaded runs.

use rf_results::TraceRecord;

use crate::error::{AppError, AppResult};

/// Summary of a run's time range and data.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub sample_count: usize,
    pub coil_count: usize,
}

pub fn get_run_summary(traces: &[TraceRecord]) -> AppResult<RunSummary> {
    let first = traces
        .first()
        .ok_or_else(|| AppError::InvalidInput("No traces in run".to_string()))?;

    let t_min = first.samples.first().map(|s| s.t_s).unwrap_or(0.0);
    let t_max = first.samples.last().map(|s| s.t_s).unwrap_or(0.0);

    Ok(RunSummary {
        time_range: (t_min, t_max),
        sample_count: first.samples.len(),
        coil_count: traces.len(),
    })
}

pub fn list_coil_ids(traces: &[TraceRecord]) -> Vec<String> {
    traces.iter().map(|trace| trace.coil_id.clone()).collect()
}

/// Extract (time, value) pairs for one coil's variable.
pub fn extract_series(
    traces: &[TraceRecord],
    coil_id: &str,
    variable: &str,
) -> AppResult<Vec<(f64, f64)>> {
    let trace = traces
        .iter()
        .find(|trace| trace.coil_id == coil_id)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown coil: {}", coil_id)))?;

    let series = match variable {
        "flux" | "flux_wb" => trace
            .samples
            .iter()
            .map(|s| (s.t_s, s.flux_wb))
            .collect(),
        "voltage" | "v_volts" => trace
            .samples
            .iter()
            .map(|s| (s.t_s, s.v_volts))
            .collect(),
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Unknown variable: {} (expected flux or voltage)",
                variable
            )));
        }
    };

    Ok(series)
}

/// RMS voltage of one coil's trace.
pub fn trace_rms_volts(trace: &TraceRecord) -> f64 {
    if trace.samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = trace.samples.iter().map(|s| s.v_volts * s.v_volts).sum();
    (sum_sq / trace.samples.len() as f64).sqrt()
}
