//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario_id: String,
    pub timestamp: String,
    pub run_kind: RunKind,
    pub engine_version: String,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(run_id: RunId, scenario_id: String, run_kind: RunKind, engine_version: String) -> Self {
        Self {
            run_id,
            scenario_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            run_kind,
            engine_version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunKind {
    Trace {
        t_end_s: f64,
        steps: usize,
        coil_count: usize,
    },
}

/// One coil's computed trace, one line of the run's trace file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRecord {
    pub coil_id: String,
    pub coil_offset_rad: f64,
    pub samples: Vec<SampleRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SampleRecord {
    pub t_s: f64,
    pub flux_wb: f64,
    pub v_volts: f64,
}
