//! Shared application service layer for rotorflux.
//!
//! Centralizes scenario loading, compilation into engine objects, cached
//! trace runs, and result querying behind one interface for frontends.

pub mod compile;
pub mod error;
pub mod query;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use compile::{CompiledScenario, compile_scenario};
pub use error::{AppError, AppResult};
pub use query::{RunSummary, extract_series, get_run_summary, list_coil_ids, trace_rms_volts};
pub use run_service::{RunOptions, RunRequest, RunResponse, ensure_run, list_runs, load_run};
pub use scenario_service::{
    ScenarioSummary, get_scenario, list_scenarios, load_scenarios, validate_scenarios,
};
