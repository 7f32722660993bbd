//! Content-based hashing for run IDs.

use rf_project::schema::ScenarioDef;
use sha2::{Digest, Sha256};

/// Run ID from the scenario content (geometry, coils, trace options) and the
/// engine version. Identical inputs always hash to the same run.
pub fn compute_run_id(scenario: &ScenarioDef, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
