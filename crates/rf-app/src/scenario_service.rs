//! Scenario file loading and listing.

use std::path::Path;

use rf_project::schema::{CoilLayoutDef, ScenarioDef, ScenarioFile};

use crate::error::{AppError, AppResult};

/// Load a scenario file, dispatching on extension (.json, else YAML).
pub fn load_scenarios(path: &Path) -> AppResult<ScenarioFile> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let file = if is_json {
        rf_project::load_json(path)?
    } else {
        rf_project::load_yaml(path)?
    };
    Ok(file)
}

pub fn validate_scenarios(file: &ScenarioFile) -> AppResult<()> {
    rf_project::validate_file(file).map_err(|e| AppError::Validation(e.to_string()))
}

/// Lightweight listing entry for frontends.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub magnet_count: usize,
    pub coil_count: usize,
}

pub fn list_scenarios(file: &ScenarioFile) -> Vec<ScenarioSummary> {
    file.scenarios
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            magnet_count: scenario.rotor.magnets,
            coil_count: match &scenario.coils {
                CoilLayoutDef::EvenlySpaced { count } => *count,
                CoilLayoutDef::Explicit { offsets_rad } => offsets_rad.len(),
            },
        })
        .collect()
}

pub fn get_scenario<'a>(file: &'a ScenarioFile, id: &str) -> AppResult<&'a ScenarioDef> {
    file.scenarios
        .iter()
        .find(|scenario| scenario.id == id)
        .ok_or_else(|| AppError::ScenarioNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_project::schema::{PathDef, RotorDef, TraceDef};

    fn file() -> ScenarioFile {
        ScenarioFile {
            version: 1,
            name: "test".to_string(),
            scenarios: vec![ScenarioDef {
                id: "s1".to_string(),
                name: "one".to_string(),
                rotor: RotorDef {
                    magnets: 4,
                    magnet_radius_m: 0.5,
                    path: PathDef::Radius { path_radius_m: 2.5 },
                    speed_rad_s: 1.0,
                    strength: 1.0,
                    polarities: None,
                },
                coils: CoilLayoutDef::EvenlySpaced { count: 3 },
                trace: TraceDef::default(),
            }],
        }
    }

    #[test]
    fn list_and_get() {
        let file = file();
        let summaries = list_scenarios(&file);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].magnet_count, 4);
        assert_eq!(summaries[0].coil_count, 3);

        assert!(get_scenario(&file, "s1").is_ok());
        assert!(matches!(
            get_scenario(&file, "nope"),
            Err(AppError::ScenarioNotFound(_))
        ));
    }
}
