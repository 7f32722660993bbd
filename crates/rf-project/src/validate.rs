//! Scenario validation logic.
//!
//! Schema-level checks only; the numeric geometry constraints are enforced
//! again by the rotor types when a scenario is compiled.

use std::collections::HashSet;

use crate::schema::{
    CoilLayoutDef, LATEST_VERSION, PathDef, RotorDef, ScenarioDef, ScenarioFile, TraceDef,
};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_file(file: &ScenarioFile) -> Result<(), ValidationError> {
    if file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for scenario in &file.scenarios {
        if !ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    validate_rotor(&scenario.rotor)?;
    validate_coils(&scenario.coils)?;
    validate_trace(&scenario.trace)?;
    Ok(())
}

fn validate_rotor(rotor: &RotorDef) -> Result<(), ValidationError> {
    if rotor.magnets == 0 {
        return Err(invalid("rotor.magnets", 0, "at least one magnet"));
    }
    if !(rotor.magnet_radius_m.is_finite() && rotor.magnet_radius_m > 0.0) {
        return Err(invalid(
            "rotor.magnet_radius_m",
            rotor.magnet_radius_m,
            "must be positive",
        ));
    }
    if !rotor.speed_rad_s.is_finite() {
        return Err(invalid(
            "rotor.speed_rad_s",
            rotor.speed_rad_s,
            "must be finite",
        ));
    }
    if !(rotor.strength.is_finite() && rotor.strength > 0.0) {
        return Err(invalid(
            "rotor.strength",
            rotor.strength,
            "must be positive",
        ));
    }

    match rotor.path {
        PathDef::Radius { path_radius_m } => {
            if !(path_radius_m.is_finite() && path_radius_m > 0.0) {
                return Err(invalid(
                    "rotor.path.path_radius_m",
                    path_radius_m,
                    "must be positive",
                ));
            }
        }
        PathDef::Disk {
            disk_radius_m,
            offset_from_edge_m,
        } => {
            if !(disk_radius_m.is_finite() && disk_radius_m > 0.0) {
                return Err(invalid(
                    "rotor.path.disk_radius_m",
                    disk_radius_m,
                    "must be positive",
                ));
            }
            if !(offset_from_edge_m.is_finite() && offset_from_edge_m >= 0.0) {
                return Err(invalid(
                    "rotor.path.offset_from_edge_m",
                    offset_from_edge_m,
                    "must be non-negative",
                ));
            }
        }
    }

    if let Some(polarities) = &rotor.polarities
        && polarities.len() != rotor.magnets
    {
        return Err(invalid(
            "rotor.polarities",
            polarities.len(),
            "length must equal the magnet count",
        ));
    }

    Ok(())
}

fn validate_coils(coils: &CoilLayoutDef) -> Result<(), ValidationError> {
    match coils {
        CoilLayoutDef::EvenlySpaced { count } => {
            if *count == 0 {
                return Err(invalid("coils.count", 0, "at least one coil"));
            }
        }
        CoilLayoutDef::Explicit { offsets_rad } => {
            if offsets_rad.is_empty() {
                return Err(invalid("coils.offsets_rad", "[]", "at least one coil"));
            }
            for (i, offset) in offsets_rad.iter().enumerate() {
                if !offset.is_finite() {
                    return Err(invalid(
                        &format!("coils.offsets_rad[{i}]"),
                        offset,
                        "must be finite",
                    ));
                }
            }
        }
    }
    Ok(())
}

fn validate_trace(trace: &TraceDef) -> Result<(), ValidationError> {
    if !(trace.t_end_s.is_finite() && trace.t_end_s > 0.0) {
        return Err(invalid("trace.t_end_s", trace.t_end_s, "must be positive"));
    }
    if trace.steps < 2 {
        return Err(invalid("trace.steps", trace.steps, "at least two samples"));
    }
    if let Some(sigma) = trace.smoothing_sigma_samples
        && !(sigma.is_finite() && sigma > 0.0)
    {
        return Err(invalid(
            "trace.smoothing_sigma_samples",
            sigma,
            "must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PolarityDef, SchemeDef, WindowDef};

    fn rotor() -> RotorDef {
        RotorDef {
            magnets: 4,
            magnet_radius_m: 0.5,
            path: PathDef::Radius { path_radius_m: 2.5 },
            speed_rad_s: 1.0,
            strength: 1.0,
            polarities: None,
        }
    }

    fn scenario(id: &str) -> ScenarioDef {
        ScenarioDef {
            id: id.to_string(),
            name: "test".to_string(),
            rotor: rotor(),
            coils: CoilLayoutDef::EvenlySpaced { count: 3 },
            trace: TraceDef::default(),
        }
    }

    fn file(scenarios: Vec<ScenarioDef>) -> ScenarioFile {
        ScenarioFile {
            version: 1,
            name: "test".to_string(),
            scenarios,
        }
    }

    #[test]
    fn valid_file_passes() {
        validate_file(&file(vec![scenario("s1"), scenario("s2")])).unwrap();
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = validate_file(&file(vec![scenario("s1"), scenario("s1")])).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn future_version_rejected() {
        let mut f = file(vec![]);
        f.version = 99;
        assert!(matches!(
            validate_file(&f),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn zero_magnets_rejected() {
        let mut s = scenario("s1");
        s.rotor.magnets = 0;
        assert!(validate_file(&file(vec![s])).is_err());
    }

    #[test]
    fn polarity_length_mismatch_rejected() {
        let mut s = scenario("s1");
        s.rotor.polarities = Some(vec![PolarityDef::N, PolarityDef::S]);
        assert!(validate_file(&file(vec![s])).is_err());
    }

    #[test]
    fn bad_trace_values_rejected() {
        let mut s = scenario("s1");
        s.trace = TraceDef {
            t_end_s: -1.0,
            steps: 5000,
            window: WindowDef::Cosine,
            scheme: SchemeDef::BackwardDifference,
            smoothing_sigma_samples: None,
        };
        assert!(validate_file(&file(vec![s.clone()])).is_err());

        s.trace = TraceDef {
            t_end_s: 8.0,
            steps: 1,
            window: WindowDef::Cosine,
            scheme: SchemeDef::BackwardDifference,
            smoothing_sigma_samples: None,
        };
        assert!(validate_file(&file(vec![s.clone()])).is_err());

        s.trace = TraceDef {
            t_end_s: 8.0,
            steps: 5000,
            window: WindowDef::Cosine,
            scheme: SchemeDef::BackwardDifference,
            smoothing_sigma_samples: Some(0.0),
        };
        assert!(validate_file(&file(vec![s])).is_err());
    }

    #[test]
    fn empty_explicit_coils_rejected() {
        let mut s = scenario("s1");
        s.coils = CoilLayoutDef::Explicit {
            offsets_rad: vec![],
        };
        assert!(validate_file(&file(vec![s])).is_err());
    }
}
