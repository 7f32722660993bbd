//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    pub rotor: RotorDef,
    pub coils: CoilLayoutDef,
    #[serde(default)]
    pub trace: TraceDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotorDef {
    pub magnets: usize,
    pub magnet_radius_m: f64,
    pub path: PathDef,
    /// Positive spins the rotor clockwise.
    pub speed_rad_s: f64,
    #[serde(default = "default_strength")]
    pub strength: f64,
    /// Pole per slot; omitted means alternating starting North.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarities: Option<Vec<PolarityDef>>,
}

fn default_strength() -> f64 {
    1.0
}

/// Where the magnet centers sit: given directly, or derived from a disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PathDef {
    Radius {
        path_radius_m: f64,
    },
    Disk {
        disk_radius_m: f64,
        offset_from_edge_m: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CoilLayoutDef {
    EvenlySpaced { count: usize },
    /// Clock angles, radians clockwise from 12 o'clock.
    Explicit { offsets_rad: Vec<f64> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PolarityDef {
    N,
    S,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceDef {
    #[serde(default = "default_t_end_s")]
    pub t_end_s: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default)]
    pub window: WindowDef,
    #[serde(default)]
    pub scheme: SchemeDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing_sigma_samples: Option<f64>,
}

fn default_t_end_s() -> f64 {
    8.0
}

fn default_steps() -> usize {
    5000
}

impl Default for TraceDef {
    fn default() -> Self {
        Self {
            t_end_s: default_t_end_s(),
            steps: default_steps(),
            window: WindowDef::default(),
            scheme: SchemeDef::default(),
            smoothing_sigma_samples: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WindowDef {
    #[default]
    Cosine,
    Overlap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SchemeDef {
    #[default]
    BackwardDifference,
    Analytic,
}
