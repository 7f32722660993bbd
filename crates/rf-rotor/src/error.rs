//! Error types for rotor/coil configuration.

use thiserror::Error;

pub type RotorResult<T> = Result<T, ConfigError>;

/// Geometrically or physically invalid configuration. Never silently
/// corrected; an invalid rotor has no meaningful trace.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive (got {value})")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Edge offset must be non-negative (got {value})")]
    NegativeOffset { value: f64 },

    #[error("Rotor needs at least one magnet")]
    NoMagnets,

    #[error("Coil layout needs at least one coil")]
    NoCoils,

    #[error(
        "Magnet path radius {path_radius_m} m is smaller than magnet radius {magnet_radius_m} m"
    )]
    PathInsideMagnet {
        path_radius_m: f64,
        magnet_radius_m: f64,
    },

    #[error("{requested} magnets cannot fit on the path (at most {max_fit} at this pitch)")]
    TooManyMagnets { requested: usize, max_fit: usize },

    #[error("Polarity list has {got} entries for {expected} magnets")]
    PolarityMismatch { got: usize, expected: usize },

    #[error("Magnet diameter {diameter_m} m exceeds disk radius {disk_radius_m} m")]
    MagnetLargerThanDisk {
        diameter_m: f64,
        disk_radius_m: f64,
    },

    #[error(
        "Magnet overlaps the disk center: diameter {diameter_m} m plus edge offset {offset_m} m exceeds disk radius {disk_radius_m} m"
    )]
    MagnetOverlapsCenter {
        diameter_m: f64,
        offset_m: f64,
        disk_radius_m: f64,
    },

    #[error("Influence half-width {width_rad} rad is outside (0, pi)")]
    InfluenceWidthOutOfRange { width_rad: f64 },
}
