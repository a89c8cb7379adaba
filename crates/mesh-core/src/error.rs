use thiserror::Error;

/// Reasons a [`crate::MeshConfig`] is refused before any generation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("boundary needs at least 3 sample points, got {0}")]
    BoundaryTooSmall(usize),
    #[error("{layer} distance band is empty: min {min} >= max {max}")]
    EmptyDistanceBand {
        layer: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("pulse hues {base}..{base}+{span} leave the colour wheel")]
    HueOutOfRange { base: u16, span: u16 },
    #[error("clamp window [{min}, {max}] is empty")]
    EmptyClampWindow { min: f64, max: f64 },
}
