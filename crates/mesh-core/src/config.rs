//! Generation and animation parameters.
//!
//! `Default` values give the stock look of the mesh; every field can be
//! tuned independently and is checked by [`MeshConfig::validate`] before a
//! scene is built.

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Surface nodes wanted; generation may stop short of it.
    pub target_nodes: usize,
    /// Candidate draws allowed before giving up on `target_nodes`.
    pub attempt_budget: usize,
    /// Exponents applied to the two uniform draws (x, y) before scaling.
    pub bias_exponents: [f64; 2],
    pub bias_span: f64,
    pub bias_offset: f64,
    pub candidate_jitter: f64,
    /// Candidates are clamped into `[clamp_min, clamp_max]` on both axes.
    pub clamp_min: f64,
    pub clamp_max: f64,
    pub radius_min: f64,
    pub radius_span: f64,

    pub deep_cap: usize,
    pub deep_ratio: f64,
    pub deep_jitter: f64,
    pub deep_radius_min: f64,
    pub deep_radius_span: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            target_nodes: 420,
            attempt_budget: 4500,
            bias_exponents: [0.9, 1.15],
            bias_span: 0.78,
            bias_offset: 0.11,
            candidate_jitter: 0.06,
            clamp_min: 0.06,
            clamp_max: 0.94,
            radius_min: 1.6,
            radius_span: 1.8,
            deep_cap: 220,
            deep_ratio: 0.5,
            deep_jitter: 0.02,
            deep_radius_min: 1.0,
            deep_radius_span: 1.0,
        }
    }
}

/// Neighbour selection for one edge layer. Distances are squared and in
/// normalized units.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeParams {
    pub min_dist2: f64,
    pub max_dist2: f64,
    pub max_neighbors: usize,
    /// Chance that a qualifying pair actually becomes an edge.
    pub admit_probability: f64,
    pub strength_min: f64,
    pub strength_span: f64,
}

impl EdgeParams {
    pub fn surface() -> Self {
        Self {
            min_dist2: 0.0035,
            max_dist2: 0.06,
            max_neighbors: 6,
            admit_probability: 1.0,
            strength_min: 0.28,
            strength_span: 0.7,
        }
    }

    pub fn deep() -> Self {
        Self {
            min_dist2: 0.0018,
            max_dist2: 0.045,
            max_neighbors: 10,
            admit_probability: 0.26,
            strength_min: 0.22,
            strength_span: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PulseParams {
    pub baseline_rate: f64,
    pub deep_rate: f64,
    pub speed_min: f64,
    pub speed_span: f64,
    pub deep_speed_factor: f64,
    pub hue_base: u16,
    pub hue_span: u16,
    pub retire_threshold: f64,
    pub life_decay: f64,
    pub heartbeat_interval_ms: f64,
    pub heartbeat_burst: usize,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            baseline_rate: 0.28,
            deep_rate: 0.14,
            speed_min: 0.0025,
            speed_span: 0.0045,
            deep_speed_factor: 0.6,
            hue_base: 170,
            hue_span: 40,
            retire_threshold: 1.01,
            life_decay: 0.0012,
            heartbeat_interval_ms: 8000.0,
            heartbeat_burst: 14,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportParams {
    pub min_width: f64,
    pub min_height: f64,
    pub resize_debounce_ms: f64,
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            min_width: 600.0,
            min_height: 300.0,
            resize_debounce_ms: 120.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
    pub seed: u32,
    pub boundary_points: usize,
    pub field: FieldParams,
    pub surface_edges: EdgeParams,
    pub deep_edges: EdgeParams,
    pub pulses: PulseParams,
    pub viewport: ViewportParams,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            seed: 987_654_321,
            boundary_points: 2400,
            field: FieldParams::default(),
            surface_edges: EdgeParams::surface(),
            deep_edges: EdgeParams::deep(),
            pulses: PulseParams::default(),
            viewport: ViewportParams::default(),
        }
    }
}

impl MeshConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundary_points < 3 {
            return Err(ConfigError::BoundaryTooSmall(self.boundary_points));
        }
        let f = &self.field;
        if f.clamp_min >= f.clamp_max {
            return Err(ConfigError::EmptyClampWindow {
                min: f.clamp_min,
                max: f.clamp_max,
            });
        }
        probability("field.deep_ratio", f.deep_ratio)?;
        check_band("surface", &self.surface_edges)?;
        check_band("deep", &self.deep_edges)?;
        probability(
            "surface_edges.admit_probability",
            self.surface_edges.admit_probability,
        )?;
        probability("deep_edges.admit_probability", self.deep_edges.admit_probability)?;

        let p = &self.pulses;
        probability("pulses.baseline_rate", p.baseline_rate)?;
        probability("pulses.deep_rate", p.deep_rate)?;
        if u32::from(p.hue_base) + u32::from(p.hue_span) > 360 {
            return Err(ConfigError::HueOutOfRange {
                base: p.hue_base,
                span: p.hue_span,
            });
        }
        positive("pulses.speed_min", p.speed_min)?;
        positive("pulses.deep_speed_factor", p.deep_speed_factor)?;
        positive("pulses.retire_threshold", p.retire_threshold)?;
        positive("pulses.life_decay", p.life_decay)?;
        positive("pulses.heartbeat_interval_ms", p.heartbeat_interval_ms)?;
        positive("viewport.resize_debounce_ms", self.viewport.resize_debounce_ms)?;
        Ok(())
    }
}

fn check_band(layer: &'static str, e: &EdgeParams) -> Result<(), ConfigError> {
    if e.min_dist2 < 0.0 || e.min_dist2 >= e.max_dist2 {
        return Err(ConfigError::EmptyDistanceBand {
            layer,
            min: e.min_dist2,
            max: e.max_dist2,
        });
    }
    Ok(())
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
