//! Node placement for the surface and deep layers.

use crate::boundary::BoundaryPolygon;
use crate::config::FieldParams;
use crate::rng::RandomStream;
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Normalized position; multiply by the viewport size for pixels.
    pub pos: DVec2,
    pub phase: f64,
    pub radius: f64,
    /// Brightness variance in `[0, 1]`; brighter dots at 0.
    pub bio: f64,
}

#[derive(Clone, Debug, Default)]
pub struct NodeField {
    pub surface: Vec<Node>,
    pub deep: Vec<Node>,
    pub attempts: usize,
}

impl NodeField {
    pub fn generate(rng: &mut RandomStream, boundary: &BoundaryPolygon, params: &FieldParams) -> Self {
        let (surface, attempts) = sample_surface(rng, boundary, params);
        if surface.len() < params.target_nodes {
            log::warn!(
                "[mesh] surface target {} not met: {} nodes after {} attempts",
                params.target_nodes,
                surface.len(),
                attempts
            );
        }
        let deep = derive_deep(rng, &surface, params);
        log::debug!(
            "[mesh] field surface={} deep={} attempts={}",
            surface.len(),
            deep.len(),
            attempts
        );
        Self {
            surface,
            deep,
            attempts,
        }
    }
}

/// Rejection-sample candidates skewed towards the lower right until the
/// target count or the attempt budget runs out. Returns the nodes and the
/// number of candidates drawn.
pub fn sample_surface(
    rng: &mut RandomStream,
    boundary: &BoundaryPolygon,
    params: &FieldParams,
) -> (Vec<Node>, usize) {
    let mut nodes = Vec::with_capacity(params.target_nodes.min(params.attempt_budget));
    let mut attempts = 0;
    while attempts < params.attempt_budget && nodes.len() < params.target_nodes {
        attempts += 1;
        let bx = rng.next_f64().powf(params.bias_exponents[0]) * params.bias_span + params.bias_offset;
        let by = rng.next_f64().powf(params.bias_exponents[1]) * params.bias_span + params.bias_offset;
        let x = (bx + rng.jitter(params.candidate_jitter)).clamp(params.clamp_min, params.clamp_max);
        let y = (by + rng.jitter(params.candidate_jitter)).clamp(params.clamp_min, params.clamp_max);
        let pos = DVec2::new(x, y);
        if !boundary.contains(pos) {
            continue;
        }
        nodes.push(Node {
            pos,
            phase: rng.next_f64() * TAU,
            radius: params.radius_min + rng.next_f64() * params.radius_span,
            bio: rng.next_f64(),
        });
    }
    (nodes, attempts)
}

/// Number of deep nodes derived from `surface_len` surface nodes.
pub fn deep_count(surface_len: usize, params: &FieldParams) -> usize {
    let share = (surface_len as f64 * params.deep_ratio).floor() as usize;
    share.min(params.deep_cap)
}

/// Scatter deep nodes around randomly chosen surface nodes. They are not
/// re-tested against the boundary and may sit slightly outside it.
pub fn derive_deep(rng: &mut RandomStream, surface: &[Node], params: &FieldParams) -> Vec<Node> {
    let count = deep_count(surface.len(), params);
    let mut deep = Vec::with_capacity(count);
    for _ in 0..count {
        let parent = surface[rng.below(surface.len())];
        let offset = DVec2::new(
            rng.jitter(params.deep_jitter),
            rng.jitter(params.deep_jitter),
        );
        deep.push(Node {
            pos: parent.pos + offset,
            phase: rng.next_f64() * TAU,
            radius: params.deep_radius_min + rng.next_f64() * params.deep_radius_span,
            bio: 0.0,
        });
    }
    deep
}
