//! Owner of the generated mesh and the live pulse list.

use crate::boundary::BoundaryPolygon;
use crate::config::MeshConfig;
use crate::edges::{build_edges, EdgeSet};
use crate::error::ConfigError;
use crate::field::{Node, NodeField};
use crate::pulse::{spawn_probability, speed_multiplier, Heartbeat, Layer, Pulse};
use crate::rng::RandomStream;

/// Running totals, mostly for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub spawned: u64,
    pub retired: u64,
    pub heartbeats: u64,
    pub surface_attempts: usize,
}

pub struct Scene {
    config: MeshConfig,
    rng: RandomStream,
    boundary: BoundaryPolygon,
    surface_nodes: Vec<Node>,
    deep_nodes: Vec<Node>,
    surface_edges: EdgeSet,
    deep_edges: EdgeSet,
    pulses: Vec<Pulse>,
    heartbeat: Heartbeat,
    stats: SceneStats,
}

impl Scene {
    /// Generate boundary, nodes and both edge layers from `config`.
    pub fn new(config: MeshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = RandomStream::new(config.seed);
        let boundary = BoundaryPolygon::generate(config.boundary_points);
        let NodeField {
            surface,
            deep,
            attempts,
        } = NodeField::generate(&mut rng, &boundary, &config.field);
        let surface_edges = build_edges(&surface, &config.surface_edges, &mut rng);
        let deep_edges = build_edges(&deep, &config.deep_edges, &mut rng);
        log::info!(
            "[mesh] seed={} surface nodes={} edges={} | deep nodes={} edges={} | attempts={}",
            config.seed,
            surface.len(),
            surface_edges.len(),
            deep.len(),
            deep_edges.len(),
            attempts
        );
        let heartbeat = Heartbeat::new(config.pulses.heartbeat_interval_ms);
        Ok(Self {
            config,
            rng,
            boundary,
            surface_nodes: surface,
            deep_nodes: deep,
            surface_edges,
            deep_edges,
            pulses: Vec::new(),
            heartbeat,
            stats: SceneStats {
                surface_attempts: attempts,
                ..SceneStats::default()
            },
        })
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn boundary(&self) -> &BoundaryPolygon {
        &self.boundary
    }

    pub fn nodes(&self, layer: Layer) -> &[Node] {
        match layer {
            Layer::Surface => &self.surface_nodes,
            Layer::Deep => &self.deep_nodes,
        }
    }

    pub fn edges(&self, layer: Layer) -> &EdgeSet {
        match layer {
            Layer::Surface => &self.surface_edges,
            Layer::Deep => &self.deep_edges,
        }
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Launch a pulse along edge `edge_index` of `layer`. Returns false for
    /// an index with no edge.
    pub fn spawn_on_edge(&mut self, edge_index: usize, layer: Layer) -> bool {
        let (edges, nodes) = match layer {
            Layer::Surface => (&self.surface_edges, &self.surface_nodes),
            Layer::Deep => (&self.deep_edges, &self.deep_nodes),
        };
        let Some(&edge) = edges.get(edge_index) else {
            return false;
        };
        let (from, to) = (nodes[edge.a].pos, nodes[edge.b].pos);
        let p = &self.config.pulses;
        let layer_factor = match layer {
            Layer::Surface => 1.0,
            Layer::Deep => p.deep_speed_factor,
        };
        let speed = (p.speed_min + self.rng.next_f64() * p.speed_span) * layer_factor;
        let hue = p.hue_base + (self.rng.next_f64() * f64::from(p.hue_span)) as u16;
        self.pulses.push(Pulse {
            from_idx: edge.a,
            to_idx: edge.b,
            from,
            to,
            t: 0.0,
            speed,
            layer,
            life: 1.0,
            hue,
        });
        self.stats.spawned += 1;
        true
    }

    /// Pick a uniformly random edge of `layer` and spawn on it.
    fn spawn_random(&mut self, layer: Layer) -> bool {
        let len = self.edges(layer).len();
        let index = self.rng.below(len);
        index < len && self.spawn_on_edge(index, layer)
    }

    /// Per-frame stochastic spawning for both layers.
    pub fn tick_spawn(&mut self) {
        let surface_p = spawn_probability(self.pulses.len(), &self.config.pulses);
        if self.rng.chance(surface_p) {
            self.spawn_random(Layer::Surface);
        }
        if self.rng.chance(self.config.pulses.deep_rate) {
            self.spawn_random(Layer::Deep);
        }
    }

    /// Feed frame time to the heartbeat; on a beat, burst-spawn surface
    /// pulses. Returns the number of pulses the burst produced.
    pub fn advance_heartbeat(&mut self, dt_ms: f64) -> usize {
        if !self.heartbeat.advance(dt_ms) {
            return 0;
        }
        self.stats.heartbeats += 1;
        let burst = self.config.pulses.heartbeat_burst;
        let spawned = (0..burst)
            .filter(|_| self.spawn_random(Layer::Surface))
            .count();
        log::debug!("[pulse] heartbeat burst spawned={spawned}");
        spawned
    }

    /// Advance every pulse, newest first. Spent pulses are removed; each
    /// survivor is handed to `visit` before its life decays.
    pub fn step_pulses<F>(&mut self, mut visit: F)
    where
        F: FnMut(&Pulse),
    {
        let retire = self.config.pulses.retire_threshold;
        let decay = self.config.pulses.life_decay;
        for i in (0..self.pulses.len()).rev() {
            let boost = speed_multiplier(self.pulses.len());
            let pulse = &mut self.pulses[i];
            pulse.t += pulse.speed * boost;
            if pulse.is_spent(retire) {
                self.pulses.remove(i);
                self.stats.retired += 1;
                continue;
            }
            visit(pulse);
            pulse.life -= decay;
        }
    }
}
