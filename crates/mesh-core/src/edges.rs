//! Nearest-neighbour edge graphs, one per layer.

use crate::config::EdgeParams;
use crate::field::Node;
use crate::rng::RandomStream;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Node that proposed the edge.
    pub a: usize,
    /// Neighbour it picked.
    pub b: usize,
    pub strength: f64,
}

impl Edge {
    /// Unordered pair identity used for deduplication.
    pub fn key(&self) -> (usize, usize) {
        pair_key(self.a, self.b)
    }
}

#[inline]
pub fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edges of one layer, unique per unordered node pair.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    keys: FnvHashSet<(usize, usize)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.keys.contains(&pair_key(a, b))
    }

    /// Adds the edge unless its pair is already present or it is a self-loop.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if edge.a == edge.b || !self.keys.insert(edge.key()) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Connect each node to its nearest neighbours inside the distance band.
///
/// Every node proposes at most `max_neighbors` pairs; a pair already proposed
/// from the other end is skipped, so a node's total degree can exceed the cap.
/// With `admit_probability < 1` each new pair additionally survives a random
/// roll. Strength is drawn only for pairs that are inserted.
pub fn build_edges(nodes: &[Node], params: &EdgeParams, rng: &mut RandomStream) -> EdgeSet {
    let mut set = EdgeSet::new();
    let mut candidates: Vec<(usize, f64)> = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        candidates.clear();
        for (j, b) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            let d2 = a.pos.distance_squared(b.pos);
            if d2 < params.max_dist2 && d2 > params.min_dist2 {
                candidates.push((j, d2));
            }
        }
        candidates.sort_by(|p, q| p.1.total_cmp(&q.1));

        for &(j, _) in candidates.iter().take(params.max_neighbors) {
            if set.contains(i, j) {
                continue;
            }
            if params.admit_probability < 1.0 && !rng.chance(params.admit_probability) {
                continue;
            }
            let strength = params.strength_min + rng.next_f64() * params.strength_span;
            set.insert(Edge {
                a: i,
                b: j,
                strength,
            });
        }
    }
    set
}
