use fnv::FnvHashSet;
use mesh_core::{build_edges, pair_key, EdgeParams, EdgeSet, Layer, MeshConfig, Node, Scene};
use std::collections::HashMap;

fn reference_scene() -> Scene {
    Scene::new(MeshConfig::default()).expect("default config is valid")
}

fn assert_well_formed(edges: &EdgeSet, node_count: usize) {
    let mut seen = FnvHashSet::default();
    for e in edges {
        assert_ne!(e.a, e.b, "self loop at {}", e.a);
        assert!(e.a < node_count && e.b < node_count);
        assert!(seen.insert(pair_key(e.a, e.b)), "duplicate pair {:?}", e.key());
    }
}

#[test]
fn surface_layer_has_unique_valid_pairs() {
    let scene = reference_scene();
    let nodes = scene.nodes(Layer::Surface);
    assert_well_formed(scene.edges(Layer::Surface), nodes.len());
    assert!(!scene.edges(Layer::Surface).is_empty());
}

#[test]
fn deep_layer_has_unique_valid_pairs() {
    let scene = reference_scene();
    assert_well_formed(scene.edges(Layer::Deep), scene.nodes(Layer::Deep).len());
}

#[test]
fn proposals_per_node_respect_cap() {
    let scene = reference_scene();
    assert_eq!(scene.nodes(Layer::Surface).len(), 420);
    let mut proposed: HashMap<usize, usize> = HashMap::new();
    let mut incident: HashMap<usize, usize> = HashMap::new();
    for e in scene.edges(Layer::Surface) {
        *proposed.entry(e.a).or_default() += 1;
        *incident.entry(e.a).or_default() += 1;
        *incident.entry(e.b).or_default() += 1;
    }
    assert!(proposed.values().all(|&n| n <= 6));
    // The cap bounds proposals only; being picked by others adds degree.
    let max_incident = incident.values().copied().max().unwrap_or(0);
    assert!(max_incident > 6, "max incident degree {max_incident}");
}

#[test]
fn edges_lie_inside_distance_band() {
    let scene = reference_scene();
    let cfg = scene.config().clone();
    for (layer, params) in [
        (Layer::Surface, &cfg.surface_edges),
        (Layer::Deep, &cfg.deep_edges),
    ] {
        let nodes = scene.nodes(layer);
        for e in scene.edges(layer) {
            let d2 = nodes[e.a].pos.distance_squared(nodes[e.b].pos);
            assert!(d2 > params.min_dist2 && d2 < params.max_dist2);
            let lo = params.strength_min;
            assert!(e.strength >= lo && e.strength < lo + params.strength_span);
        }
    }
}

#[test]
fn admission_roll_thins_the_graph() {
    let scene = reference_scene();
    let deep = scene.nodes(Layer::Deep);
    let mut rng = mesh_core::RandomStream::new(3);
    let full = build_edges(
        deep,
        &EdgeParams {
            admit_probability: 1.0,
            ..EdgeParams::deep()
        },
        &mut rng,
    );
    let thinned = build_edges(deep, &EdgeParams::deep(), &mut rng);
    assert!(thinned.len() < full.len());
}

#[test]
fn reciprocal_proposals_collapse_to_one_edge() {
    let node = |x: f64| Node {
        pos: glam::DVec2::new(x, 0.5),
        phase: 0.0,
        radius: 2.0,
        bio: 0.5,
    };
    // Two nodes inside each other's band: both propose the same pair.
    let nodes = [node(0.3), node(0.4)];
    let mut rng = mesh_core::RandomStream::new(1);
    let edges = build_edges(&nodes, &EdgeParams::surface(), &mut rng);
    assert_eq!(edges.len(), 1);
    let e = edges.get(0).copied().expect("one edge");
    assert_eq!((e.a, e.b), (0, 1));
}

#[test]
fn too_close_and_too_far_pairs_are_skipped() {
    let node = |x: f64| Node {
        pos: glam::DVec2::new(x, 0.5),
        phase: 0.0,
        radius: 2.0,
        bio: 0.5,
    };
    // 0.01 apart is under the band (d2 = 1e-4); 0.5 apart is over it (d2 = 0.25).
    let nodes = [node(0.1), node(0.11), node(0.61)];
    let mut rng = mesh_core::RandomStream::new(1);
    assert!(build_edges(&nodes, &EdgeParams::surface(), &mut rng).is_empty());
}
