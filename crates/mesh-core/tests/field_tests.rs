use mesh_core::{
    deep_count, derive_deep, sample_surface, BoundaryPolygon, FieldParams, NodeField,
    RandomStream,
};
use std::f64::consts::TAU;

#[test]
fn reference_seed_fills_target_within_budget() {
    let boundary = BoundaryPolygon::generate(2400);
    let params = FieldParams::default();
    let mut rng = RandomStream::new(987_654_321);
    let (nodes, attempts) = sample_surface(&mut rng, &boundary, &params);
    assert!(attempts <= 4500);
    assert!(nodes.len() <= 420);
    assert!(!nodes.is_empty());
    for n in &nodes {
        assert!(boundary.contains(n.pos), "node {:?} outside boundary", n.pos);
        assert!((0.06..=0.94).contains(&n.pos.x));
        assert!((0.06..=0.94).contains(&n.pos.y));
        assert!((0.0..TAU).contains(&n.phase));
        assert!((1.6..3.4).contains(&n.radius));
        assert!((0.0..1.0).contains(&n.bio));
    }
}

#[test]
fn unreachable_target_stops_at_budget() {
    let boundary = BoundaryPolygon::generate(2400);
    let params = FieldParams {
        target_nodes: 100_000,
        attempt_budget: 4500,
        ..FieldParams::default()
    };
    let mut rng = RandomStream::new(5);
    let (nodes, attempts) = sample_surface(&mut rng, &boundary, &params);
    assert_eq!(attempts, 4500);
    assert!(nodes.len() < params.target_nodes);
    assert!(nodes.len() <= attempts);
}

#[test]
fn empty_boundary_yields_no_nodes() {
    let boundary = BoundaryPolygon::generate(0);
    let mut rng = RandomStream::new(9);
    let field = NodeField::generate(&mut rng, &boundary, &FieldParams::default());
    assert!(field.surface.is_empty());
    assert!(field.deep.is_empty());
    assert_eq!(field.attempts, 4500);
}

#[test]
fn deep_count_is_half_surface_capped() {
    let p = FieldParams::default();
    assert_eq!(deep_count(0, &p), 0);
    assert_eq!(deep_count(1, &p), 0);
    assert_eq!(deep_count(7, &p), 3);
    assert_eq!(deep_count(420, &p), 210);
    assert_eq!(deep_count(1000, &p), 220);
}

#[test]
fn deep_nodes_hug_surface_nodes() {
    let boundary = BoundaryPolygon::generate(2400);
    let params = FieldParams::default();
    let mut rng = RandomStream::new(987_654_321);
    let field = NodeField::generate(&mut rng, &boundary, &params);
    assert_eq!(field.deep.len(), deep_count(field.surface.len(), &params));
    let reach = params.deep_jitter / 2.0;
    for d in &field.deep {
        let near = field.surface.iter().any(|s| {
            (d.pos.x - s.pos.x).abs() <= reach && (d.pos.y - s.pos.y).abs() <= reach
        });
        assert!(near, "deep node {:?} strayed", d.pos);
        assert!((1.0..2.0).contains(&d.radius));
    }
}

#[test]
fn derivation_is_deterministic() {
    let boundary = BoundaryPolygon::generate(600);
    let params = FieldParams::default();
    let mut r1 = RandomStream::new(31);
    let mut r2 = RandomStream::new(31);
    let (s1, _) = sample_surface(&mut r1, &boundary, &params);
    let (s2, _) = sample_surface(&mut r2, &boundary, &params);
    assert_eq!(s1, s2);
    assert_eq!(derive_deep(&mut r1, &s1, &params), derive_deep(&mut r2, &s2, &params));
}
