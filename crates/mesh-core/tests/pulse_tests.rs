use mesh_core::{Layer, MeshConfig, Scene};

fn scene_with(config: MeshConfig) -> Scene {
    Scene::new(config).expect("valid config")
}

#[test]
fn heartbeat_fires_burst_at_interval() {
    let mut scene = scene_with(MeshConfig::default());
    // 159 frames of 50ms fall just short of 8000ms.
    for _ in 0..159 {
        assert_eq!(scene.advance_heartbeat(50.0), 0);
    }
    assert!(scene.pulses().is_empty());
    assert_eq!(scene.heartbeat().elapsed_ms(), 7950.0);

    assert_eq!(scene.advance_heartbeat(50.0), 14);
    assert_eq!(scene.pulses().len(), 14);
    assert!(scene.pulses().iter().all(|p| p.layer == Layer::Surface));
    assert_eq!(scene.heartbeat().elapsed_ms(), 0.0);
    assert_eq!(scene.stats().heartbeats, 1);
}

#[test]
fn spawned_pulse_snapshots_edge_endpoints() {
    let mut scene = scene_with(MeshConfig::default());
    assert!(scene.spawn_on_edge(0, Layer::Surface));
    let edge = *scene.edges(Layer::Surface).get(0).expect("edge 0");
    let nodes = scene.nodes(Layer::Surface);
    let p = &scene.pulses()[0];
    assert_eq!((p.from_idx, p.to_idx), (edge.a, edge.b));
    assert_eq!(p.from, nodes[edge.a].pos);
    assert_eq!(p.to, nodes[edge.b].pos);
    assert_eq!(p.t, 0.0);
    assert_eq!(p.life, 1.0);
    assert!((170..210).contains(&p.hue));
    assert!(p.speed >= 0.0025 && p.speed < 0.007);
}

#[test]
fn deep_pulses_run_slower() {
    let mut scene = scene_with(MeshConfig::default());
    if scene.edges(Layer::Deep).is_empty() {
        return;
    }
    assert!(scene.spawn_on_edge(0, Layer::Deep));
    let p = &scene.pulses()[0];
    assert!(p.is_deep());
    assert!(p.speed < 0.007 * 0.6);
}

#[test]
fn out_of_range_edge_spawns_nothing() {
    let mut scene = scene_with(MeshConfig::default());
    let len = scene.edges(Layer::Surface).len();
    assert!(!scene.spawn_on_edge(len, Layer::Surface));
    assert!(scene.pulses().is_empty());
    assert_eq!(scene.stats().spawned, 0);
}

#[test]
fn progress_is_monotonic_until_single_retirement() {
    let mut scene = scene_with(MeshConfig::default());
    assert!(scene.spawn_on_edge(3, Layer::Surface));
    let mut seen = Vec::new();
    for _ in 0..10_000 {
        scene.step_pulses(|p| seen.push(p.t));
        if scene.pulses().is_empty() {
            break;
        }
    }
    assert!(scene.pulses().is_empty(), "pulse never retired");
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert!(seen.iter().all(|&t| t <= 1.01));
    assert_eq!(scene.stats().retired, 1);

    scene.step_pulses(|_| panic!("no pulses should remain"));
    assert_eq!(scene.stats().retired, 1);
}

#[test]
fn exhausted_life_retires_before_edge_end() {
    let mut config = MeshConfig::default();
    config.pulses.life_decay = 0.4;
    let mut scene = scene_with(config);
    assert!(scene.spawn_on_edge(0, Layer::Surface));
    let mut visits = 0;
    for _ in 0..10 {
        scene.step_pulses(|_| visits += 1);
    }
    // life 1.0 -> 0.6 -> 0.2 -> -0.2, retired on the fourth step
    assert_eq!(visits, 3);
    assert_eq!(scene.stats().retired, 1);
    assert!(scene.pulses().is_empty());
}

#[test]
fn spawning_is_reproducible_for_a_seed() {
    let mut a = scene_with(MeshConfig::default());
    let mut b = scene_with(MeshConfig::default());
    for _ in 0..500 {
        a.tick_spawn();
        b.tick_spawn();
        a.step_pulses(|_| {});
        b.step_pulses(|_| {});
    }
    assert_eq!(a.pulses(), b.pulses());
    assert!(a.stats().spawned > 0);
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = MeshConfig::default();
    config.boundary_points = 2;
    assert!(Scene::new(config).is_err());
}

#[test]
fn hue_past_the_colour_wheel_is_rejected() {
    let mut config = MeshConfig::default();
    config.pulses.hue_base = 65530;
    assert!(matches!(
        Scene::new(config),
        Err(mesh_core::ConfigError::HueOutOfRange { .. })
    ));
}
