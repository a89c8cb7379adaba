//! Headless driver: builds the mesh, runs a fixed-step animation against a
//! recording surface and logs what happened.

use anyhow::Context;
use instant::Instant;
use mesh_core::{FrameRenderer, Layer, MeshConfig, OpCounts, Recorder, Scene, Viewport};

const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 600;
const CSS_WIDTH: f64 = 1280.0;
const CSS_HEIGHT: f64 = 620.0;

struct RunOptions {
    seed: u32,
    frames: u64,
}

fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name}={raw:?} is not a valid value")),
        Err(_) => Ok(default),
    }
}

fn read_options() -> anyhow::Result<RunOptions> {
    Ok(RunOptions {
        seed: env_or("MESH_SEED", MeshConfig::default().seed)?,
        frames: env_or("MESH_FRAMES", DEFAULT_FRAMES)?,
    })
}

fn run(opts: &RunOptions) -> anyhow::Result<()> {
    let config = MeshConfig::with_seed(opts.seed);
    let viewport = Viewport::fit(CSS_WIDTH, CSS_HEIGHT, 1.0, &config.viewport);

    let started = Instant::now();
    let mut scene = Scene::new(config).context("building scene")?;
    log::info!(
        "[native] generated in {:.1}ms: boundary={} surface={}/{} deep={}/{}",
        started.elapsed().as_secs_f64() * 1000.0,
        scene.boundary().len(),
        scene.nodes(Layer::Surface).len(),
        scene.edges(Layer::Surface).len(),
        scene.nodes(Layer::Deep).len(),
        scene.edges(Layer::Deep).len(),
    );

    let mut renderer = FrameRenderer::new();
    let mut surface = Recorder::new();
    let mut totals = OpCounts::default();
    let mut peak_pulses = 0;
    let started = Instant::now();
    for frame in 0..opts.frames {
        let now_ms = (frame + 1) as f64 * FRAME_MS;
        renderer.render(&mut scene, &mut surface, &viewport, now_ms);
        let c = surface.counts();
        totals.rects += c.rects;
        totals.lines += c.lines;
        totals.circles += c.circles;
        totals.additive_circles += c.additive_circles;
        surface.clear();
        peak_pulses = peak_pulses.max(scene.pulses().len());
    }

    let stats = scene.stats();
    log::info!(
        "[native] {} frames in {:.1}ms ({:.1} simulated s)",
        opts.frames,
        started.elapsed().as_secs_f64() * 1000.0,
        opts.frames as f64 * FRAME_MS / 1000.0
    );
    log::info!(
        "[native] pulses spawned={} retired={} live={} peak={} heartbeats={}",
        stats.spawned,
        stats.retired,
        scene.pulses().len(),
        peak_pulses,
        stats.heartbeats
    );
    log::info!(
        "[native] draw ops rects={} lines={} discs={} (additive {})",
        totals.rects,
        totals.lines,
        totals.circles,
        totals.additive_circles
    );
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = read_options().and_then(|opts| run(&opts));
    if let Err(e) = result {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
