//! Per-frame drawing of the mesh onto a [`Surface`].
//!
//! Paint order: background and fog, deep edges, surface edges, pulses, then
//! surface nodes on top. Spawning and the heartbeat are advanced between the
//! edge and pulse passes so new pulses draw in the frame they appear.

use crate::constants::*;
use crate::edges::EdgeSet;
use crate::field::Node;
use crate::pulse::{Layer, Pulse};
use crate::scene::Scene;
use crate::surface::{Blend, Color, LineCap, Paint, Surface};
use crate::timing::{FrameClock, FrameTime};
use crate::viewport::Viewport;
use glam::DVec2;
use smallvec::SmallVec;

/// One disc of a pulse's fading tail, in normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailSample {
    pub pos: DVec2,
    pub size: f64,
    pub alpha: f64,
}

pub type Tail = SmallVec<[TailSample; PULSE_TAIL_SAMPLES]>;

/// Head size swells towards the middle of the edge.
pub fn pulse_head_size(pulse: &Pulse) -> f64 {
    let base = if pulse.is_deep() {
        PULSE_HEAD_DEEP
    } else {
        PULSE_HEAD_SURFACE
    };
    base * (0.8 + 0.6 * (1.0 - (0.5 - pulse.t).abs()))
}

/// Samples from the head backwards; stops at the start of the edge.
pub fn pulse_tail(pulse: &Pulse) -> Tail {
    let head = pulse_head_size(pulse);
    let (alpha_scale, size_scale) = if pulse.is_deep() {
        (PULSE_DEEP_ALPHA, PULSE_DEEP_SIZE)
    } else {
        (1.0, 1.0)
    };
    let n = PULSE_TAIL_SAMPLES as f64;
    let mut tail = Tail::new();
    for s in 0..PULSE_TAIL_SAMPLES {
        let sf = s as f64;
        let tt = pulse.t - sf * PULSE_TAIL_SPACING;
        if tt < 0.0 {
            break;
        }
        let alpha = PULSE_TAIL_ALPHA * (1.0 - sf / n) * (1.0 - tt) * alpha_scale;
        tail.push(TailSample {
            pos: pulse.point_at(tt),
            size: head * (1.0 - sf / (n + 1.0)) * size_scale,
            alpha: alpha.max(0.0),
        });
    }
    tail
}

/// Breathing factor for a node at animation time `seconds`.
#[inline]
pub fn breath(node: &Node, seconds: f64) -> f64 {
    NODE_BREATH_BASE + NODE_BREATH_DEPTH * (seconds * NODE_BREATH_RATE + node.phase).sin()
}

#[derive(Debug, Default)]
pub struct FrameRenderer {
    clock: FrameClock,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame at host timestamp `now_ms`, advancing the scene's
    /// pulses along the way.
    pub fn render<S: Surface>(
        &mut self,
        scene: &mut Scene,
        surface: &mut S,
        viewport: &Viewport,
        now_ms: f64,
    ) -> FrameTime {
        let ft = self.clock.tick(now_ms);

        draw_background(surface, viewport, ft.seconds);

        surface.set_line_cap(LineCap::Round);
        draw_deep_edges(surface, viewport, scene.nodes(Layer::Deep), scene.edges(Layer::Deep));
        draw_surface_edges(
            surface,
            viewport,
            scene.nodes(Layer::Surface),
            scene.edges(Layer::Surface),
        );

        scene.tick_spawn();
        scene.advance_heartbeat(ft.dt_ms());
        scene.step_pulses(|p| draw_pulse(surface, viewport, p));

        draw_nodes(surface, viewport, scene.nodes(Layer::Surface), ft.seconds);
        ft
    }
}

fn draw_background<S: Surface>(surface: &mut S, viewport: &Viewport, seconds: f64) {
    let size = viewport.size();
    surface.fill_rect(
        DVec2::ZERO,
        size,
        &Paint::VerticalGradient {
            top: BACKGROUND_TOP,
            bottom: BACKGROUND_BOTTOM,
            height: size.y,
        },
    );

    let [mx, my, mw, mh] = FOG_MARGIN;
    let shift = (seconds * FOG_DRIFT_RATE).sin() * FOG_DRIFT_PX;
    surface.set_global_alpha(FOG_ALPHA);
    surface.fill_rect(
        DVec2::new(mx + shift, my),
        size + DVec2::new(mw, mh),
        &Paint::Solid(FOG_COLOR),
    );
    surface.set_global_alpha(1.0);
}

fn draw_deep_edges<S: Surface>(surface: &mut S, viewport: &Viewport, nodes: &[Node], edges: &EdgeSet) {
    for e in edges {
        let a = viewport.to_screen(nodes[e.a].pos);
        let b = viewport.to_screen(nodes[e.b].pos);
        for pass in DEEP_EDGE_PASSES {
            surface.stroke_line(a, b, pass.width * e.strength, pass.color);
        }
    }
}

fn draw_surface_edges<S: Surface>(
    surface: &mut S,
    viewport: &Viewport,
    nodes: &[Node],
    edges: &EdgeSet,
) {
    for e in edges {
        let a = viewport.to_screen(nodes[e.a].pos);
        let b = viewport.to_screen(nodes[e.b].pos);
        for pass in SURFACE_EDGE_PASSES {
            surface.stroke_line(a, b, pass.width * e.strength, pass.color);
        }
        let core = SURFACE_EDGE_CORE_FLOOR + e.strength * SURFACE_EDGE_CORE_GAIN;
        surface.stroke_line(
            a,
            b,
            SURFACE_EDGE_CORE.width * core,
            SURFACE_EDGE_CORE.color,
        );
    }
}

fn draw_pulse<S: Surface>(surface: &mut S, viewport: &Viewport, pulse: &Pulse) {
    let head = viewport.to_screen(pulse.position());
    let lightness = if pulse.is_deep() {
        PULSE_LIGHTNESS_DEEP
    } else {
        PULSE_LIGHTNESS_SURFACE
    };
    // Every tail disc shares a gradient anchored on the head, so discs far
    // behind it fade out faster than their own alpha says.
    for sample in pulse_tail(pulse) {
        let paint = Paint::RadialGradient {
            center: head,
            radius: sample.size * PULSE_GLOW_REACH,
            inner: Color::hsla(
                f64::from(pulse.hue),
                PULSE_SATURATION,
                lightness,
                sample.alpha,
            ),
            outer: Color::Transparent,
        };
        surface.set_blend(Blend::Lighter);
        surface.fill_circle(
            viewport.to_screen(sample.pos),
            sample.size * PULSE_DISC_SCALE,
            &paint,
        );
        surface.set_blend(Blend::SourceOver);
    }
}

fn draw_nodes<S: Surface>(surface: &mut S, viewport: &Viewport, nodes: &[Node], seconds: f64) {
    let [r, g, b] = NODE_DOT_RGB;
    for n in nodes {
        let k = breath(n, seconds);
        let center = viewport.to_screen(n.pos);
        let glow = n.radius * NODE_GLOW_SCALE * k;

        surface.set_blend(Blend::Lighter);
        surface.fill_circle(
            center,
            glow,
            &Paint::RadialGradient {
                center,
                radius: glow,
                inner: NODE_GLOW_COLOR,
                outer: Color::Transparent,
            },
        );
        surface.set_blend(Blend::SourceOver);

        let alpha = NODE_DOT_ALPHA_MAX - n.bio * NODE_DOT_BIO_DIM;
        surface.fill_circle(
            center,
            n.radius * NODE_DOT_SCALE * k,
            &Paint::Solid(Color::rgba(r, g, b, alpha)),
        );
    }
}
