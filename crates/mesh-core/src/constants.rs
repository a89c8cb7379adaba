use crate::surface::Color;

// Shared visual tuning constants used by the frame renderer.

// Background
pub const BACKGROUND_TOP: Color = Color::rgb(0x00, 0x16, 0x1a);
pub const BACKGROUND_BOTTOM: Color = Color::rgb(0x00, 0x02, 0x04);
pub const FOG_COLOR: Color = Color::rgba(0, 8, 12, 1.0);
pub const FOG_ALPHA: f64 = 0.12;
pub const FOG_DRIFT_PX: f64 = 30.0; // horizontal swing amplitude
pub const FOG_DRIFT_RATE: f64 = 0.12; // radians per second
pub const FOG_MARGIN: [f64; 4] = [-40.0, -20.0, 120.0, 40.0]; // x, y, extra w, extra h

/// One stroke of a multi-pass "glow" line: width multiplier and colour.
#[derive(Clone, Copy, Debug)]
pub struct StrokePass {
    pub width: f64,
    pub color: Color,
}

// Deep edges: wide faint pass then narrow bright pass, widths scale with strength.
pub const DEEP_EDGE_PASSES: [StrokePass; 2] = [
    StrokePass {
        width: 2.6,
        color: Color::rgba(0, 160, 140, 0.055),
    },
    StrokePass {
        width: 0.9,
        color: Color::rgba(0, 210, 180, 0.12),
    },
];

// Surface edges. The last pass keeps a floor so weak edges still show a core.
pub const SURFACE_EDGE_PASSES: [StrokePass; 2] = [
    StrokePass {
        width: 1.2,
        color: Color::rgba(26, 170, 150, 0.035),
    },
    StrokePass {
        width: 0.9,
        color: Color::rgba(80, 230, 200, 0.065),
    },
];
pub const SURFACE_EDGE_CORE: StrokePass = StrokePass {
    width: 0.5,
    color: Color::rgba(120, 255, 220, 0.12),
};
pub const SURFACE_EDGE_CORE_FLOOR: f64 = 0.6;
pub const SURFACE_EDGE_CORE_GAIN: f64 = 0.8;

// Pulses
pub const PULSE_HEAD_SURFACE: f64 = 2.8;
pub const PULSE_HEAD_DEEP: f64 = 2.0;
pub const PULSE_TAIL_SAMPLES: usize = 6;
pub const PULSE_TAIL_SPACING: f64 = 0.038; // progress units between tail samples
pub const PULSE_TAIL_ALPHA: f64 = 0.34;
pub const PULSE_DEEP_ALPHA: f64 = 0.9;
pub const PULSE_DEEP_SIZE: f64 = 0.6;
pub const PULSE_SATURATION: f64 = 88.0;
pub const PULSE_LIGHTNESS_SURFACE: f64 = 62.0;
pub const PULSE_LIGHTNESS_DEEP: f64 = 55.0;
pub const PULSE_GLOW_REACH: f64 = 1.4; // gradient radius relative to sample size
pub const PULSE_DISC_SCALE: f64 = 0.9;

// Nodes
pub const NODE_BREATH_BASE: f64 = 0.78;
pub const NODE_BREATH_DEPTH: f64 = 0.32;
pub const NODE_BREATH_RATE: f64 = 1.42;
pub const NODE_GLOW_SCALE: f64 = 1.6;
pub const NODE_GLOW_COLOR: Color = Color::rgba(16, 200, 170, 0.12);
pub const NODE_DOT_SCALE: f64 = 0.9;
pub const NODE_DOT_RGB: [u8; 3] = [120, 255, 220];
pub const NODE_DOT_ALPHA_MAX: f64 = 0.9;
pub const NODE_DOT_BIO_DIM: f64 = 0.4; // dot alpha lost at bio = 1

// Frame timing
pub const FALLBACK_DT_SEC: f64 = 0.016;
pub const MAX_DT_SEC: f64 = 0.05;
