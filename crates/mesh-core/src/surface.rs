//! Render-target abstraction.
//!
//! The frame renderer only ever talks to a [`Surface`]. The web front-end
//! implements it over `CanvasRenderingContext2d`; [`Recorder`] keeps the
//! operations in memory for tests and the headless driver.

use glam::DVec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
    Transparent,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
            Color::Transparent => 0.0,
        }
    }

    /// CSS colour string accepted by canvas fill/stroke styles and gradient stops.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a:.4})"),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({h:.0}, {s:.0}%, {l:.0}%, {a:.4})"),
            Color::Transparent => f.write_str("transparent"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient from y = 0 (`top`) to y = `height` (`bottom`).
    VerticalGradient {
        top: Color,
        bottom: Color,
        height: f64,
    },
    /// Radial gradient from `inner` at `center` to `outer` at `radius`.
    RadialGradient {
        center: DVec2,
        radius: f64,
        inner: Color,
        outer: Color,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Blend {
    #[default]
    SourceOver,
    /// Additive compositing.
    Lighter,
}

impl Blend {
    pub fn as_css(&self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    pub fn as_css(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

/// Operations a 2D drawing target must support, in CSS pixel coordinates.
pub trait Surface {
    fn set_blend(&mut self, blend: Blend);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color);
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        origin: DVec2,
        size: DVec2,
        paint: Paint,
        alpha: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Color,
    },
    Circle {
        center: DVec2,
        radius: f64,
        paint: Paint,
        blend: Blend,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub rects: usize,
    pub lines: usize,
    pub circles: usize,
    pub additive_circles: usize,
}

/// In-memory surface that remembers every draw call.
#[derive(Debug)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
    pub blend: Blend,
    pub global_alpha: f64,
    pub line_cap: LineCap,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            blend: Blend::default(),
            global_alpha: 1.0,
            line_cap: LineCap::default(),
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn counts(&self) -> OpCounts {
        let mut c = OpCounts::default();
        for op in &self.ops {
            match op {
                DrawOp::Rect { .. } => c.rects += 1,
                DrawOp::Line { .. } => c.lines += 1,
                DrawOp::Circle { blend, .. } => {
                    c.circles += 1;
                    if *blend == Blend::Lighter {
                        c.additive_circles += 1;
                    }
                }
            }
        }
        c
    }
}

impl Surface for Recorder {
    fn set_blend(&mut self, blend: Blend) {
        self.blend = blend;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.ops.push(DrawOp::Rect {
            origin,
            size,
            paint: paint.clone(),
            alpha: self.global_alpha,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            paint: paint.clone(),
            blend: self.blend,
        });
    }
}
