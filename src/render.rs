//! `Surface` implementation over the browser's 2D canvas context.

use glam::DVec2;
use mesh_core::{Blend, Color, LineCap, Paint, Surface};
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    fn gradient_stops(gradient: &web::CanvasGradient, from: Color, to: Color) {
        _ = gradient.add_color_stop(0.0, &from.to_css());
        _ = gradient.add_color_stop(1.0, &to.to_css());
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::VerticalGradient { top, bottom, height } => {
                let g = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, *height);
                Self::gradient_stops(&g, *top, *bottom);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
            Paint::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => {
                match self.ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    0.0,
                    center.x,
                    center.y,
                    radius.max(0.0),
                ) {
                    Ok(g) => {
                        Self::gradient_stops(&g, *inner, *outer);
                        self.ctx.set_fill_style_canvas_gradient(&g);
                    }
                    // Non-finite geometry: draw nothing rather than a hard disc.
                    Err(_) => self.ctx.set_fill_style_str(&Color::Transparent.to_css()),
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.as_css());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
