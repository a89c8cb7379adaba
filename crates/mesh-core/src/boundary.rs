//! Organic blob outline that constrains surface-node placement.
//!
//! The outline is only used for inside/outside tests and is never drawn.

use glam::DVec2;
use std::f64::consts::TAU;

/// Added to the edge slope denominator so horizontal edges never divide by zero.
pub const EDGE_EPSILON: f64 = 1e-12;

const SCALE: f64 = 0.0618;
const CENTER: f64 = 0.5;

/// Polar radius of the outline at angle `theta` (radians, `[0, 2π)`).
fn radius(theta: f64) -> f64 {
    let c5 = (5.0 * theta).cos();
    5.12 + 2.48 * theta.cos() + 1.62 * (2.0 * theta).cos() + 0.94 * (3.0 * theta).sin()
        - 1.30 * (4.0 * theta).cos()
        + 0.78 * (6.0 * theta).cos()
        + 1.12 * c5 * c5 * c5
        + 1.02 * (-32.0 * (theta - 1.05).powi(2)).exp()
        - 0.68 * (-48.0 * (theta + 1.32).powi(2)).exp()
        + 0.38 * (3.0 * theta).tanh()
        + 0.36 * (8.0 * theta).sin()
}

fn outline_point(theta: f64) -> DVec2 {
    let r = radius(theta);
    let x = CENTER + SCALE * (r * theta.cos() + 0.46 * (7.0 * theta).sin());
    let y = CENTER
        + SCALE * (r * theta.sin() + 1.12 * (3.0 * theta).tanh() + 0.32 * (9.0 * theta).sin());
    DVec2::new(x, y)
}

/// Closed loop of normalized points; the last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPolygon {
    points: Vec<DVec2>,
}

impl BoundaryPolygon {
    /// Sample the outline at `n` evenly spaced angles.
    pub fn generate(n: usize) -> Self {
        let points = (0..n)
            .map(|i| outline_point(i as f64 / n as f64 * TAU))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: DVec2) -> bool {
        point_in_polygon(p, &self.points)
    }

    /// Area centroid (shoelace). Falls back to the vertex mean for
    /// degenerate, zero-area outlines.
    pub fn centroid(&self) -> DVec2 {
        let n = self.points.len();
        if n == 0 {
            return DVec2::splat(CENTER);
        }
        let mut area2 = 0.0;
        let mut acc = DVec2::ZERO;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let cross = a.perp_dot(b);
            area2 += cross;
            acc += (a + b) * cross;
        }
        if area2.abs() < f64::EPSILON {
            return self.points.iter().copied().sum::<DVec2>() / n as f64;
        }
        acc / (3.0 * area2)
    }
}

/// Even-odd ray cast: `p` is inside when a horizontal ray from it crosses an
/// odd number of polygon edges.
pub fn point_in_polygon(p: DVec2, poly: &[DVec2]) -> bool {
    let Some(&last) = poly.last() else {
        return false;
    };
    let mut inside = false;
    let mut b = last;
    for &a in poly {
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y + EDGE_EPSILON) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        b = a;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_membership() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        assert!(point_in_polygon(DVec2::new(0.5, 0.5), &square));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &square));
        assert!(!point_in_polygon(DVec2::new(0.5, -0.1), &square));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!point_in_polygon(DVec2::ZERO, &[]));
    }
}
