//! Mapping between normalized mesh space and canvas pixels.

use crate::config::ViewportParams;
use glam::DVec2;

/// CSS size of the drawing region plus the device pixel ratio of its backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Size the viewport to a container rect, never going below the minimums.
    pub fn fit(rect_width: f64, rect_height: f64, dpr: f64, params: &ViewportParams) -> Self {
        Self {
            width: floor_or_zero(rect_width).max(params.min_width),
            height: floor_or_zero(rect_height).max(params.min_height),
            dpr: sanitize_dpr(dpr),
        }
    }

    /// Fit to the container's box, falling back to the canvas' own box per
    /// axis when the container has none. The canvas box carries the inline
    /// sizes of the previous fit.
    pub fn fit_to_host(
        container: Option<DVec2>,
        canvas: DVec2,
        dpr: f64,
        params: &ViewportParams,
    ) -> Self {
        let measured = match container {
            Some(c) => DVec2::select(c.cmpgt(DVec2::ZERO), c, canvas),
            None => canvas,
        };
        Self::fit(measured.x, measured.y, dpr, params)
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn to_screen(&self, p: DVec2) -> DVec2 {
        p * self.size()
    }
}

/// Treat missing or nonsensical ratios as 1.
pub fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr > 0.0 && dpr.is_finite() {
        dpr
    } else {
        1.0
    }
}

fn floor_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v.floor()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_minimum_size() {
        let v = Viewport::fit(320.4, 200.0, 2.0, &ViewportParams::default());
        assert_eq!((v.width, v.height), (600.0, 300.0));
        assert_eq!(v.backing_size(), (1200, 600));
    }

    #[test]
    fn floors_fractional_css_size() {
        let v = Viewport::fit(1280.7, 620.2, 1.5, &ViewportParams::default());
        assert_eq!((v.width, v.height), (1280.0, 620.0));
        assert_eq!(v.backing_size(), (1920, 930));
    }

    #[test]
    fn refit_follows_container_not_stale_canvas() {
        let params = ViewportParams::default();
        let first = Viewport::fit_to_host(
            Some(DVec2::new(1280.0, 620.0)),
            DVec2::new(1280.0, 620.0),
            1.0,
            &params,
        );
        assert_eq!(first.width, 1280.0);
        // Window shrank; the canvas still reports its inline 1280px width.
        let refit = Viewport::fit_to_host(
            Some(DVec2::new(900.0, 620.0)),
            first.size(),
            1.0,
            &params,
        );
        assert_eq!((refit.width, refit.height), (900.0, 620.0));
        let tiny =
            Viewport::fit_to_host(Some(DVec2::new(400.0, 620.0)), first.size(), 2.0, &params);
        assert_eq!(tiny.backing_size(), (1200, 1240));
    }

    #[test]
    fn collapsed_container_falls_back_to_canvas_box() {
        let params = ViewportParams::default();
        let v = Viewport::fit_to_host(
            Some(DVec2::new(1024.0, 0.0)),
            DVec2::new(1280.0, 620.0),
            1.0,
            &params,
        );
        assert_eq!((v.width, v.height), (1024.0, 620.0));
        let orphan = Viewport::fit_to_host(None, DVec2::new(700.0, 350.0), 1.0, &params);
        assert_eq!((orphan.width, orphan.height), (700.0, 350.0));
    }

    #[test]
    fn zero_dpr_falls_back_to_one() {
        let v = Viewport::fit(800.0, 400.0, 0.0, &ViewportParams::default());
        assert_eq!(v.dpr, 1.0);
    }
}
