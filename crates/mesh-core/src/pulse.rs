//! Travelling light pulses and the heartbeat burst timer.

use crate::config::PulseParams;
use glam::DVec2;

// Busy meshes spawn more often and run pulses faster, up to a ceiling.
const SPAWN_CROWD_DIVISOR: f64 = 40.0;
const SPAWN_CROWD_MAX: f64 = 2.0;
const SPAWN_DAMPING: f64 = 0.6;
const SPEED_CROWD_DIVISOR: f64 = 60.0;
const SPEED_CROWD_MAX: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Surface,
    Deep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    pub from_idx: usize,
    pub to_idx: usize,
    /// Endpoint positions captured at spawn.
    pub from: DVec2,
    pub to: DVec2,
    pub t: f64,
    pub speed: f64,
    pub layer: Layer,
    pub life: f64,
    pub hue: u16,
}

impl Pulse {
    pub fn is_deep(&self) -> bool {
        self.layer == Layer::Deep
    }

    /// Point along the edge at progress `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec2 {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.point_at(self.t)
    }

    pub fn is_spent(&self, retire_threshold: f64) -> bool {
        self.t > retire_threshold || self.life <= 0.0
    }
}

/// Probability that the baseline surface spawn fires this frame.
pub fn spawn_probability(live: usize, params: &PulseParams) -> f64 {
    let crowd = (live as f64 / SPAWN_CROWD_DIVISOR).min(SPAWN_CROWD_MAX);
    params.baseline_rate * (1.0 + crowd) * SPAWN_DAMPING
}

/// Progress multiplier applied to every pulse while `live` pulses exist.
pub fn speed_multiplier(live: usize) -> f64 {
    1.0 + (live as f64 / SPEED_CROWD_DIVISOR).min(SPEED_CROWD_MAX)
}

/// Accumulates frame time and fires once per interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Heartbeat {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl Heartbeat {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Returns true when the accumulated time reaches the interval; the
    /// accumulator then restarts from zero.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0.0;
            return true;
        }
        false
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_probability_saturates() {
        let p = PulseParams::default();
        assert!((spawn_probability(0, &p) - 0.168).abs() < 1e-12);
        assert_eq!(spawn_probability(80, &p), spawn_probability(500, &p));
    }

    #[test]
    fn speed_multiplier_is_capped() {
        assert_eq!(speed_multiplier(0), 1.0);
        assert_eq!(speed_multiplier(90), 2.5);
        assert_eq!(speed_multiplier(10_000), 2.5);
    }
}
