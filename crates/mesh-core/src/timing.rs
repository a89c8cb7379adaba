use crate::constants::{FALLBACK_DT_SEC, MAX_DT_SEC};

/// Per-frame timing derived from the host's monotonic millisecond stamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Absolute animation time in seconds.
    pub seconds: f64,
    /// Step since the previous frame in seconds, clamped to `MAX_DT_SEC`.
    pub dt: f64,
}

impl FrameTime {
    pub fn dt_ms(&self) -> f64 {
        self.dt * 1000.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let raw = (now_ms - self.last_ms) / 1000.0;
        self.last_ms = now_ms;
        let dt = if raw > 0.0 && raw.is_finite() {
            raw.min(MAX_DT_SEC)
        } else {
            FALLBACK_DT_SEC
        };
        FrameTime {
            seconds: now_ms * 0.001,
            dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(16.0);
        let ft = clock.tick(2016.0);
        assert_eq!(ft.dt, MAX_DT_SEC);
        assert!((ft.seconds - 2.016).abs() < 1e-12);
    }

    #[test]
    fn repeated_stamp_uses_fallback() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(100.0).dt, FALLBACK_DT_SEC);
    }
}
