//! Frame clock: timestamps in, clamped elapsed seconds out

use std::time::Instant;

use crate::sim::sanitize_dt;

/// Tracks the previous tick's timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next tick contributes zero time
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Elapsed seconds since the previous call, clamped to a sane range
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        sanitize_dt(dt)
    }
}
