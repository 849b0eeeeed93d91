//! Timed rect interpolation for animated tile moves.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use huddle_common::types::Rect;

/// Symmetric ease-in-out over `t` in `[0, 1]`.
pub fn swing(t: f64) -> f64 {
    0.5 - (PI * t.clamp(0.0, 1.0)).cos() / 2.0
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One tile moving from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Rect,
    pub to: Rect,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Transition {
    pub fn new(from: Rect, to: Rect, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The eased rect at `now`. Exactly `to` once finished.
    pub fn sample(&self, now: Instant) -> Rect {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        let t = swing(p);
        Rect::new(
            lerp(self.from.x, self.to.x, t),
            lerp(self.from.y, self.to.y, t),
            lerp(self.from.width, self.to.width, t),
            lerp(self.from.height, self.to.height, t),
        )
    }
}
