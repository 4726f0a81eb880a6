//! Geometry transition for maximize/restore

use super::ease_in_out;
use crate::math::Rect;

/// Eased interpolation between two rects over a fixed duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryTransition {
    from: Rect,
    to: Rect,
    start_ms: f64,
    duration_ms: f64,
}

impl GeometryTransition {
    /// Start a transition at `now_ms`
    pub fn new(from: Rect, to: Rect, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Check if the transition has finished
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Rect to render at `now_ms`
    pub fn current(&self, now_ms: f64) -> Rect {
        if self.is_complete(now_ms) {
            return self.to;
        }
        Rect::lerp(&self.from, &self.to, ease_in_out(self.progress(now_ms)))
    }

    /// Final rect
    #[inline]
    pub fn target(&self) -> Rect {
        self.to
    }
}
