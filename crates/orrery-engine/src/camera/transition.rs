use super::pose::CameraPose;
use crate::extensions::easing::Easing;

/// One in-flight camera move.
///
/// Evaluated by sampling at an absolute time rather than by accumulating
/// deltas, so overwriting it mid-flight never leaves a stale callback behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: CameraPose,
    pub to: CameraPose,
    /// Seconds on the scene clock.
    pub start_time: f64,
    /// Seconds. Zero or negative durations complete immediately.
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: CameraPose, to: CameraPose, start_time: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing,
        }
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
        }
    }

    /// Interpolated pose at `now`. Returns `to` exactly once complete.
    pub fn pose_at(&self, now: f64) -> CameraPose {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(&self.to, self.easing.apply(t))
        }
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration.max(0.0)
    }
}
