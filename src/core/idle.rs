use super::constants::*;
use super::geometry::Rect;
use glam::DVec2;

/// Parametric drift position inside `frame` for a given angle.
#[inline]
pub fn drift_position(angle: f64, frame: &Rect) -> DVec2 {
    DVec2::new(
        frame.left + frame.width * (DRIFT_CENTER_X + angle.sin() * DRIFT_SWING_X),
        frame.top + frame.height * (DRIFT_CENTER_Y + (angle * DRIFT_Y_FREQUENCY).cos() * DRIFT_SWING_Y),
    )
}

/// ACTIVE/IDLE state machine plus the drift angle.
///
/// Time is supplied by the caller in milliseconds so the tracker works with any
/// monotonic clock.
#[derive(Debug, Clone)]
pub struct IdleTracker {
    threshold_ms: f64,
    step: f64,
    last_activity_ms: f64,
    idle: bool,
    angle: f64,
}

impl IdleTracker {
    /// Starts ACTIVE with the countdown armed at `now`.
    pub fn new(now: f64, threshold_ms: f64, step: f64) -> Self {
        Self {
            threshold_ms,
            step,
            last_activity_ms: now,
            idle: false,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Real pointer movement: back to ACTIVE and restart the countdown.
    /// Returns `true` if this ended an idle period.
    pub fn record_activity(&mut self, now: f64) -> bool {
        let was_idle = self.idle;
        self.idle = false;
        self.last_activity_ms = now;
        was_idle
    }

    /// Whether the threshold has elapsed since the last activity.
    #[inline]
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_activity_ms >= self.threshold_ms
    }

    /// Time left before the tracker may go idle.
    #[inline]
    pub fn remaining_ms(&self, now: f64) -> f64 {
        (self.threshold_ms - (now - self.last_activity_ms)).max(0.0)
    }

    /// ACTIVE → IDLE if the countdown has run out. Returns `true` on the
    /// transition only.
    pub fn enter_idle(&mut self, now: f64) -> bool {
        if self.idle || !self.is_due(now) {
            return false;
        }
        self.idle = true;
        true
    }

    /// One drift frame: advances the angle and returns the synthesized pointer,
    /// or `None` when not idle.
    pub fn drift_step(&mut self, frame: &Rect) -> Option<DVec2> {
        if !self.idle {
            return None;
        }
        self.angle += self.step;
        Some(drift_position(self.angle, frame))
    }
}
