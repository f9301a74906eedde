use super::constants::*;
use super::geometry::Rect;

/// Quadratic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(raw: f64) -> f64 {
    if raw < 0.5 {
        2.0 * raw * raw
    } else {
        1.0 - (-2.0 * raw + 2.0).powi(2) / 2.0
    }
}

/// Horizontal beam position for eased progress `t`: starts `overshoot` left of
/// the viewport and ends `overshoot` past its right edge.
#[inline]
pub fn beam_position(t: f64, viewport_width: f64, overshoot: f64) -> f64 {
    -overshoot + t * (viewport_width + overshoot * 2.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepPhase {
    /// `started_at` is filled in by the first frame of the phase.
    Sweeping { started_at: Option<f64> },
    Pausing { started_at: Option<f64> },
}

/// Global sweep → pause → sweep timeline driven by animation-frame timestamps.
#[derive(Debug, Clone)]
pub struct SweepTimeline {
    phase: SweepPhase,
    sweep_ms: f64,
    pause_ms: f64,
    overshoot_px: f64,
}

impl Default for SweepTimeline {
    fn default() -> Self {
        Self::new(SWEEP_DURATION_MS, SWEEP_PAUSE_MS, BEAM_OVERSHOOT_PX)
    }
}

impl SweepTimeline {
    pub fn new(sweep_ms: f64, pause_ms: f64, overshoot_px: f64) -> Self {
        Self {
            phase: SweepPhase::Sweeping { started_at: None },
            sweep_ms,
            pause_ms,
            overshoot_px,
        }
    }

    #[inline]
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// Advances the timeline to `ts` (milliseconds) and returns the beam
    /// position to broadcast, or `None` while pausing.
    pub fn tick(&mut self, ts: f64, viewport_width: f64) -> Option<f64> {
        match &mut self.phase {
            SweepPhase::Pausing { started_at } => {
                let start = *started_at.get_or_insert(ts);
                if ts - start >= self.pause_ms {
                    self.phase = SweepPhase::Sweeping { started_at: None };
                }
                None
            }
            SweepPhase::Sweeping { started_at } => {
                let start = *started_at.get_or_insert(ts);
                let raw = ((ts - start) / self.sweep_ms).clamp(0.0, 1.0);
                let px = beam_position(ease_in_out_quad(raw), viewport_width, self.overshoot_px);
                if raw >= 1.0 {
                    self.phase = SweepPhase::Pausing { started_at: None };
                }
                Some(px)
            }
        }
    }
}

/// Beam values written on one chrome-styled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamStyle {
    pub offset_x: i64,
    pub offset_y: i64,
    pub beam_pos: i64,
}

impl BeamStyle {
    pub fn new(element: &Rect, beam_px: f64) -> Self {
        Self {
            offset_x: element.left.round() as i64,
            offset_y: element.top.round() as i64,
            beam_pos: beam_px.round() as i64,
        }
    }

    pub fn properties(&self) -> [(&'static str, String); 3] {
        [
            (PROP_BEAM_OFFSET_X, self.offset_x.to_string()),
            (PROP_BEAM_OFFSET_Y, self.offset_y.to_string()),
            (PROP_BEAM_POS, self.beam_pos.to_string()),
        ]
    }
}
