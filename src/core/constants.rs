// Timing, motion and style-property constants shared by the pure effect modules.

// Glint sweep
pub const SWEEP_DURATION_MS: f64 = 11_000.0; // time for the beam to cross the viewport
pub const SWEEP_PAUSE_MS: f64 = 1_500.0; // rest between sweeps
pub const BEAM_OVERSHOOT_PX: f64 = 300.0; // beam travels this far past both edges

// Idle detection and drift
pub const IDLE_THRESHOLD_MS: f64 = 3_000.0;
pub const DRIFT_ANGLE_STEP: f64 = 0.004; // radians per frame
pub const DRIFT_CENTER_X: f64 = 0.5;
pub const DRIFT_SWING_X: f64 = 0.65;
pub const DRIFT_CENTER_Y: f64 = 0.4;
pub const DRIFT_SWING_Y: f64 = 0.2;
pub const DRIFT_Y_FREQUENCY: f64 = 0.4; // relative to the x oscillation

// Pointer position before any input, as a fraction of the viewport
pub const INITIAL_POINTER_FRACTION: [f64; 2] = [0.38, 0.3];

// Reflection mapping
pub const SECONDARY_X_SCALE: f64 = 0.4;
pub const SECONDARY_Y_SCALE: f64 = 0.3;
pub const SPECULAR_X_SCALE: f64 = 0.9;
pub const SPECULAR_X_OFFSET: f64 = 5.0;
pub const SPECULAR_Y_SCALE: f64 = 0.85;
pub const OPACITY_FALLOFF: f64 = 0.5; // opacity lost at either horizontal extreme
pub const OPACITY_FLOOR: f64 = 0.2;

// CSS custom properties written on reflection targets
pub const PROP_REFLECTION_X: &str = "--rx";
pub const PROP_REFLECTION_Y: &str = "--ry";
pub const PROP_SECONDARY_X: &str = "--rx2";
pub const PROP_SECONDARY_Y: &str = "--ry2";
pub const PROP_SPECULAR_X: &str = "--sx";
pub const PROP_SPECULAR_Y: &str = "--sy";
pub const PROP_OPACITY: &str = "--ref-opacity";

// CSS custom properties written on every chrome-styled element
pub const PROP_BEAM_OFFSET_X: &str = "--beam-offset-x";
pub const PROP_BEAM_OFFSET_Y: &str = "--beam-offset-y";
pub const PROP_BEAM_POS: &str = "--beam-pos";
