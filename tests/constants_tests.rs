// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(SWEEP_DURATION_MS > 0.0);
    assert!(SWEEP_PAUSE_MS > 0.0);
    assert!(IDLE_THRESHOLD_MS > 0.0);
    assert!(DRIFT_ANGLE_STEP > 0.0);
    assert!(BEAM_OVERSHOOT_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_have_logical_relationships() {
    // The rest between sweeps is shorter than a sweep
    assert!(SWEEP_PAUSE_MS < SWEEP_DURATION_MS);
    // Drift advances slowly enough to look continuous at 60fps
    assert!(DRIFT_ANGLE_STEP < 0.05);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reflection_mapping_stays_in_range() {
    // Opacity floor keeps reflections visible and the falloff never exceeds it
    assert!(OPACITY_FLOOR > 0.0 && OPACITY_FLOOR < 1.0);
    assert!(1.0 - OPACITY_FALLOFF >= OPACITY_FLOOR);
    // Vertical drift stays inside the container
    assert!(DRIFT_CENTER_Y - DRIFT_SWING_Y >= 0.0);
    assert!(DRIFT_CENTER_Y + DRIFT_SWING_Y <= 1.0);
    assert!(INITIAL_POINTER_FRACTION.iter().all(|f| (0.0..=1.0).contains(f)));
}

#[test]
fn property_names_are_custom_properties() {
    for name in [
        PROP_REFLECTION_X,
        PROP_REFLECTION_Y,
        PROP_SECONDARY_X,
        PROP_SECONDARY_Y,
        PROP_SPECULAR_X,
        PROP_SPECULAR_Y,
        PROP_OPACITY,
        PROP_BEAM_OFFSET_X,
        PROP_BEAM_OFFSET_Y,
        PROP_BEAM_POS,
    ] {
        assert!(name.starts_with("--"), "{name}");
    }
}

#[test]
fn dom_contract_selectors() {
    assert!(!CONTAINER_ID.starts_with('#'));
    assert!(REFLECTION_TARGET_SELECTOR.starts_with('.'));
    assert!(GLINT_TARGET_SELECTOR.starts_with('.'));
    assert!(CONFIG_ATTR_PREFIX.ends_with('-'));
}
