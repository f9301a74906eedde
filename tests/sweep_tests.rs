// Host-side tests for the glint sweep timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod sweep {
    include!("../src/core/sweep.rs");
}

use geometry::Rect;
use sweep::*;

const EPS: f64 = 1e-9;

#[test]
fn easing_hits_fixed_points() {
    assert!(ease_in_out_quad(0.0).abs() < EPS);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPS);
    assert!((ease_in_out_quad(1.0) - 1.0).abs() < EPS);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=1000 {
        let t = ease_in_out_quad(i as f64 / 1000.0);
        assert!(t > prev, "easing not increasing at step {i}");
        prev = t;
    }
}

#[test]
fn beam_clears_both_edges_for_any_width() {
    for vw in [0.0, 320.0, 1200.0, 2560.0] {
        assert!((beam_position(0.0, vw, 300.0) + 300.0).abs() < EPS);
        assert!((beam_position(1.0, vw, 300.0) - (vw + 300.0)).abs() < EPS);
    }
}

#[test]
fn beam_at_half_progress() {
    let t = ease_in_out_quad(0.5);
    assert!((beam_position(t, 1200.0, 300.0) - 600.0).abs() < EPS);
}

#[test]
fn timeline_sweeps_then_pauses_then_restarts() {
    let mut tl = SweepTimeline::default();
    let vw = 1200.0;

    // First frame pins the start time
    assert_eq!(tl.tick(1_000.0, vw), Some(-300.0));
    let mid = tl.tick(6_500.0, vw).unwrap();
    assert!((mid - 600.0).abs() < EPS);
    assert!(matches!(tl.phase(), SweepPhase::Sweeping { started_at: Some(s) } if s == 1_000.0));

    // raw reaches 1: last sweep frame is still written, then the pause begins
    let end = tl.tick(12_000.0, vw).unwrap();
    assert!((end - 1_500.0).abs() < EPS);
    assert_eq!(tl.phase(), SweepPhase::Pausing { started_at: None });

    // Pause frames write nothing; the pause clock starts on the first one
    assert_eq!(tl.tick(12_016.0, vw), None);
    assert_eq!(tl.tick(13_515.0, vw), None);
    assert!(matches!(tl.phase(), SweepPhase::Pausing { .. }));
    assert_eq!(tl.tick(13_516.0, vw), None);
    assert_eq!(tl.phase(), SweepPhase::Sweeping { started_at: None });

    // Fresh sweep from the left edge
    assert_eq!(tl.tick(13_532.0, vw), Some(-300.0));
}

#[test]
fn late_frames_clamp_progress() {
    let mut tl = SweepTimeline::new(1_000.0, 500.0, 300.0);
    assert_eq!(tl.tick(0.0, 800.0), Some(-300.0));
    // A long stall (e.g. background tab) still ends exactly at the far edge
    let px = tl.tick(60_000.0, 800.0).unwrap();
    assert!((px - 1_100.0).abs() < EPS);
    assert!(matches!(tl.phase(), SweepPhase::Pausing { .. }));
}

#[test]
fn beam_style_rounds_to_integers() {
    let style = BeamStyle::new(&Rect::new(10.4, 20.6, 100.0, 40.0), 599.5);
    assert_eq!(
        style,
        BeamStyle {
            offset_x: 10,
            offset_y: 21,
            beam_pos: 600,
        }
    );
    let props = style.properties();
    assert_eq!(props[0], ("--beam-offset-x", "10".to_string()));
    assert_eq!(props[1], ("--beam-offset-y", "21".to_string()));
    assert_eq!(props[2], ("--beam-pos", "600".to_string()));

    let neg = BeamStyle::new(&Rect::new(-0.4, 0.0, 1.0, 1.0), -300.0);
    assert_eq!(neg.offset_x, 0);
    assert_eq!(neg.beam_pos, -300);
}
