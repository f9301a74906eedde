// Host-side tests for idle detection and drift.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod idle {
    include!("../src/core/idle.rs");
}

use constants::*;
use geometry::Rect;
use idle::*;

fn tracker() -> IdleTracker {
    IdleTracker::new(0.0, IDLE_THRESHOLD_MS, DRIFT_ANGLE_STEP)
}

#[test]
fn goes_idle_exactly_at_threshold() {
    let mut t = tracker();
    assert!(!t.is_due(2_999.0));
    assert!(!t.enter_idle(2_999.0));
    assert!(!t.is_idle());

    assert!(t.is_due(3_000.0));
    assert!(t.enter_idle(3_000.0));
    assert!(t.is_idle());
    // Only the transition reports true
    assert!(!t.enter_idle(3_100.0));
}

#[test]
fn movement_before_threshold_restarts_countdown() {
    let mut t = tracker();
    assert!(!t.record_activity(2_000.0));
    assert!(!t.enter_idle(3_000.0));
    assert!((t.remaining_ms(3_000.0) - 2_000.0).abs() < 1e-9);
    assert!(!t.is_due(4_999.0));
    assert!(t.enter_idle(5_000.0));
}

#[test]
fn movement_cancels_idle() {
    let mut t = tracker();
    assert!(t.enter_idle(3_000.0));
    assert!(t.record_activity(3_500.0));
    assert!(!t.is_idle());
    assert!(!t.is_due(6_499.0));
    assert!(t.is_due(6_500.0));
    assert_eq!(t.remaining_ms(10_000.0), 0.0);
}

#[test]
fn drift_position_at_rest_angle() {
    let frame = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let p = drift_position(0.0, &frame);
    assert!((p.x - 500.0).abs() < 1e-9);
    // cos(0) = 1 -> 0.4 + 0.2
    assert!((p.y - 300.0).abs() < 1e-9);

    let offset = Rect::new(100.0, 50.0, 1000.0, 500.0);
    let q = drift_position(0.0, &offset);
    assert!((q.x - 600.0).abs() < 1e-9);
    assert!((q.y - 350.0).abs() < 1e-9);
}

#[test]
fn drift_only_while_idle() {
    let frame = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let mut t = tracker();
    assert!(t.drift_step(&frame).is_none());
    assert_eq!(t.angle(), 0.0);

    t.enter_idle(3_000.0);
    let p = t.drift_step(&frame).unwrap();
    assert!((t.angle() - DRIFT_ANGLE_STEP).abs() < 1e-12);
    assert_eq!(p, drift_position(DRIFT_ANGLE_STEP, &frame));

    t.drift_step(&frame);
    assert!((t.angle() - 2.0 * DRIFT_ANGLE_STEP).abs() < 1e-12);
}

#[test]
fn drift_angle_persists_across_idle_periods() {
    let frame = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let mut t = tracker();
    t.enter_idle(3_000.0);
    for _ in 0..10 {
        t.drift_step(&frame);
    }
    let angle = t.angle();
    t.record_activity(4_000.0);
    assert!(t.drift_step(&frame).is_none());
    assert_eq!(t.angle(), angle);

    t.enter_idle(7_000.0);
    t.drift_step(&frame);
    assert!(t.angle() > angle);
}

#[test]
fn drift_stays_near_the_container() {
    let frame = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let mut t = tracker();
    t.enter_idle(3_000.0);
    for _ in 0..5_000 {
        let p = t.drift_step(&frame).unwrap();
        // Horizontal swing overshoots by 15% each side; vertical stays inside
        assert!(p.x >= -150.0 - 1e-9 && p.x <= 1150.0 + 1e-9);
        assert!(p.y >= 100.0 - 1e-9 && p.y <= 300.0 + 1e-9);
    }
}
