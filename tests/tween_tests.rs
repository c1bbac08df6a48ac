// Host-side tests for tweens and the deferred-action timeline.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

#[test]
fn easing_curves_hit_endpoints() {
    for e in [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::OutBack,
    ] {
        assert!((e.apply(0.0)).abs() < 1e-6, "{:?} start", e);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-5, "{:?} end", e);
    }
}

#[test]
fn out_back_overshoots_past_one() {
    let mut max = 0.0f32;
    for i in 0..=100 {
        max = max.max(Easing::OutBack.apply(i as f32 / 100.0));
    }
    assert!(max > 1.0, "expected overshoot, got max {max}");
}

#[test]
fn in_out_quad_is_symmetric() {
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let a = Easing::InOutQuad.apply(t);
        let b = Easing::InOutQuad.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-4, "asymmetric at t={t}");
    }
}

#[test]
fn tween_reaches_end_exactly() {
    let mut tw = Tween::new(2.0, 10.0, 1.0, Easing::InOutQuad);
    let mut v = 0.0;
    for _ in 0..60 {
        v = tw.advance(1.0 / 60.0);
    }
    assert!(tw.finished());
    assert!((v - 10.0).abs() < 1e-4);
}

#[test]
fn tween_zero_duration_snaps_to_end() {
    let mut tw = Tween::new(0.0, 5.0, 0.0, Easing::Linear);
    assert!((tw.advance(0.0) - 5.0).abs() < 1e-6);
    assert!(tw.finished());
}

#[test]
fn tween_vec3_interpolates_componentwise() {
    let mut tw = TweenVec3::new(
        glam::Vec3::ZERO,
        glam::Vec3::new(2.0, 4.0, 8.0),
        1.0,
        Easing::Linear,
    );
    let v = tw.advance(0.5);
    assert!((v - glam::Vec3::new(1.0, 2.0, 4.0)).length() < 1e-4);
}

#[test]
fn timeline_fires_at_due_time_not_before() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule(1.0, 7);
    assert!(tl.tick(0.5).is_empty());
    assert_eq!(tl.tick(0.6), vec![7]);
    assert!(tl.is_idle());
}

#[test]
fn timeline_preserves_registration_order_on_same_tick() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule(0.2, 1);
    tl.schedule(0.1, 2);
    tl.schedule(0.3, 3);
    // One large tick makes all three due at once.
    assert_eq!(tl.tick(1.0), vec![1, 2, 3]);
}

#[test]
fn timeline_cancel_all_drops_pending() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule(0.1, 1);
    tl.schedule(0.2, 2);
    tl.cancel_all();
    assert!(tl.tick(10.0).is_empty());
    assert!(tl.is_idle());
}

#[test]
fn timeline_zero_delay_fires_next_tick() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule(0.0, 9);
    assert_eq!(tl.tick(0.0), vec![9]);
}
