// Host-side tests for the virtual screen state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod screen {
    include!("../src/core/screen.rs");
}

use constants::*;
use screen::*;

const DT: f32 = 1.0 / 60.0;

fn run_secs(s: &mut VirtualScreen, secs: f32) {
    let steps = (secs / DT).ceil() as usize;
    for _ in 0..steps {
        s.update(DT);
    }
}

fn booted_screen() -> VirtualScreen {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    s.start_boot();
    run_secs(&mut s, BOOT_SECS + 0.1);
    s
}

#[test]
fn stays_off_until_boot() {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    run_secs(&mut s, 5.0);
    assert_eq!(s.phase(), ScreenPhase::Off);
    assert!(s.boot_progress() < 1e-6);
    assert!(!s.login_armed());
}

#[test]
fn boot_ramps_then_arms_login() {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    s.start_boot();
    run_secs(&mut s, BOOT_SECS / 2.0);
    assert_eq!(s.phase(), ScreenPhase::Off);
    assert!(s.boot_progress() > 0.0 && s.boot_progress() < 1.0);

    run_secs(&mut s, BOOT_SECS / 2.0 + 0.1);
    assert_eq!(s.phase(), ScreenPhase::Login);
    assert!((s.boot_progress() - 1.0).abs() < 1e-4);
    assert!(s.login_armed());
}

#[test]
fn clicks_before_login_do_nothing() {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    assert!(!s.handle_click(LOGIN_BUTTON_CENTER_UV));
    s.start_boot();
    run_secs(&mut s, BOOT_SECS / 2.0);
    assert!(!s.handle_click(LOGIN_BUTTON_CENTER_UV));
    assert_eq!(s.phase(), ScreenPhase::Off);
}

#[test]
fn missed_click_leaves_login_armed() {
    let mut s = booted_screen();
    assert!(!s.handle_click([0.05, 0.05]));
    assert_eq!(s.phase(), ScreenPhase::Login);
    assert!(s.login_armed());
    // The button still works afterwards.
    assert!(s.handle_click(LOGIN_BUTTON_CENTER_UV));
    assert_eq!(s.phase(), ScreenPhase::Loading);
}

#[test]
fn login_hit_edges_respect_button_rect() {
    let cx = LOGIN_BUTTON_CENTER_UV[0];
    let cy = LOGIN_BUTTON_CENTER_UV[1];
    let hx = LOGIN_BUTTON_HALF_UV[0];
    let hy = LOGIN_BUTTON_HALF_UV[1];
    assert!(login_button_hit([cx, cy]));
    assert!(login_button_hit([cx + hx - 1e-3, cy]));
    assert!(login_button_hit([cx, cy - hy + 1e-3]));
    assert!(!login_button_hit([cx + hx + 1e-3, cy]));
    assert!(!login_button_hit([cx, cy + hy + 1e-3]));
}

#[test]
fn loading_dwell_auto_advances_to_desktop() {
    let mut s = booted_screen();
    s.handle_click(LOGIN_BUTTON_CENTER_UV);
    run_secs(&mut s, LOADING_DWELL_SECS / 2.0);
    assert_eq!(s.phase(), ScreenPhase::Loading);
    run_secs(&mut s, LOADING_DWELL_SECS / 2.0 + 0.1);
    assert_eq!(s.phase(), ScreenPhase::Desktop);
}

#[test]
fn spinner_turns_while_loading() {
    let mut s = booted_screen();
    s.handle_click(LOGIN_BUTTON_CENTER_UV);
    let a0 = s.snapshot().spinner_angle;
    run_secs(&mut s, 0.5);
    let a1 = s.snapshot().spinner_angle;
    assert!(a1 > a0);
}

#[test]
fn phase_index_is_monotonic_through_full_run() {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    let mut last = s.phase().index();
    s.start_boot();
    let mut clicked = false;
    for _ in 0..(10.0 / DT) as usize {
        s.update(DT);
        if s.login_armed() && !clicked {
            s.handle_click(LOGIN_BUTTON_CENTER_UV);
            clicked = true;
        }
        let idx = s.phase().index();
        assert!(idx >= last, "phase went backwards: {last} -> {idx}");
        last = idx;
    }
    assert_eq!(s.phase(), ScreenPhase::Desktop);
}

#[test]
fn snapshot_background_follows_boot_ramp() {
    let mut s = VirtualScreen::new(16.0 / 9.0);
    assert_eq!(s.snapshot().bg, [0.0, 0.0, 0.0]);
    s.start_boot();
    run_secs(&mut s, BOOT_SECS + 0.1);
    let bg = s.snapshot().bg;
    for (got, want) in bg.iter().zip(SCREEN_BG_ON.iter()) {
        assert!((got - want).abs() < 1e-3);
    }
}

#[test]
fn pops_settle_at_full_scale() {
    let mut s = booted_screen();
    run_secs(&mut s, LOGIN_POP_SECS + 0.1);
    assert!((s.snapshot().login_scale - 1.0).abs() < 1e-3);
    s.handle_click(LOGIN_BUTTON_CENTER_UV);
    run_secs(&mut s, LOADING_DWELL_SECS + DESKTOP_POP_SECS + 0.2);
    assert!((s.snapshot().desktop_scale - 1.0).abs() < 1e-3);
    assert!(s.snapshot().spinner_scale < 1e-3);
}

#[test]
fn aspect_is_clamped_to_sane_minimum() {
    let s = VirtualScreen::new(0.0);
    assert!(s.aspect() >= 0.1);
}
