// Host-side tests for desktop window bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod windows {
    include!("../src/core/windows.rs");
}

use windows::*;

#[test]
fn open_window_is_visible_and_focused() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    assert!(wm.is_open(WindowId::About));
    assert_eq!(wm.focused(), Some(WindowId::About));
    let rec = wm.record(WindowId::About).expect("record missing");
    assert!(!rec.minimized && !rec.maximized);
}

#[test]
fn later_opens_stack_on_top() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.open(WindowId::Projects);
    wm.open(WindowId::Terminal);
    assert_eq!(wm.focused(), Some(WindowId::Terminal));

    wm.focus(WindowId::About);
    assert_eq!(wm.focused(), Some(WindowId::About));
}

#[test]
fn z_order_never_reused() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.open(WindowId::Projects);
    let z1 = wm.record(WindowId::About).map(|r| r.z);
    wm.focus(WindowId::About);
    let z2 = wm.record(WindowId::About).map(|r| r.z);
    assert!(z2 > z1, "focus must assign a fresh, higher z");
}

#[test]
fn minimize_hides_from_focus_until_restored() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.open(WindowId::Contact);
    wm.minimize(WindowId::Contact);
    assert_eq!(wm.focused(), Some(WindowId::About));
    assert!(wm.is_open(WindowId::Contact), "minimized is still open");

    wm.restore_or_open(WindowId::Contact);
    assert_eq!(wm.focused(), Some(WindowId::Contact));
    let rec = wm.record(WindowId::Contact).expect("record missing");
    assert!(!rec.minimized);
}

#[test]
fn restore_or_open_covers_all_three_cases() {
    let mut wm = WindowManager::new();
    // Closed: opens.
    wm.restore_or_open(WindowId::Terminal);
    assert!(wm.is_open(WindowId::Terminal));
    // Open: surfaces.
    wm.open(WindowId::About);
    wm.restore_or_open(WindowId::Terminal);
    assert_eq!(wm.focused(), Some(WindowId::Terminal));
    // Minimized: restores on top.
    wm.minimize(WindowId::Terminal);
    wm.restore_or_open(WindowId::Terminal);
    assert_eq!(wm.focused(), Some(WindowId::Terminal));
}

#[test]
fn maximize_toggles_and_raises() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::Projects);
    wm.open(WindowId::About);
    wm.maximize_toggle(WindowId::Projects);
    let rec = wm.record(WindowId::Projects).expect("record missing");
    assert!(rec.maximized);
    assert_eq!(wm.focused(), Some(WindowId::Projects));
    wm.maximize_toggle(WindowId::Projects);
    assert!(!wm.record(WindowId::Projects).map(|r| r.maximized).unwrap_or(true));
}

#[test]
fn close_removes_entirely() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.close(WindowId::About);
    assert!(!wm.is_open(WindowId::About));
    assert_eq!(wm.focused(), None);
    // Closing again is a no-op.
    wm.close(WindowId::About);
}

#[test]
fn all_minimized_means_no_focus() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.open(WindowId::Projects);
    wm.minimize(WindowId::About);
    wm.minimize(WindowId::Projects);
    assert_eq!(wm.focused(), None);
}

#[test]
fn open_order_sorted_by_stacking() {
    let mut wm = WindowManager::new();
    wm.open(WindowId::About);
    wm.open(WindowId::Projects);
    wm.focus(WindowId::About);
    let order: Vec<WindowId> = wm.open_order().into_iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![WindowId::Projects, WindowId::About]);
}

#[test]
fn theme_toggles_between_dark_and_light() {
    let mut wm = WindowManager::new();
    assert_eq!(wm.theme(), Theme::Dark);
    assert_eq!(wm.toggle_theme(), Theme::Light);
    assert_eq!(wm.toggle_theme(), Theme::Dark);
    assert_eq!(Theme::Light.css_class(), "theme-light");
}

#[test]
fn element_ids_are_stable() {
    for id in WindowId::ALL {
        assert!(id.element_id().starts_with("win-"));
        assert!(!id.title().is_empty());
    }
}
