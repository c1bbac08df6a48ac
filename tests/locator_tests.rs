// Host-side tests for the screen mesh locator heuristics.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod locator {
    include!("../src/core/locator.rs");
}

use glam::Vec3;
use locator::*;

fn mesh(name: &str, center: Vec3, size: Vec3) -> MeshInfo {
    MeshInfo {
        name: name.to_string(),
        center,
        size,
    }
}

fn desk_props() -> Vec<MeshInfo> {
    vec![
        mesh("floor", Vec3::new(0.0, -0.05, 0.0), Vec3::new(24.0, 0.1, 24.0)),
        mesh("desk_leg", Vec3::new(1.8, 0.5, -4.2), Vec3::new(0.1, 1.0, 0.1)),
        mesh("chair_seat", Vec3::new(0.0, 0.65, -3.4), Vec3::new(0.9, 0.12, 0.9)),
    ]
}

#[test]
fn name_hint_wins_over_geometry() {
    let mut meshes = desk_props();
    // A big flat rectangle that the shape pass would love.
    meshes.push(mesh(
        "poster",
        Vec3::new(3.0, 1.5, -6.0),
        Vec3::new(2.0, 1.2, 0.02),
    ));
    meshes.push(mesh(
        "Monitor_LCD",
        Vec3::new(0.0, 1.85, -5.25),
        Vec3::new(1.6, 0.9, 0.05),
    ));
    let idx = find_screen(&meshes, &LocatorConfig::default());
    assert_eq!(idx, Some(meshes.len() - 1));
}

#[test]
fn name_match_is_case_insensitive_and_localized() {
    for name in ["SCREEN", "Schermo_01", "tv-panel", "DisplaySurface"] {
        let mut meshes = desk_props();
        meshes.push(mesh(name, Vec3::new(0.0, 1.8, -5.0), Vec3::new(1.0, 0.6, 0.04)));
        let idx = find_screen(&meshes, &LocatorConfig::default());
        assert_eq!(idx, Some(meshes.len() - 1), "name '{name}' not recognized");
    }
}

#[test]
fn thin_flat_rectangle_found_without_name() {
    let mut meshes = desk_props();
    meshes.push(mesh(
        "mesh_0042",
        Vec3::new(0.0, 1.85, -5.25),
        Vec3::new(1.6, 0.9, 0.05),
    ));
    let idx = find_screen(&meshes, &LocatorConfig::default());
    assert_eq!(idx, Some(meshes.len() - 1));
}

#[test]
fn proportionally_thinnest_candidate_wins() {
    let mut meshes = desk_props();
    meshes.push(mesh(
        "small_panel",
        Vec3::new(2.0, 1.5, -5.0),
        Vec3::new(0.6, 0.35, 0.02),
    ));
    meshes.push(mesh(
        "big_panel",
        Vec3::new(0.0, 1.85, -5.25),
        Vec3::new(1.8, 1.0, 0.05),
    ));
    let idx = find_screen(&meshes, &LocatorConfig::default());
    assert_eq!(idx, Some(meshes.len() - 1));
}

#[test]
fn screen_panel_beats_bezel_frame_on_name_too() {
    let mut meshes = desk_props();
    meshes.push(mesh(
        "monitor_frame",
        Vec3::new(0.0, 1.85, -5.3),
        Vec3::new(1.76, 1.06, 0.08),
    ));
    meshes.push(mesh(
        "monitor_screen",
        Vec3::new(0.0, 1.85, -5.25),
        Vec3::new(1.6, 0.9, 0.05),
    ));
    let idx = find_screen(&meshes, &LocatorConfig::default());
    assert_eq!(idx, Some(meshes.len() - 1));
}

#[test]
fn walls_and_desks_too_large_for_the_shape_pass() {
    // The wall is proportionally thinner than the panel; only the area cap
    // keeps it out of the running.
    let meshes = vec![
        mesh("a", Vec3::new(0.0, 4.0, -6.2), Vec3::new(24.0, 8.0, 0.2)),
        mesh("b", Vec3::new(0.0, 1.0, -5.0), Vec3::new(4.0, 0.1, 1.8)),
        mesh("c", Vec3::new(0.0, 1.85, -5.25), Vec3::new(1.6, 0.9, 0.05)),
    ];
    assert_eq!(find_screen(&meshes, &LocatorConfig::default()), Some(2));
}

#[test]
fn cube_and_slender_shapes_rejected() {
    let mut meshes = desk_props();
    // Near-cube: aspect too small.
    meshes.push(mesh("boxy", Vec3::new(0.0, 1.5, -5.0), Vec3::new(1.0, 1.0, 0.9)));
    // A plank: flat but proportionally thick.
    meshes.push(mesh("plank", Vec3::new(0.0, 1.5, -5.0), Vec3::new(2.0, 0.4, 0.3)));
    assert_eq!(find_screen(&meshes, &LocatorConfig::default()), None);
}

#[test]
fn fallback_picks_wide_rect_in_desk_band() {
    let config = LocatorConfig::default();
    let meshes = vec![
        // Too high for the desk band.
        mesh("sign", Vec3::new(0.0, 5.0, -6.0), Vec3::new(6.0, 2.0, 1.5)),
        // Wide, big and at desk height; thick enough to fail the strict pass.
        mesh("slab", Vec3::new(0.0, 1.2, -5.0), Vec3::new(6.0, 1.6, 2.0)),
    ];
    assert_eq!(find_screen(&meshes, &config), Some(1));
}

#[test]
fn empty_scene_yields_none() {
    assert_eq!(find_screen(&[], &LocatorConfig::default()), None);
}

#[test]
fn screen_aspect_uses_two_largest_dims() {
    let a = screen_aspect(Vec3::new(1.6, 0.9, 0.05));
    assert!((a - 1.6 / 0.9).abs() < 1e-4);
    // Orientation does not matter.
    let b = screen_aspect(Vec3::new(0.05, 1.6, 0.9));
    assert!((a - b).abs() < 1e-5);
}
