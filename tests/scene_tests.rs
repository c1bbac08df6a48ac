// Host-side tests for scene parsing and the embedded fallback room.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod locator {
    include!("../src/core/locator.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use locator::{find_screen, screen_aspect, LocatorConfig};
use scene::*;

#[test]
fn parses_minimal_document() {
    let json = r#"{
        "meshes": [
            {"name": "screen", "center": [0, 1.8, -5], "size": [1.6, 0.9, 0.05], "color": [0, 0, 0]}
        ]
    }"#;
    let doc = SceneDoc::parse(json).expect("parse failed");
    assert_eq!(doc.meshes.len(), 1);
    assert_eq!(doc.meshes[0].name, "screen");
    // Emissive is optional and defaults to zero.
    assert_eq!(doc.meshes[0].emissive, 0.0);
}

#[test]
fn rejects_empty_and_malformed_documents() {
    assert!(SceneDoc::parse(r#"{"meshes": []}"#).is_err());
    assert!(SceneDoc::parse("not json").is_err());
    assert!(SceneDoc::parse(r#"{"meshes": [{"name": "x"}]}"#).is_err());
}

#[test]
fn fallback_room_locates_its_screen() {
    let room = fallback_room();
    let infos = room.mesh_infos();
    let idx = find_screen(&infos, &LocatorConfig::default()).expect("fallback room has no screen");
    assert_eq!(infos[idx].name, "screen");
    let aspect = screen_aspect(infos[idx].size);
    assert!((aspect - 1.6 / 0.9).abs() < 1e-3);
}

#[test]
fn fallback_screen_found_even_without_names() {
    let room = fallback_room();
    let mut infos = room.mesh_infos();
    let screen_center = infos
        .iter()
        .find(|m| m.name == "screen")
        .map(|m| m.center)
        .expect("screen missing");
    for (i, m) in infos.iter_mut().enumerate() {
        m.name = format!("mesh_{i:03}");
    }
    let idx = find_screen(&infos, &LocatorConfig::default()).expect("geometry pass failed");
    assert_eq!(infos[idx].center, screen_center);
}

#[test]
fn fallback_room_is_serializable() {
    let room = fallback_room();
    let json = serde_json::to_string(&room).expect("serialize failed");
    let back = SceneDoc::parse(&json).expect("reparse failed");
    assert_eq!(back.meshes.len(), room.meshes.len());
}
