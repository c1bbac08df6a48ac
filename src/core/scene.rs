use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::locator::MeshInfo;

/// One axis-aligned box in the room. The whole scene is box primitives; the
/// locator and picker work off the same centers and sizes the renderer draws.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshDef {
    pub name: String,
    pub center: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 3],
    #[serde(default)]
    pub emissive: f32,
}

/// Scene document fetched from `scene.json`; the embedded fallback room is
/// used when the fetch or parse fails.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDoc {
    pub meshes: Vec<MeshDef>,
}

impl SceneDoc {
    pub fn mesh_infos(&self) -> Vec<MeshInfo> {
        self.meshes
            .iter()
            .map(|m| MeshInfo {
                name: m.name.clone(),
                center: Vec3::from(m.center),
                size: Vec3::from(m.size),
            })
            .collect()
    }

    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let doc: SceneDoc = serde_json::from_str(json)?;
        anyhow::ensure!(!doc.meshes.is_empty(), "scene document has no meshes");
        Ok(doc)
    }
}

fn mesh(name: &str, center: [f32; 3], size: [f32; 3], color: [f32; 3]) -> MeshDef {
    MeshDef {
        name: name.to_string(),
        center,
        size,
        color,
        emissive: 0.0,
    }
}

/// Procedural stand-in room: floor, back wall, desk, monitor and props.
/// Dimensions are chosen so the locator's geometry pass finds the screen
/// even if someone strips the names.
pub fn fallback_room() -> SceneDoc {
    let wood = [0.45, 0.31, 0.18];
    let dark = [0.12, 0.12, 0.14];
    let meshes = vec![
        mesh("floor", [0.0, -0.05, 0.0], [24.0, 0.1, 24.0], [0.22, 0.2, 0.19]),
        mesh("back_wall", [0.0, 4.0, -6.2], [24.0, 8.0, 0.2], [0.35, 0.34, 0.33]),
        mesh("desk_top", [0.0, 1.0, -5.0], [4.0, 0.1, 1.8], wood),
        mesh("desk_leg_fl", [-1.85, 0.5, -4.25], [0.1, 1.0, 0.1], wood),
        mesh("desk_leg_fr", [1.85, 0.5, -4.25], [0.1, 1.0, 0.1], wood),
        mesh("desk_leg_bl", [-1.85, 0.5, -5.75], [0.1, 1.0, 0.1], wood),
        mesh("desk_leg_br", [1.85, 0.5, -5.75], [0.1, 1.0, 0.1], wood),
        mesh("monitor_base", [0.0, 1.08, -5.3], [0.6, 0.06, 0.4], dark),
        mesh("monitor_stand", [0.0, 1.35, -5.35], [0.12, 0.5, 0.08], dark),
        mesh("monitor_frame", [0.0, 1.85, -5.3], [1.76, 1.06, 0.08], dark),
        MeshDef {
            name: "screen".to_string(),
            center: [0.0, 1.85, -5.25],
            size: [1.6, 0.9, 0.05],
            color: [0.01, 0.01, 0.02],
            emissive: 0.0,
        },
        mesh("chair_seat", [0.0, 0.65, -3.4], [0.9, 0.12, 0.9], dark),
        mesh("chair_back", [0.0, 1.3, -3.85], [0.9, 1.2, 0.12], dark),
        mesh("lamp_arm", [1.6, 1.45, -5.4], [0.08, 0.8, 0.08], [0.6, 0.6, 0.62]),
        MeshDef {
            name: "lamp_bulb".to_string(),
            center: [1.6, 1.9, -5.3],
            size: [0.25, 0.18, 0.25],
            color: [1.0, 0.95, 0.8],
            emissive: 1.5,
        },
    ];
    SceneDoc { meshes }
}
