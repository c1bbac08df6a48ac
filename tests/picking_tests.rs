// Host-side tests for ray picking and click routing.
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
mod picking {
    include!("../src/core/picking.rs");
}

use constants::*;
use glam::{Mat4, Vec3};
use picking::*;

const SCREEN_CENTER: Vec3 = Vec3::new(0.0, 1.85, -5.25);
const SCREEN_SIZE: Vec3 = Vec3::new(1.6, 0.9, 0.05);

fn view_proj_at(eye: Vec3, forward: Vec3) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y_RAD, 16.0 / 9.0, CAMERA_Z_NEAR, CAMERA_Z_FAR);
    let view = Mat4::look_to_rh(eye, forward, Vec3::Y);
    proj * view
}

#[test]
fn center_pixel_ray_points_along_forward() {
    let eye = Vec3::new(0.0, 2.0, 5.0);
    let vp = view_proj_at(eye, Vec3::new(0.0, 0.0, -1.0));
    let ray = picking_ray(800.0, 450.0, 1600.0, 900.0, vp, eye);
    assert!((ray.origin - eye).length() < 1e-4);
    assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
}

#[test]
fn corner_pixel_rays_diverge() {
    let eye = Vec3::new(0.0, 2.0, 5.0);
    let vp = view_proj_at(eye, Vec3::new(0.0, 0.0, -1.0));
    let tl = picking_ray(0.0, 0.0, 1600.0, 900.0, vp, eye);
    assert!(tl.dir.x < 0.0 && tl.dir.y > 0.0 && tl.dir.z < 0.0);
    let br = picking_ray(1600.0, 900.0, 1600.0, 900.0, vp, eye);
    assert!(br.dir.x > 0.0 && br.dir.y < 0.0 && br.dir.z < 0.0);
}

#[test]
fn ray_aabb_hits_front_face_at_expected_distance() {
    let ray = Ray {
        origin: Vec3::new(0.0, 1.85, 0.0),
        dir: Vec3::new(0.0, 0.0, -1.0),
    };
    let t = ray_aabb(&ray, SCREEN_CENTER, SCREEN_SIZE).expect("should hit");
    // Front face sits at z = center.z + half depth.
    assert!((t - (5.25 - 0.025)).abs() < 1e-3);
}

#[test]
fn ray_aabb_misses_and_behind() {
    let miss = Ray {
        origin: Vec3::new(10.0, 1.85, 0.0),
        dir: Vec3::new(0.0, 0.0, -1.0),
    };
    assert!(ray_aabb(&miss, SCREEN_CENTER, SCREEN_SIZE).is_none());
    let behind = Ray {
        origin: Vec3::new(0.0, 1.85, -10.0),
        dir: Vec3::new(0.0, 0.0, -1.0),
    };
    assert!(ray_aabb(&behind, SCREEN_CENTER, SCREEN_SIZE).is_none());
}

#[test]
fn screen_uv_maps_corners_y_down() {
    let half = SCREEN_SIZE * 0.5;
    let top_left = SCREEN_CENTER + Vec3::new(-half.x, half.y, half.z);
    let uv = screen_uv_at(top_left, SCREEN_CENTER, SCREEN_SIZE);
    assert!((uv[0]).abs() < 1e-4 && (uv[1]).abs() < 1e-4);

    let bottom_right = SCREEN_CENTER + Vec3::new(half.x, -half.y, half.z);
    let uv = screen_uv_at(bottom_right, SCREEN_CENTER, SCREEN_SIZE);
    assert!((uv[0] - 1.0).abs() < 1e-4 && (uv[1] - 1.0).abs() < 1e-4);

    let center = SCREEN_CENTER + Vec3::new(0.0, 0.0, half.z);
    let uv = screen_uv_at(center, SCREEN_CENTER, SCREEN_SIZE);
    assert!((uv[0] - 0.5).abs() < 1e-4 && (uv[1] - 0.5).abs() < 1e-4);
}

fn ray_at_screen_uv(uv: [f32; 2]) -> Ray {
    let half = SCREEN_SIZE * 0.5;
    let target = SCREEN_CENTER
        + Vec3::new(
            (uv[0] - 0.5) * SCREEN_SIZE.x,
            (0.5 - uv[1]) * SCREEN_SIZE.y,
            half.z,
        );
    let origin = Vec3::new(0.0, 1.85, 0.0);
    Ray {
        origin,
        dir: (target - origin).normalize(),
    }
}

#[test]
fn hint_card_outranks_everything() {
    let ctx = PickContext {
        hint_card_visible: true,
        monitor_armed: true,
        login_armed: true,
    };
    let ray = ray_at_screen_uv(LOGIN_BUTTON_CENTER_UV);
    assert_eq!(
        route_click(ctx, &ray, SCREEN_CENTER, SCREEN_SIZE),
        Some(Surface::HintCard)
    );
}

#[test]
fn login_button_outranks_monitor() {
    let ctx = PickContext {
        hint_card_visible: false,
        monitor_armed: true,
        login_armed: true,
    };
    let ray = ray_at_screen_uv(LOGIN_BUTTON_CENTER_UV);
    match route_click(ctx, &ray, SCREEN_CENTER, SCREEN_SIZE) {
        Some(Surface::LoginButton { uv }) => {
            assert!((uv[0] - LOGIN_BUTTON_CENTER_UV[0]).abs() < 0.02);
            assert!((uv[1] - LOGIN_BUTTON_CENTER_UV[1]).abs() < 0.02);
        }
        other => panic!("expected login button, got {:?}", other),
    }
}

#[test]
fn armed_monitor_takes_clicks_outside_the_button() {
    let ctx = PickContext {
        hint_card_visible: false,
        monitor_armed: true,
        login_armed: true,
    };
    let ray = ray_at_screen_uv([0.1, 0.1]);
    assert_eq!(
        route_click(ctx, &ray, SCREEN_CENTER, SCREEN_SIZE),
        Some(Surface::Monitor)
    );
}

#[test]
fn unarmed_surfaces_swallow_nothing() {
    let ctx = PickContext::default();
    let ray = ray_at_screen_uv([0.5, 0.5]);
    assert_eq!(route_click(ctx, &ray, SCREEN_CENTER, SCREEN_SIZE), None);

    // A ray that misses the screen entirely resolves to nothing even armed.
    let armed = PickContext {
        hint_card_visible: false,
        monitor_armed: true,
        login_armed: true,
    };
    let miss = Ray {
        origin: Vec3::new(0.0, 1.85, 0.0),
        dir: Vec3::new(0.0, 1.0, 0.0),
    };
    assert_eq!(route_click(armed, &miss, SCREEN_CENTER, SCREEN_SIZE), None);
}
