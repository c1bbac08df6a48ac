use glam::{Mat4, Vec3, Vec4};

use super::screen::login_button_hit;

/// World-space picking ray through a canvas pixel.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Unproject a canvas pixel through the inverse view-projection matrix.
/// `px`/`py` are CSS pixels with y down, as pointer events deliver them.
pub fn picking_ray(px: f32, py: f32, width: f32, height: f32, view_proj: Mat4, eye: Vec3) -> Ray {
    let ndc_x = 2.0 * px / width.max(1.0) - 1.0;
    let ndc_y = 1.0 - 2.0 * py / height.max(1.0);
    let inv = view_proj.inverse();
    let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far = far.truncate() / far.w;
    Ray {
        origin: eye,
        dir: (far - eye).normalize_or_zero(),
    }
}

/// Slab intersection against an axis-aligned box. Returns the entry
/// distance along the ray, or `None` on a miss or a hit behind the origin.
pub fn ray_aabb(ray: &Ray, center: Vec3, size: Vec3) -> Option<f32> {
    let half = size * 0.5;
    let min = center - half;
    let max = center + half;
    let mut t_min = 0.0f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv_d = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv_d;
        let mut t1 = (max[axis] - o) * inv_d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Map a hit point on the screen box's front face to screen UV, y down.
/// The surface faces +Z, which holds for both the fallback room and any
/// scene the locator accepts (thin axis toward the viewer).
pub fn screen_uv_at(point: Vec3, center: Vec3, size: Vec3) -> [f32; 2] {
    let u = (point.x - (center.x - size.x * 0.5)) / size.x.max(1e-4);
    let v = 1.0 - (point.y - (center.y - size.y * 0.5)) / size.y.max(1e-4);
    [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)]
}

/// What a canvas click resolved to, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    HintCard,
    LoginButton { uv: [f32; 2] },
    Monitor,
}

/// Interaction flags sampled at click time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickContext {
    pub hint_card_visible: bool,
    pub monitor_armed: bool,
    pub login_armed: bool,
}

/// Single dispatch point for canvas clicks so overlapping interactive
/// surfaces cannot double-fire. Priority: hint card, then the login button
/// on the virtual screen, then the monitor itself.
pub fn route_click(
    ctx: PickContext,
    ray: &Ray,
    screen_center: Vec3,
    screen_size: Vec3,
) -> Option<Surface> {
    if ctx.hint_card_visible {
        return Some(Surface::HintCard);
    }
    let t = ray_aabb(ray, screen_center, screen_size)?;
    let point = ray.origin + ray.dir * t;
    let uv = screen_uv_at(point, screen_center, screen_size);
    if ctx.login_armed && login_button_hit(uv) {
        return Some(Surface::LoginButton { uv });
    }
    if ctx.monitor_armed {
        return Some(Surface::Monitor);
    }
    None
}
