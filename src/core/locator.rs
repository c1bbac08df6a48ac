use glam::Vec3;
use smallvec::SmallVec;

/// Geometry summary the locator classifies. Extracted once from the loaded
/// scene; the pass itself never touches the scene graph.
#[derive(Clone, Debug)]
pub struct MeshInfo {
    pub name: String,
    pub center: Vec3,
    pub size: Vec3,
}

/// Classification thresholds. Defaults mirror the values tuned against the
/// reference room asset; they are configuration, not behavior.
#[derive(Clone, Copy, Debug)]
pub struct LocatorConfig {
    /// Reject candidates whose frontal area falls below this.
    pub min_area: f32,
    /// Reject candidates above this area; keeps walls, floors and desk tops
    /// out of the geometry pass.
    pub max_area: f32,
    /// Larger/smaller ratio of the two largest dimensions must exceed this.
    pub min_aspect: f32,
    /// Thinnest dimension as a fraction of the smaller remaining one.
    pub max_thinness: f32,
    /// Loose fallback: any wide rectangle at desk height.
    pub fallback_min_aspect: f32,
    pub fallback_min_area: f32,
    pub desk_band_min_y: f32,
    pub desk_band_max_y: f32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            min_area: 0.01,
            max_area: 4.0,
            min_aspect: 1.3,
            max_thinness: 0.2,
            fallback_min_aspect: 2.0,
            fallback_min_area: 5.0,
            desk_band_min_y: 0.0,
            desk_band_max_y: 2.0,
        }
    }
}

/// Name vocabulary that immediately marks a mesh as the screen surface.
const SCREEN_NAME_HINTS: &[&str] = &["monitor", "screen", "display", "schermo", "lcd", "tv"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reason {
    Name,
    Shape,
}

/// One-shot, deterministic search for the mesh acting as the monitor screen.
///
/// Priority: name vocabulary match, then thin-flat-rectangle geometry, then a
/// looser desk-height fallback. Returns an index into `meshes`, or `None`
/// when the scene has no plausible screen (downstream then simply disables
/// the virtual screen).
pub fn find_screen(meshes: &[MeshInfo], config: &LocatorConfig) -> Option<usize> {
    let mut candidates: SmallVec<[(usize, Reason, f32); 8]> = SmallVec::new();

    for (i, m) in meshes.iter().enumerate() {
        let name = m.name.to_ascii_lowercase();
        if SCREEN_NAME_HINTS.iter().any(|hint| name.contains(hint)) {
            candidates.push((i, Reason::Name, thinness_ratio(m.size)));
            continue;
        }
        if is_thin_flat_rect(m.size, config) {
            candidates.push((i, Reason::Shape, thinness_ratio(m.size)));
        }
    }

    if !candidates.is_empty() {
        // Name matches outrank geometry; within a class the proportionally
        // thinnest candidate wins, so the panel beats its bezel frame.
        candidates.sort_by(|a, b| {
            let class = |r: Reason| if r == Reason::Name { 0 } else { 1 };
            class(a.1)
                .cmp(&class(b.1))
                .then(a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal))
        });
        let (idx, reason, _) = candidates[0];
        log::info!(
            "[locator] screen mesh '{}' selected ({:?})",
            meshes[idx].name,
            reason
        );
        return Some(idx);
    }

    // Loose fallback: any wide enough rectangle inside the desk-height band.
    let mut best: Option<(usize, f32)> = None;
    for (i, m) in meshes.iter().enumerate() {
        let area = frontal_area(m.size);
        let aspect = largest_aspect(m.size);
        let in_band = m.center.y > config.desk_band_min_y && m.center.y < config.desk_band_max_y;
        if aspect > config.fallback_min_aspect && area > config.fallback_min_area && in_band {
            match best {
                Some((_, ba)) if ba >= area => {}
                _ => best = Some((i, area)),
            }
        }
    }
    match best {
        Some((idx, _)) => {
            log::info!("[locator] screen mesh '{}' selected (fallback)", meshes[idx].name);
            Some(idx)
        }
        None => {
            log::warn!("[locator] no screen candidate found; virtual screen disabled");
            None
        }
    }
}

/// Width/height aspect of the located mesh, for sizing the offscreen target.
pub fn screen_aspect(size: Vec3) -> f32 {
    let mut dims = [size.x, size.y, size.z];
    dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let (mid, max) = (dims[1].max(1e-4), dims[2].max(1e-4));
    max / mid
}

#[inline]
fn frontal_area(size: Vec3) -> f32 {
    let mut dims = [size.x, size.y, size.z];
    dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    dims[1] * dims[2]
}

#[inline]
fn largest_aspect(size: Vec3) -> f32 {
    let mut dims = [size.x, size.y, size.z];
    dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if dims[1] <= 1e-4 {
        return 0.0;
    }
    dims[2] / dims[1]
}

#[inline]
fn thinness_ratio(size: Vec3) -> f32 {
    let mut dims = [size.x, size.y, size.z];
    dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    dims[0] / dims[1].max(1e-4)
}

fn is_thin_flat_rect(size: Vec3, config: &LocatorConfig) -> bool {
    let mut dims = [size.x, size.y, size.z];
    dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let (thin, mid, max) = (dims[0], dims[1], dims[2]);
    let area = mid * max;
    if area < config.min_area || area > config.max_area || mid <= 1e-4 {
        return false;
    }
    let aspect = max / mid;
    aspect > config.min_aspect && thin < mid * config.max_thinness
}
