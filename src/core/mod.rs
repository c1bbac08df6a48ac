//! Pure application logic: camera, choreography, screen state, picking and
//! window bookkeeping. Nothing in here touches the DOM or the GPU, so the
//! whole module tree is exercised by native tests.

pub mod blur;
pub mod camera;
pub mod director;
pub mod locator;
pub mod picking;
pub mod scene;
pub mod screen;
pub mod tween;
pub mod windows;

pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static SCREEN_WGSL: &str = include_str!("../../shaders/screen.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
