use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::blur::{MotionBlur, SharpenFade};
use crate::core::camera::{CameraRig, DollyDone};
use crate::core::director::{Cue, Director};
use crate::core::screen::VirtualScreen;
use crate::core::windows::WindowManager;
use crate::dom;
use crate::overlay;
use crate::render;

/// Application state shared between the frame loop and the event wiring.
pub struct AppState {
    pub camera: CameraRig,
    pub director: Director,
    pub screen: VirtualScreen,
    pub motion_blur: MotionBlur,
    pub sharpen: SharpenFade,
    pub wm: WindowManager,

    pub screen_center: Vec3,
    pub screen_size: Vec3,
    pub screen_found: bool,

    /// Last frame's combined matrix, kept for picking on click.
    pub view_proj: Mat4,
}

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let inputs = {
            let mut st = self.state.borrow_mut();

            let cues = st.director.tick(dt_sec);
            for cue in cues {
                apply_cue(&mut st, cue);
            }

            st.sharpen.update(dt_sec);
            st.screen.update(dt_sec);
            if let Some(done) = st.camera.update(dt_sec) {
                if done == DollyDone::Desktop {
                    st.director.desktop_dolly_done();
                }
            }

            let (eye, forward) = st.camera.view();
            let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
            let proj = Mat4::perspective_rh(CAMERA_FOV_Y_RAD, aspect, CAMERA_Z_NEAR, CAMERA_Z_FAR);
            let view = Mat4::look_to_rh(eye, forward, Vec3::Y);
            st.view_proj = proj * view;

            render::FrameInputs {
                view_proj: st.view_proj,
                eye,
                bloom_strength: st.sharpen.bloom_strength(),
                motion_strength: st.motion_blur.effective(),
                screen: st.screen.snapshot(),
                screen_aspect: st.screen.aspect(),
                screen_glow: st.screen.boot_progress() * SCREEN_EMISSIVE_MAX,
            }
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &inputs) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn apply_cue(st: &mut AppState, cue: Cue) {
    let document = dom::window_document();
    match cue {
        Cue::SharpenRoom => st.sharpen.start(),
        Cue::MotionBlurOn => st.motion_blur.activate(),
        Cue::MotionBlurOff => st.motion_blur.deactivate(),
        Cue::DollyToMonitor => {
            if st.screen_found {
                st.camera.zoom_to_monitor(st.screen_center);
            }
        }
        Cue::ShowHintCard => {
            if let Some(d) = &document {
                overlay::show_hint(d);
            }
        }
        Cue::BootScreen => st.screen.start_boot(),
        // The director flips its own armed flag when this fires.
        Cue::ArmMonitorClick => {}
        Cue::DollyToDesktop => {
            st.camera.zoom_to_desktop(st.screen_center);
        }
        Cue::FadeOutCanvas => {
            if let Some(d) = &document {
                overlay::fade_out_canvas(d);
            }
        }
        Cue::ShowDesktop => {
            if let Some(d) = &document {
                overlay::show_desktop(d);
                overlay::apply_theme(d, st.wm.theme());
                overlay::sync_windows(d, &st.wm);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &crate::core::scene::SceneDoc,
    screen_index: Option<usize>,
    screen_aspect: f32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, screen_index, screen_aspect).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
