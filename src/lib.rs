#![cfg(target_arch = "wasm32")]
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

use crate::core::blur::{MotionBlur, SharpenFade};
use crate::core::camera::CameraRig;
use crate::core::director::Director;
use crate::core::locator::{self, LocatorConfig};
use crate::core::screen::VirtualScreen;
use crate::core::windows::{WindowId, WindowManager};
use crate::frame::AppState;

const SCENE_URL: &str = "scene.json";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_start_button(document: &web::Document, state: Rc<RefCell<AppState>>) {
    dom::add_click_listener(document, "start-button", move || {
        state.borrow_mut().director.start();
        if let Some(d) = dom::window_document() {
            overlay::hide_start(&d);
        }
    });
}

fn sync_after(state: &Rc<RefCell<AppState>>) {
    if let Some(d) = dom::window_document() {
        overlay::sync_windows(&d, &state.borrow().wm);
    }
}

/// Hook up desktop icons, taskbar buttons and per-window chrome to the
/// window manager, mirroring its state into the DOM after every action.
fn wire_desktop(document: &web::Document, state: Rc<RefCell<AppState>>) {
    for id in WindowId::ALL {
        let short = &id.element_id()[4..];

        let st = state.clone();
        dom::add_click_listener(document, &format!("icon-{}", short), move || {
            st.borrow_mut().wm.open(id);
            sync_after(&st);
        });

        let st = state.clone();
        dom::add_click_listener(document, &format!("task-{}", short), move || {
            st.borrow_mut().wm.restore_or_open(id);
            sync_after(&st);
        });

        let st = state.clone();
        dom::add_click_listener(document, &format!("{}-close", id.element_id()), move || {
            st.borrow_mut().wm.close(id);
            sync_after(&st);
        });

        let st = state.clone();
        dom::add_click_listener(document, &format!("{}-min", id.element_id()), move || {
            st.borrow_mut().wm.minimize(id);
            sync_after(&st);
        });

        let st = state.clone();
        dom::add_click_listener(document, &format!("{}-max", id.element_id()), move || {
            st.borrow_mut().wm.maximize_toggle(id);
            sync_after(&st);
        });

        let st = state.clone();
        dom::add_click_listener(document, id.element_id(), move || {
            st.borrow_mut().wm.focus(id);
            sync_after(&st);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let scene = loader::load_scene(SCENE_URL).await;
    let infos = scene.mesh_infos();
    let screen_index = locator::find_screen(&infos, &LocatorConfig::default());
    let (screen_center, screen_size, screen_aspect) = match screen_index {
        Some(i) => (
            infos[i].center,
            infos[i].size,
            locator::screen_aspect(infos[i].size),
        ),
        None => (glam::Vec3::ZERO, glam::Vec3::ZERO, 16.0 / 9.0),
    };

    // Seed the shake jitter per session; tests seed explicitly instead.
    let shake_seed = js_sys::Date::now() as u64;
    let state = Rc::new(RefCell::new(AppState {
        camera: CameraRig::new(shake_seed),
        director: Director::new(),
        screen: VirtualScreen::new(screen_aspect),
        motion_blur: MotionBlur::new(),
        sharpen: SharpenFade::new(),
        wm: WindowManager::new(),
        screen_center,
        screen_size,
        screen_found: screen_index.is_some(),
        view_proj: Mat4::IDENTITY,
    }));

    wire_start_button(&document, state.clone());
    wire_desktop(&document, state.clone());
    events::wire_global_keydown(state.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        pointer: Rc::new(RefCell::new(events::PointerState::default())),
    });

    let gpu = frame::init_gpu(&canvas, &scene, screen_index, screen_aspect).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
