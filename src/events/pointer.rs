use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::camera::PointerDevice;
use crate::core::picking::{self, PickContext, Surface};
use crate::dom;
use crate::frame::AppState;
use crate::overlay;

/// Distance in CSS pixels past which a press counts as a drag, not a click.
const CLICK_SLOP_PX: f32 = 6.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub down: bool,
    pub last_x: f32,
    pub last_y: f32,
    pub travelled_px: f32,
}

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn device_for(ev: &web::PointerEvent) -> PointerDevice {
    if ev.pointer_type() == "touch" {
        PointerDevice::Touch
    } else {
        PointerDevice::Mouse
    }
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = dom::pointer_canvas_px(&ev, &w.canvas);
        let mut ps = w.pointer.borrow_mut();
        ps.down = true;
        ps.last_x = x;
        ps.last_y = y;
        ps.travelled_px = 0.0;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = dom::pointer_canvas_px(&ev, &w.canvas);
        let (dx, dy, dragging) = {
            let mut ps = w.pointer.borrow_mut();
            if !ps.down {
                return;
            }
            let dx = x - ps.last_x;
            let dy = y - ps.last_y;
            ps.last_x = x;
            ps.last_y = y;
            ps.travelled_px += (dx * dx + dy * dy).sqrt();
            (dx, dy, ps.travelled_px > CLICK_SLOP_PX)
        };
        if dragging {
            let mut st = w.state.borrow_mut();
            st.camera.orbit_drag(dx, dy);
            st.camera.look_drag(dx, dy, device_for(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = {
            let mut ps = w.pointer.borrow_mut();
            let was_down = ps.down;
            ps.down = false;
            was_down && ps.travelled_px <= CLICK_SLOP_PX
        };
        if !was_click {
            return;
        }
        let (x, y) = dom::pointer_canvas_px(&ev, &w.canvas);
        handle_click(&w, x, y);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resolve a canvas click against the interactive surfaces, highest
/// priority first, and apply the outcome.
fn handle_click(w: &PointerWiring, x: f32, y: f32) {
    let document = match dom::window_document() {
        Some(d) => d,
        None => return,
    };
    let rect = w.canvas.get_bounding_client_rect();
    let mut st = w.state.borrow_mut();
    if !st.screen_found {
        return;
    }
    let ray = picking::picking_ray(
        x,
        y,
        rect.width() as f32,
        rect.height() as f32,
        st.view_proj,
        st.camera.eye(),
    );
    let ctx = PickContext {
        hint_card_visible: overlay::hint_visible(&document),
        monitor_armed: st.director.monitor_armed() && !st.camera.is_animating(),
        login_armed: st.screen.login_armed(),
    };
    match picking::route_click(ctx, &ray, st.screen_center, st.screen_size) {
        Some(Surface::HintCard) => overlay::hide_hint(&document),
        Some(Surface::LoginButton { uv }) => {
            st.screen.handle_click(uv);
        }
        Some(Surface::Monitor) => {
            if st.director.monitor_clicked() {
                overlay::hide_hint(&document);
            }
        }
        None => {}
    }
}
