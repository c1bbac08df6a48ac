use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::AppState;
use crate::overlay;

/// Keyboard shortcuts, decoded separately from the DOM wiring so the
/// mapping is testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ResetCamera,
    ToggleTheme,
    ToggleHint,
    DismissHint,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::ResetCamera),
        "t" | "T" => Some(KeyAction::ToggleTheme),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Escape" => Some(KeyAction::DismissHint),
        _ => None,
    }
}

pub fn wire_global_keydown(state: Rc<RefCell<AppState>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let Some(action) = action_for_key(&ev.key()) else {
                    return;
                };
                let Some(document) = dom::window_document() else {
                    return;
                };
                match action {
                    KeyAction::ResetCamera => {
                        let mut st = state.borrow_mut();
                        if st.camera.reset_camera() {
                            log::info!("[keys] camera reset");
                        }
                    }
                    KeyAction::ToggleTheme => {
                        let theme = state.borrow_mut().wm.toggle_theme();
                        overlay::apply_theme(&document, theme);
                    }
                    KeyAction::ToggleHint => {
                        overlay::toggle_hint(&document);
                        ev.prevent_default();
                    }
                    KeyAction::DismissHint => {
                        overlay::hide_hint(&document);
                    }
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
