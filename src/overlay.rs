use web_sys as web;

use crate::core::windows::{Theme, WindowId, WindowManager};

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        _ = el.class_list().add_1("hidden");
    }
}

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-card") {
        _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-card") {
        _ = el.class_list().add_1("hidden");
    }
}

#[inline]
pub fn hint_visible(document: &web::Document) -> bool {
    document
        .get_element_by_id("hint-card")
        .map(|el| !el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    if hint_visible(document) {
        hide_hint(document);
    } else {
        show_hint(document);
    }
}

/// Start the CSS opacity transition on the 3D canvas; duration lives in the
/// stylesheet and matches the ShowDesktop delay.
#[inline]
pub fn fade_out_canvas(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("app-canvas") {
        _ = el.class_list().add_1("faded");
    }
}

#[inline]
pub fn show_desktop(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("desktop-overlay") {
        _ = el.class_list().remove_1("hidden");
    }
}

pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(el) = document.get_element_by_id("desktop-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1(Theme::Dark.css_class());
        _ = cl.remove_1(Theme::Light.css_class());
        _ = cl.add_1(theme.css_class());
    }
}

/// Mirror the window manager into the DOM: visibility, maximized state and
/// stacking order per window, plus an active marker on taskbar buttons.
pub fn sync_windows(document: &web::Document, wm: &WindowManager) {
    let focused = wm.focused();
    for id in WindowId::ALL {
        if let Some(el) = document.get_element_by_id(id.element_id()) {
            let cl = el.class_list();
            match wm.record(id) {
                Some(rec) if !rec.minimized => {
                    _ = cl.remove_1("hidden");
                    if rec.maximized {
                        _ = cl.add_1("maximized");
                    } else {
                        _ = cl.remove_1("maximized");
                    }
                    _ = el.set_attribute("style", &format!("z-index:{}", 100 + rec.z));
                }
                _ => {
                    _ = cl.add_1("hidden");
                }
            }
        }
        let task_id = format!("task-{}", &id.element_id()[4..]);
        if let Some(btn) = document.get_element_by_id(&task_id) {
            let cl = btn.class_list();
            if wm.is_open(id) {
                _ = cl.add_1("open");
            } else {
                _ = cl.remove_1("open");
            }
            if focused == Some(id) {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
    }
}
