use crate::constants::*;

use super::tween::{Easing, Tween};

/// Screens shown on the virtual monitor, in strict forward order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScreenPhase {
    Off,
    Login,
    Loading,
    Desktop,
}

impl ScreenPhase {
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            ScreenPhase::Off => 0,
            ScreenPhase::Login => 1,
            ScreenPhase::Loading => 2,
            ScreenPhase::Desktop => 3,
        }
    }
}

/// Per-frame snapshot the screen render pass turns into uniforms.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenSnapshot {
    pub bg: [f32; 3],
    pub phase: u32,
    pub boot_progress: f32,
    pub login_scale: f32,
    pub spinner_scale: f32,
    pub spinner_angle: f32,
    pub desktop_scale: f32,
}

/// The virtual screen state machine: Off -> Login -> Loading -> Desktop,
/// never backward. Owns the boot ramp and the entrance pops of each screen.
pub struct VirtualScreen {
    phase: ScreenPhase,
    aspect: f32,

    boot_progress: f32,
    boot: Option<Tween>,

    // Armed only while in Login; a missed click leaves it armed.
    login_armed: bool,
    login_scale: f32,
    login_pop: Option<Tween>,

    spinner_scale: f32,
    spinner_pop: Option<Tween>,
    spinner_angle: f32,
    loading_elapsed: f32,

    desktop_scale: f32,
    desktop_pop: Option<Tween>,
}

impl VirtualScreen {
    /// `aspect` is the located monitor mesh's physical width/height ratio;
    /// the offscreen target is sized from it so nothing stretches.
    pub fn new(aspect: f32) -> Self {
        Self {
            phase: ScreenPhase::Off,
            aspect: aspect.max(0.1),
            boot_progress: 0.0,
            boot: None,
            login_armed: false,
            login_scale: 0.0,
            login_pop: None,
            spinner_scale: 0.0,
            spinner_pop: None,
            spinner_angle: 0.0,
            loading_elapsed: 0.0,
            desktop_scale: 0.0,
            desktop_pop: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn boot_progress(&self) -> f32 {
        self.boot_progress
    }

    #[inline]
    pub fn login_armed(&self) -> bool {
        self.login_armed
    }

    /// Power-on ramp; only meaningful from Off, ignored afterwards.
    pub fn start_boot(&mut self) {
        if self.phase != ScreenPhase::Off || self.boot.is_some() {
            return;
        }
        log::info!("[screen] boot sequence started, {:.1}s", BOOT_SECS);
        self.boot = Some(Tween::new(0.0, 1.0, BOOT_SECS, Easing::OutQuad));
    }

    /// Pointer click in screen UV space. Only the armed login button reacts;
    /// a miss re-arms rather than transitioning. Returns true if consumed.
    pub fn handle_click(&mut self, uv: [f32; 2]) -> bool {
        if self.phase != ScreenPhase::Login || !self.login_armed {
            return false;
        }
        if !login_button_hit(uv) {
            // Miss: stay armed, wait for the next click.
            return false;
        }
        log::info!("[screen] login clicked");
        self.login_armed = false;
        self.phase = ScreenPhase::Loading;
        self.loading_elapsed = 0.0;
        self.login_pop = Some(Tween::new(self.login_scale, 0.0, 0.3, Easing::InQuad));
        self.spinner_pop = Some(Tween::new(0.0, 1.0, SPINNER_POP_SECS, Easing::OutBack));
        true
    }

    /// Per-frame step: boot ramp, screen pops, spinner, and the fixed
    /// loading dwell that auto-advances to the desktop.
    pub fn update(&mut self, dt_secs: f32) {
        if let Some(tw) = &mut self.boot {
            self.boot_progress = tw.advance(dt_secs);
            if tw.finished() {
                self.boot = None;
                self.phase = ScreenPhase::Login;
                self.login_armed = true;
                self.login_pop = Some(Tween::new(0.0, 1.0, LOGIN_POP_SECS, Easing::OutBack));
                log::info!("[screen] boot complete, login shown");
            }
        }
        if let Some(tw) = &mut self.login_pop {
            self.login_scale = tw.advance(dt_secs);
            if tw.finished() {
                self.login_pop = None;
            }
        }
        if let Some(tw) = &mut self.spinner_pop {
            self.spinner_scale = tw.advance(dt_secs);
            if tw.finished() {
                self.spinner_pop = None;
            }
        }
        if let Some(tw) = &mut self.desktop_pop {
            self.desktop_scale = tw.advance(dt_secs);
            if tw.finished() {
                self.desktop_pop = None;
            }
        }
        if self.phase == ScreenPhase::Loading {
            self.spinner_angle += dt_secs * SPINNER_SPEED_RAD_PER_SEC;
            self.loading_elapsed += dt_secs;
            if self.loading_elapsed >= LOADING_DWELL_SECS {
                self.phase = ScreenPhase::Desktop;
                self.spinner_pop = Some(Tween::new(self.spinner_scale, 0.0, 0.3, Easing::InQuad));
                self.desktop_pop = Some(Tween::new(0.0, 1.0, DESKTOP_POP_SECS, Easing::OutBack));
                log::info!("[screen] desktop shown");
            }
        }
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        let p = self.boot_progress.clamp(0.0, 1.0);
        ScreenSnapshot {
            bg: [
                SCREEN_BG_ON[0] * p,
                SCREEN_BG_ON[1] * p,
                SCREEN_BG_ON[2] * p,
            ],
            phase: self.phase.index(),
            boot_progress: p,
            login_scale: self.login_scale,
            spinner_scale: self.spinner_scale,
            spinner_angle: self.spinner_angle,
            desktop_scale: self.desktop_scale,
        }
    }
}

/// Login button hit test in screen UV space ([0,1] x [0,1], y down).
#[inline]
pub fn login_button_hit(uv: [f32; 2]) -> bool {
    (uv[0] - LOGIN_BUTTON_CENTER_UV[0]).abs() <= LOGIN_BUTTON_HALF_UV[0]
        && (uv[1] - LOGIN_BUTTON_CENTER_UV[1]).abs() <= LOGIN_BUTTON_HALF_UV[1]
}
