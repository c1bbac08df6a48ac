use crate::constants::*;

use super::tween::{Easing, Tween};

/// Frame-feedback motion blur toggle. The strength is fixed; only the
/// active flag changes, and the compositor reads `effective()` so an
/// inactive pass is an exact pass-through rather than a faint trail.
#[derive(Clone, Copy, Debug)]
pub struct MotionBlur {
    active: bool,
    strength: f32,
}

impl MotionBlur {
    pub fn new() -> Self {
        Self {
            active: false,
            strength: MOTION_BLUR_STRENGTH,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if !self.active {
            log::debug!("[blur] motion blur on");
        }
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("[blur] motion blur off");
        }
        self.active = false;
    }

    /// Previous-frame blend weight the compositor should use this frame.
    #[inline]
    pub fn effective(&self) -> f32 {
        if self.active {
            self.strength
        } else {
            0.0
        }
    }
}

impl Default for MotionBlur {
    fn default() -> Self {
        Self::new()
    }
}

/// The dreamy-to-sharp reveal: bloom strength starts high and eases to zero
/// over a fixed window once the experience begins.
#[derive(Clone, Copy, Debug)]
pub struct SharpenFade {
    strength: f32,
    fade: Option<Tween>,
}

impl SharpenFade {
    pub fn new() -> Self {
        Self {
            strength: INITIAL_BLOOM_STRENGTH,
            fade: None,
        }
    }

    /// Begin easing the bloom away. Idempotent once started.
    pub fn start(&mut self) {
        if self.fade.is_some() || self.strength <= 0.0 {
            return;
        }
        self.fade = Some(Tween::new(
            self.strength,
            0.0,
            SHARPEN_FADE_SECS,
            Easing::InOutQuad,
        ));
    }

    pub fn update(&mut self, dt_secs: f32) {
        if let Some(tw) = &mut self.fade {
            self.strength = tw.advance(dt_secs);
            if tw.finished() {
                self.fade = None;
                self.strength = 0.0;
            }
        }
    }

    #[inline]
    pub fn bloom_strength(&self) -> f32 {
        self.strength
    }
}

impl Default for SharpenFade {
    fn default() -> Self {
        Self::new()
    }
}
