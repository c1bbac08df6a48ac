use crate::constants::*;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::tween::{Easing, Tween, TweenVec3};

/// Mutually exclusive camera modes. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Orbit,
    DollyAnimating,
    FirstPerson,
}

/// Which scripted move just finished, reported once from `update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DollyDone {
    Monitor,
    Desktop,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDevice {
    Mouse,
    Touch,
}

/// Camera transform owner: bounded orbit, two scripted dollies, and a
/// held-button first-person look with decaying handheld shake.
///
/// Every public animation entry point either starts a transition or is
/// silently rejected while one is in flight; transitions never stack.
pub struct CameraRig {
    mode: CameraMode,
    position: Vec3,
    orbit_target: Vec3,

    // Spherical orbit state around `orbit_target`.
    azimuth: f32,
    polar: f32,
    distance: f32,

    // First-person look angles, radians, clamped each input.
    yaw: f32,
    pitch: f32,

    // In-flight scripted move. `dolly_kind` doubles as the guard flag.
    dolly_pos: Option<TweenVec3>,
    dolly_yaw: Option<Tween>,
    dolly_pitch: Option<Tween>,
    dolly_kind: Option<DollyDone>,

    // Handheld shake, fed by recent pointer speed and damped every frame.
    shake_offset: Vec3,
    pointer_speed: f32,
    rng: SmallRng,
}

impl CameraRig {
    pub fn new(seed: u64) -> Self {
        let position = Vec3::from(CAMERA_START_POS);
        let orbit_target = Vec3::from(ORBIT_TARGET);
        let rel = position - orbit_target;
        let distance = rel.length().max(1e-4);
        Self {
            mode: CameraMode::Orbit,
            position,
            orbit_target,
            azimuth: rel.x.atan2(rel.z),
            polar: (rel.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
            yaw: 0.0,
            pitch: 0.0,
            dolly_pos: None,
            dolly_yaw: None,
            dolly_pitch: None,
            dolly_kind: None,
            shake_offset: Vec3::ZERO,
            pointer_speed: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.dolly_kind.is_some()
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Eye position and forward direction for the current mode, shake
    /// included while looking around in first person.
    pub fn view(&self) -> (Vec3, Vec3) {
        match self.mode {
            CameraMode::Orbit => {
                let fwd = (self.orbit_target - self.position).normalize_or_zero();
                (self.position, fwd)
            }
            CameraMode::DollyAnimating => (self.position, forward_from(self.yaw, self.pitch)),
            CameraMode::FirstPerson => {
                let yaw = self.yaw + self.shake_offset.y;
                let pitch = self.pitch + self.shake_offset.x;
                (self.position, forward_from(yaw, pitch))
            }
        }
    }

    /// Pointer drag while in orbit mode; angles and distance stay clamped to
    /// the configured frontal window.
    ///
    /// The start framing sits a few degrees below the polar band, so the band
    /// is extended to the current angle: a drag can always move back toward
    /// the band but never further out, and the first drag never snaps the eye
    /// onto the clamp.
    pub fn orbit_drag(&mut self, dx_px: f32, dy_px: f32) {
        if self.mode != CameraMode::Orbit {
            return;
        }
        self.azimuth = (self.azimuth - dx_px * ORBIT_DRAG_SENSITIVITY)
            .clamp(-ORBIT_AZIMUTH_MAX_RAD, ORBIT_AZIMUTH_MAX_RAD);
        let polar_lo = ORBIT_POLAR_MIN_RAD.min(self.polar);
        let polar_hi = ORBIT_POLAR_MAX_RAD.max(self.polar);
        self.polar = (self.polar - dy_px * ORBIT_DRAG_SENSITIVITY).clamp(polar_lo, polar_hi);
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Pointer drag while in first person (caller gates on the primary
    /// button/finger being held). Yaw and pitch never leave +-60 degrees.
    pub fn look_drag(&mut self, dx_px: f32, dy_px: f32, device: PointerDevice) {
        if self.mode != CameraMode::FirstPerson {
            return;
        }
        let sensitivity = match device {
            PointerDevice::Mouse => FP_MOUSE_SENSITIVITY,
            PointerDevice::Touch => FP_TOUCH_SENSITIVITY,
        };
        self.yaw = (self.yaw - dx_px * sensitivity).clamp(-FP_MAX_YAW_RAD, FP_MAX_YAW_RAD);
        self.pitch = (self.pitch - dy_px * sensitivity).clamp(-FP_MAX_PITCH_RAD, FP_MAX_PITCH_RAD);
        self.pointer_speed = (dx_px * dx_px + dy_px * dy_px).sqrt();
    }

    /// Cinematic approach: 3s ease-in-out to just above and in front of the
    /// monitor. Rejected silently while any dolly is in flight.
    pub fn zoom_to_monitor(&mut self, monitor_pos: Vec3) -> bool {
        if self.is_animating() {
            return false;
        }
        let offset = Vec3::from(MONITOR_EYE_OFFSET);
        self.freeze_look_direction();
        self.mode = CameraMode::DollyAnimating;
        self.dolly_pos = Some(TweenVec3::new(
            self.position,
            monitor_pos + offset,
            ZOOM_MONITOR_SECS,
            Easing::InOutQuad,
        ));
        self.dolly_kind = Some(DollyDone::Monitor);
        log::info!(
            "[camera] dolly to monitor, {:.1}s, target {:?}",
            ZOOM_MONITOR_SECS,
            monitor_pos + offset
        );
        true
    }

    /// Forward plunge through the screen plane: Z only, while yaw/pitch ease
    /// back to zero. Same in-flight guard as the approach.
    pub fn zoom_to_desktop(&mut self, monitor_pos: Vec3) -> bool {
        if self.is_animating() {
            return false;
        }
        let end = Vec3::new(
            self.position.x,
            self.position.y,
            monitor_pos.z - DESKTOP_Z_OVERSHOOT,
        );
        self.mode = CameraMode::DollyAnimating;
        self.shake_offset = Vec3::ZERO;
        self.dolly_pos = Some(TweenVec3::new(
            self.position,
            end,
            ZOOM_DESKTOP_SECS,
            Easing::InOutQuad,
        ));
        self.dolly_yaw = Some(Tween::new(self.yaw, 0.0, ZOOM_DESKTOP_SECS, Easing::InOutQuad));
        self.dolly_pitch = Some(Tween::new(
            self.pitch,
            0.0,
            ZOOM_DESKTOP_SECS,
            Easing::InOutQuad,
        ));
        self.dolly_kind = Some(DollyDone::Desktop);
        log::info!("[camera] dolly into desktop, {:.1}s", ZOOM_DESKTOP_SECS);
        true
    }

    /// Reverse to the initial orbit framing.
    pub fn reset_camera(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.mode = CameraMode::DollyAnimating;
        self.shake_offset = Vec3::ZERO;
        self.dolly_pos = Some(TweenVec3::new(
            self.position,
            Vec3::from(CAMERA_START_POS),
            RESET_CAMERA_SECS,
            Easing::InOutQuad,
        ));
        self.dolly_yaw = Some(Tween::new(self.yaw, 0.0, RESET_CAMERA_SECS, Easing::InOutQuad));
        self.dolly_pitch = Some(Tween::new(
            self.pitch,
            0.0,
            RESET_CAMERA_SECS,
            Easing::InOutQuad,
        ));
        self.dolly_kind = Some(DollyDone::Reset);
        true
    }

    /// Per-frame step: advances in-flight tweens, derives the orbit position,
    /// and damps the handheld shake. Reports a completed dolly exactly once.
    pub fn update(&mut self, dt_secs: f32) -> Option<DollyDone> {
        match self.mode {
            CameraMode::Orbit => {
                let (sp, cp) = self.polar.sin_cos();
                let (sa, ca) = self.azimuth.sin_cos();
                self.position =
                    self.orbit_target + self.distance * Vec3::new(sp * sa, cp, sp * ca);
                None
            }
            CameraMode::DollyAnimating => self.step_dolly(dt_secs),
            CameraMode::FirstPerson => {
                self.step_shake();
                None
            }
        }
    }

    fn step_dolly(&mut self, dt_secs: f32) -> Option<DollyDone> {
        if let Some(tw) = &mut self.dolly_pos {
            self.position = tw.advance(dt_secs);
        }
        if let Some(tw) = &mut self.dolly_yaw {
            self.yaw = tw.advance(dt_secs);
        }
        if let Some(tw) = &mut self.dolly_pitch {
            self.pitch = tw.advance(dt_secs);
        }
        let done = self.dolly_pos.map(|tw| tw.finished()).unwrap_or(true)
            && self.dolly_yaw.map(|tw| tw.finished()).unwrap_or(true)
            && self.dolly_pitch.map(|tw| tw.finished()).unwrap_or(true);
        if !done {
            return None;
        }
        let kind = self.dolly_kind.take();
        self.dolly_pos = None;
        self.dolly_yaw = None;
        self.dolly_pitch = None;
        match kind {
            Some(DollyDone::Monitor) => {
                // Landed in front of the screen: hand over to the look-around.
                self.mode = CameraMode::FirstPerson;
                self.yaw = 0.0;
                self.pitch = 0.0;
                self.shake_offset = Vec3::ZERO;
                self.pointer_speed = 0.0;
                log::info!("[camera] monitor dolly complete, first person enabled");
            }
            Some(DollyDone::Desktop) => {
                self.mode = CameraMode::FirstPerson;
                log::info!("[camera] desktop dolly complete");
            }
            Some(DollyDone::Reset) => {
                self.mode = CameraMode::Orbit;
                let rel = self.position - self.orbit_target;
                self.distance = rel.length().max(1e-4);
                self.azimuth = rel.x.atan2(rel.z);
                self.polar = (rel.y / self.distance).clamp(-1.0, 1.0).acos();
            }
            None => {}
        }
        kind
    }

    fn step_shake(&mut self) {
        if self.pointer_speed > 0.0 {
            let intensity = SHAKE_INTENSITY * self.pointer_speed;
            self.shake_offset.x += (self.rng.gen::<f32>() - 0.5) * intensity;
            self.shake_offset.y += (self.rng.gen::<f32>() - 0.5) * intensity;
            self.shake_offset.z += (self.rng.gen::<f32>() - 0.5) * intensity * 0.5;
        }
        self.shake_offset *= SHAKE_DECAY_PER_FRAME;
        self.pointer_speed *= POINTER_SPEED_DECAY_PER_FRAME;
    }

    #[inline]
    pub fn shake_magnitude(&self) -> f32 {
        self.shake_offset.length()
    }

    // Keep whatever direction the orbit was showing so the dolly does not
    // snap the view when controls hand off.
    fn freeze_look_direction(&mut self) {
        if self.mode == CameraMode::Orbit {
            let fwd = (self.orbit_target - self.position).normalize_or_zero();
            let cos_pitch = (1.0 - fwd.y * fwd.y).max(1e-6).sqrt();
            self.pitch = fwd.y.clamp(-1.0, 1.0).asin();
            self.yaw = (-fwd.x / cos_pitch).atan2(-fwd.z / cos_pitch);
        }
    }
}

/// Forward vector for yaw-then-pitch rotation of the -Z axis.
#[inline]
pub fn forward_from(yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vec3::new(-sy * cp, sp, -cy * cp)
}
