/// Choreography, camera and render tuning constants.
///
/// The whole intro sequence is a fixed script; every delay and duration in it
/// lives here by name so the ordering in `core/director.rs` stays data-driven.
// ---------------- Intro choreography (seconds) ----------------
// Bloom strength fade 5 -> 0 once the start button is pressed.
pub const SHARPEN_FADE_SECS: f32 = 2.0;
// Dolly from the initial framing to just in front of the monitor.
pub const ZOOM_MONITOR_SECS: f32 = 3.0;
// Forward plunge through the screen surface.
pub const ZOOM_DESKTOP_SECS: f32 = 2.0;
// Hint card appears mid-dolly.
pub const HINT_CARD_AT_SECS: f32 = 1.5;
// Motion blur is released when the monitor dolly lands.
pub const MOTION_BLUR_OFF_AT_SECS: f32 = 3.0;
// The virtual screen starts booting as the dolly lands.
pub const BOOT_AT_SECS: f32 = 3.0;
// Monitor click becomes live two seconds after boot starts.
pub const ARM_MONITOR_CLICK_AT_SECS: f32 = 5.0;
// 3D canvas fade before the DOM desktop is revealed.
pub const CANVAS_FADE_SECS: f32 = 1.0;

// ---------------- Virtual screen ----------------
pub const BOOT_SECS: f32 = 2.0;
pub const LOADING_DWELL_SECS: f32 = 1.5;
// Powered-on background, a deep professional blue (0x1e3a8a).
pub const SCREEN_BG_ON: [f32; 3] = [0.118, 0.227, 0.541];
// Entrance pops for login / spinner / desktop groups.
pub const LOGIN_POP_SECS: f32 = 0.8;
pub const SPINNER_POP_SECS: f32 = 0.4;
pub const DESKTOP_POP_SECS: f32 = 0.6;
pub const SPINNER_SPEED_RAD_PER_SEC: f32 = 3.0;
// Login button rect in screen UV space (center, half extents).
pub const LOGIN_BUTTON_CENTER_UV: [f32; 2] = [0.5, 0.55];
pub const LOGIN_BUTTON_HALF_UV: [f32; 2] = [0.11, 0.12];
// Offscreen target width; height follows the located mesh aspect.
pub const SCREEN_TARGET_WIDTH: u32 = 1024;
pub const SCREEN_EMISSIVE_MAX: f32 = 3.0;

// ---------------- Camera ----------------
pub const CAMERA_START_POS: [f32; 3] = [0.0, 2.0, 15.0];
pub const ORBIT_TARGET: [f32; 3] = [0.0, 1.5, 0.0];
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
// Horizontal swing limited to keep the frontal view.
pub const ORBIT_AZIMUTH_MAX_RAD: f32 = std::f32::consts::PI / 6.0; // 30 deg
pub const ORBIT_POLAR_MIN_RAD: f32 = std::f32::consts::PI / 3.0; // 60 deg
pub const ORBIT_POLAR_MAX_RAD: f32 = std::f32::consts::PI / 2.2; // ~82 deg
pub const ORBIT_DRAG_SENSITIVITY: f32 = 0.005;

// Eye offset relative to the monitor at the end of the approach dolly.
pub const MONITOR_EYE_OFFSET: [f32; 3] = [0.0, 3.8, 3.2];
// The desktop plunge overshoots the screen plane.
pub const DESKTOP_Z_OVERSHOOT: f32 = 0.5;
pub const RESET_CAMERA_SECS: f32 = 2.5;

// First-person look, held-button only.
pub const FP_MOUSE_SENSITIVITY: f32 = 0.002;
pub const FP_TOUCH_SENSITIVITY: f32 = 0.003;
pub const FP_MAX_YAW_RAD: f32 = std::f32::consts::PI / 3.0; // 60 deg
pub const FP_MAX_PITCH_RAD: f32 = std::f32::consts::PI / 3.0; // 60 deg
// Handheld shake: jitter scaled by recent pointer speed, then damped.
pub const SHAKE_INTENSITY: f32 = 0.001;
pub const SHAKE_DECAY_PER_FRAME: f32 = 0.9;
pub const POINTER_SPEED_DECAY_PER_FRAME: f32 = 0.8;

// ---------------- Post-processing ----------------
pub const INITIAL_BLOOM_STRENGTH: f32 = 5.0;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;
// Heavily weighted toward the previous frame for a pronounced trail.
pub const MOTION_BLUR_STRENGTH: f32 = 0.95;

// ---------------- Projection ----------------
pub const CAMERA_FOV_Y_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 100.0;
