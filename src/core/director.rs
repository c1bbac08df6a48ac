use crate::constants::*;
use smallvec::SmallVec;

use super::tween::Timeline;

/// Everything the intro script can ask the rest of the app to do. The
/// director only emits these; the frame loop interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    SharpenRoom,
    MotionBlurOn,
    MotionBlurOff,
    DollyToMonitor,
    ShowHintCard,
    BootScreen,
    ArmMonitorClick,
    DollyToDesktop,
    FadeOutCanvas,
    ShowDesktop,
}

/// Fixed intro choreography as data on one cancellable timeline.
///
/// Each user milestone (start pressed, monitor clicked, desktop dolly done)
/// schedules its batch of cues relative to that moment; `tick` drains the
/// ones now due. Guards keep every milestone single-fire.
pub struct Director {
    timeline: Timeline<Cue>,
    started: bool,
    monitor_armed: bool,
    monitor_consumed: bool,
    entered_desktop: bool,
}

impl Director {
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            started: false,
            monitor_armed: false,
            monitor_consumed: false,
            entered_desktop: false,
        }
    }

    /// The monitor responds to clicks only inside this window.
    #[inline]
    pub fn monitor_armed(&self) -> bool {
        self.monitor_armed && !self.monitor_consumed
    }

    #[inline]
    pub fn entered_desktop(&self) -> bool {
        self.entered_desktop
    }

    /// Start button pressed: schedule the whole approach sequence at once.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!("[director] intro started");
        self.timeline.schedule(0.0, Cue::SharpenRoom);
        self.timeline.schedule(0.0, Cue::MotionBlurOn);
        self.timeline.schedule(0.0, Cue::DollyToMonitor);
        self.timeline.schedule(HINT_CARD_AT_SECS, Cue::ShowHintCard);
        self.timeline.schedule(MOTION_BLUR_OFF_AT_SECS, Cue::MotionBlurOff);
        self.timeline.schedule(BOOT_AT_SECS, Cue::BootScreen);
        self.timeline.schedule(ARM_MONITOR_CLICK_AT_SECS, Cue::ArmMonitorClick);
    }

    /// Click on the monitor mesh. Consumed once, and only while armed.
    pub fn monitor_clicked(&mut self) -> bool {
        if !self.monitor_armed() {
            return false;
        }
        self.monitor_consumed = true;
        log::info!("[director] monitor clicked, plunging in");
        self.timeline.schedule(0.0, Cue::MotionBlurOn);
        self.timeline.schedule(0.0, Cue::DollyToDesktop);
        true
    }

    /// The plunge dolly landed behind the screen plane.
    pub fn desktop_dolly_done(&mut self) {
        if self.entered_desktop {
            return;
        }
        self.entered_desktop = true;
        self.timeline.schedule(0.0, Cue::MotionBlurOff);
        self.timeline.schedule(0.0, Cue::FadeOutCanvas);
        self.timeline.schedule(CANVAS_FADE_SECS, Cue::ShowDesktop);
    }

    /// Drain the cues due this frame, applying the director's own guards.
    pub fn tick(&mut self, dt_secs: f32) -> SmallVec<[Cue; 4]> {
        let mut out: SmallVec<[Cue; 4]> = SmallVec::new();
        for cue in self.timeline.tick(dt_secs) {
            if cue == Cue::ArmMonitorClick {
                self.monitor_armed = true;
            }
            out.push(cue);
        }
        out
    }

    /// Teardown: no scheduled cue may fire after this.
    pub fn cancel(&mut self) {
        self.timeline.cancel_all();
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}
