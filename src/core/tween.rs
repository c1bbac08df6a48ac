use glam::Vec3;

/// Easing curves used by the scripted camera moves and screen animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutBack,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => t * (2.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::OutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
        }
    }
}

/// A scalar interpolation over a fixed duration. One tween per field at a
/// time; owners enforce that with their own in-flight guards.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: f32,
    end: f32,
    duration_secs: f32,
    easing: Easing,
    elapsed_secs: f32,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration_secs: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_secs: duration_secs.max(0.0),
            easing,
            elapsed_secs: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt_secs: f32) -> f32 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.value()
    }

    #[inline]
    pub fn value(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}

/// Component-wise Vec3 tween, used for camera dollies.
#[derive(Clone, Copy, Debug)]
pub struct TweenVec3 {
    start: Vec3,
    end: Vec3,
    duration_secs: f32,
    easing: Easing,
    elapsed_secs: f32,
}

impl TweenVec3 {
    pub fn new(start: Vec3, end: Vec3, duration_secs: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_secs: duration_secs.max(0.0),
            easing,
            elapsed_secs: 0.0,
        }
    }

    pub fn advance(&mut self, dt_secs: f32) -> Vec3 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.value()
    }

    #[inline]
    pub fn value(&self) -> Vec3 {
        if self.duration_secs <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0);
        self.start.lerp(self.end, self.easing.apply(t))
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}

/// A deferred action on the frame clock.
#[derive(Clone, Copy, Debug)]
struct Deferred<A> {
    at_secs: f32,
    action: A,
}

/// Cancellable deferred actions, ticked from the frame loop.
///
/// Replaces timer callbacks: due actions fire in registration order between
/// frames, and `cancel_all` guarantees teardown never runs a stale one.
#[derive(Clone, Debug)]
pub struct Timeline<A> {
    pending: Vec<Deferred<A>>,
    elapsed_secs: f32,
}

impl<A: Copy> Timeline<A> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            elapsed_secs: 0.0,
        }
    }

    /// Schedule `action` to fire `delay_secs` from now.
    pub fn schedule(&mut self, delay_secs: f32, action: A) {
        self.pending.push(Deferred {
            at_secs: self.elapsed_secs + delay_secs.max(0.0),
            action,
        });
    }

    /// Advance the clock and collect every action now due, preserving
    /// registration order among actions due on the same tick.
    pub fn tick(&mut self, dt_secs: f32) -> Vec<A> {
        self.elapsed_secs += dt_secs.max(0.0);
        let now = self.elapsed_secs;
        let mut fired = Vec::new();
        self.pending.retain(|d| {
            if d.at_secs <= now {
                fired.push(d.action);
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<A: Copy> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}
