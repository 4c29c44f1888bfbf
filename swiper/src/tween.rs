use core::cell::Cell;
use std::rc::Rc;

/// Easing curves available to scroll animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuart,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Samples the curve at normalized time `t` in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOutQuart => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }

    /// Classic `(time, begin, change, duration)` form.
    ///
    /// For [`Easing::EaseOutQuart`] this is `-c * ((t / d - 1)^4 - 1) + b`.
    pub fn apply(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        if d <= 0.0 {
            return b + c;
        }
        b + c * self.sample((t / d).clamp(0.0, 1.0))
    }
}

/// A time-driven interpolation between two scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        self.easing.apply(
            elapsed as f64,
            self.from,
            self.to - self.from,
            self.duration_ms as f64,
        )
    }
}

/// Shared cancel capability of an [`Animation`].
///
/// Clones refer to the same animation; cancelling any of them stops it.
#[derive(Clone, Debug, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Done,
    Cancelled,
}

/// A frame-driven tween with a cancel handle.
///
/// The host calls [`Animation::step`] once per frame; each step reports the eased value through
/// the update callback. The final step snaps to `to`. After completion or cancellation no further
/// values are reported.
#[derive(Clone, Debug)]
pub struct Animation {
    tween: Tween,
    handle: AnimationHandle,
    finished: bool,
}

impl Animation {
    pub fn new(tween: Tween) -> Self {
        sdebug!(
            from = tween.from,
            to = tween.to,
            duration_ms = tween.duration_ms,
            "Animation::new"
        );
        Self {
            tween,
            handle: AnimationHandle::default(),
            finished: false,
        }
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn handle(&self) -> AnimationHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }

    pub fn is_active(&self) -> bool {
        !self.finished && !self.handle.is_cancelled()
    }

    pub fn step(&mut self, now_ms: u64, mut on_update: impl FnMut(f64)) -> AnimationState {
        if self.handle.is_cancelled() {
            return AnimationState::Cancelled;
        }
        if self.finished {
            return AnimationState::Done;
        }
        if self.tween.is_done(now_ms) {
            self.finished = true;
            on_update(self.tween.to);
            return AnimationState::Done;
        }
        on_update(self.tween.sample(now_ms));
        AnimationState::Running
    }
}
