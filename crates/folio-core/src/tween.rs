//! Minimal property tweening engine for slide transitions.
//!
//! Each tween interpolates one channel (uniform scale or Euler rotation) of one
//! slide from a captured start value to a target along an easing curve. Starting
//! a new tween on a channel that already has one in flight replaces it; the
//! replaced tween never reports completion. Values are written through the
//! [`TweenTarget`] seam so the engine stays independent of the slide storage.

use glam::Vec3;
use smallvec::SmallVec;

/// Overshoot factor shared by the two "back" curves.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Named interpolation shapes. `BackIn` anticipates (dips past the start)
/// before committing; `BackOut` overshoots the target and settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    BackIn,
    BackOut,
    QuadInOut,
    QuadOut,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to an eased progress factor.
    /// The back curves intentionally leave the [0, 1] range mid-flight.
    pub fn sample(self, t: f32) -> f32 {
        let s = BACK_OVERSHOOT;
        match self {
            Easing::Linear => t,
            Easing::BackIn => t * t * ((s + 1.0) * t - s),
            Easing::BackOut => {
                let u = t - 1.0;
                1.0 + u * u * ((s + 1.0) * u + s)
            }
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 2.0 * u * u
                }
            }
            Easing::QuadOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Scale,
    Rotation,
}

#[derive(Clone, Copy, Debug)]
enum Span {
    Scalar { from: f32, to: f32 },
    Triple { from: Vec3, to: Vec3 },
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    slide: usize,
    channel: Channel,
    span: Span,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

/// A finished tween, identified by the slide and channel it was driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub slide: usize,
    pub channel: Channel,
}

/// Write access the tweener needs into the slide collection.
pub trait TweenTarget {
    fn set_scale(&mut self, index: usize, scale: f32);
    fn set_rotation(&mut self, index: usize, rotation: Vec3);
}

#[derive(Default)]
pub struct Tweener {
    active: SmallVec<[Tween; 8]>,
}

impl Tweener {
    pub fn scale_to(&mut self, slide: usize, from: f32, to: f32, duration: f32, easing: Easing) {
        self.push(Tween {
            slide,
            channel: Channel::Scale,
            span: Span::Scalar { from, to },
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    pub fn rotate_to(&mut self, slide: usize, from: Vec3, to: Vec3, duration: f32, easing: Easing) {
        self.push(Tween {
            slide,
            channel: Channel::Rotation,
            span: Span::Triple { from, to },
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    fn push(&mut self, tween: Tween) {
        // Retarget: at most one tween per (slide, channel).
        self.active
            .retain(|t| !(t.slide == tween.slide && t.channel == tween.channel));
        self.active.push(tween);
    }

    pub fn is_animating(&self, slide: usize, channel: Channel) -> bool {
        self.active
            .iter()
            .any(|t| t.slide == slide && t.channel == channel)
    }

    /// Advance every active tween by `dt` seconds, writing interpolated values
    /// into `target`. Returns the tweens that reached their end this step; each
    /// has already written its exact end value.
    pub fn step<T>(&mut self, dt: f32, target: &mut T) -> SmallVec<[Completion; 4]>
    where
        T: TweenTarget + ?Sized,
    {
        let mut completed = SmallVec::new();
        for tween in self.active.iter_mut() {
            tween.elapsed += dt;
            let t = if tween.duration > 0.0 {
                (tween.elapsed / tween.duration).min(1.0)
            } else {
                1.0
            };
            let eased = tween.easing.sample(t);
            match tween.span {
                Span::Scalar { from, to } => {
                    target.set_scale(tween.slide, from + (to - from) * eased)
                }
                Span::Triple { from, to } => {
                    target.set_rotation(tween.slide, from + (to - from) * eased)
                }
            }
            if t >= 1.0 {
                completed.push(Completion {
                    slide: tween.slide,
                    channel: tween.channel,
                });
            }
        }
        self.active.retain(|t| t.elapsed < t.duration);
        completed
    }
}
