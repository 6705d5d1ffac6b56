//! The slide carousel: a fixed ring of 3D slides, one active at a time, with
//! tween-driven transitions between them.
//!
//! The carousel is pure state: the web frontend feeds it input events and a
//! per-frame `update`, then reads back draw instances. Transitions follow a
//! drop-on-busy policy: an `advance` request that arrives while one is in
//! flight is discarded outright, never queued.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::constants::*;
use crate::tween::{Channel, Completion, Easing, TweenTarget, Tweener};

/// Per-slide lifecycle. Phase changes are driven by transition triggers and
/// tween completions, never inferred from the continuous scale value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Hidden,
    Entering,
    Active,
    Exiting,
}

#[derive(Clone, Debug)]
pub struct Slide {
    pub position: Vec3,
    /// Euler XYZ rotation, radians.
    pub rotation: Vec3,
    /// Uniform scale; 0 is fully off-stage, 1 fully shown. This is the sole
    /// visibility signal.
    pub scale: f32,
    /// Rotation the slide settles into when it becomes active.
    pub base_rotation: Vec3,
    /// Per-frame rotation increment applied while the slide is active.
    pub spin_velocity: Vec3,
    pub color: [f32; 3],
    pub phase: SlidePhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Idle,
    Running,
}

/// One slide flattened for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct SlideInstance {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub emissive: f32,
}

pub struct Carousel {
    slides: Vec<Slide>,
    active: usize,
    transition: Transition,
    /// Simulation clock for the idle bob, advanced by a fixed step per frame.
    clock: f32,
    /// Last pointer position, normalized to [-1, 1] on both axes, y up.
    pointer: Vec2,
    tweener: Tweener,
}

impl Carousel {
    /// Build the fixed slide ring and start the entrance animation on slide 0.
    ///
    /// Spin velocities are drawn from per-slide RNGs derived from `seed`, so a
    /// given seed reproduces the same idle motion.
    pub fn new(seed: u64) -> Self {
        let slides = (0..SLIDE_COLORS.len())
            .map(|i| {
                let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let mut rng = StdRng::seed_from_u64(mix);
                let mut spin = || (rng.gen::<f32>() - 0.5) * SPIN_VELOCITY_RANGE;
                let base = Vec3::from(SLIDE_BASE_ROTATIONS[i]);
                Slide {
                    position: Vec3::new(0.0, 0.0, if i == 0 { 0.0 } else { OFFSTAGE_Z }),
                    rotation: base,
                    scale: 0.0,
                    base_rotation: base,
                    spin_velocity: Vec3::new(spin(), spin(), spin()),
                    color: SLIDE_COLORS[i],
                    phase: SlidePhase::Hidden,
                }
            })
            .collect::<Vec<_>>();
        let mut carousel = Self {
            slides,
            active: 0,
            transition: Transition::Idle,
            clock: 0.0,
            pointer: Vec2::ZERO,
            tweener: Tweener::default(),
        };
        // Entrance: grow slide 0 in place. This does not arm the transition
        // guard; only `advance` does.
        carousel.slides[0].phase = SlidePhase::Entering;
        carousel
            .tweener
            .scale_to(0, 0.0, 1.0, ENTER_DURATION, Easing::BackOut);
        carousel
    }

    /// Move to the next slide in ring order.
    ///
    /// Dropped with no effect while a transition is in flight. On acceptance
    /// the active index changes immediately; the animations catch up.
    pub fn advance(&mut self) {
        if self.transition == Transition::Running {
            log::debug!("advance dropped: transition in flight");
            return;
        }
        self.transition = Transition::Running;
        let out = self.active;
        self.active = (self.active + 1) % self.slides.len();
        let inc = self.active;

        let outgoing = &mut self.slides[out];
        outgoing.phase = SlidePhase::Exiting;
        let (scale, rotation) = (outgoing.scale, outgoing.rotation);
        self.tweener
            .scale_to(out, scale, 0.0, EXIT_DURATION, Easing::BackIn);
        // Full turn on x and y, half turn on z, on the way out.
        let spin_target = rotation
            + Vec3::new(
                std::f32::consts::TAU,
                std::f32::consts::TAU,
                std::f32::consts::PI,
            );
        self.tweener
            .rotate_to(out, rotation, spin_target, EXIT_DURATION, Easing::QuadInOut);

        let incoming = &mut self.slides[inc];
        incoming.phase = SlidePhase::Entering;
        // Bring the slide back from the off-stage parking depth before it grows.
        incoming.position = Vec3::ZERO;
        let (scale, rotation) = (incoming.scale, incoming.rotation);
        let base = incoming.base_rotation;
        self.tweener
            .scale_to(inc, scale, 1.0, ENTER_DURATION, Easing::BackOut);
        self.tweener
            .rotate_to(inc, rotation, base, ENTER_DURATION, Easing::QuadOut);
    }

    /// Per-frame update: step tweens by the real `dt`, advance the idle clock
    /// by its fixed step, and apply idle motion to the active slide.
    ///
    /// Idle motion only touches a slide in `Active` phase, and no tween ever
    /// targets an `Active` slide, so tween writes and idle writes never land on
    /// the same property in one frame.
    pub fn update(&mut self, dt: f32) {
        let completed = self.tweener.step(dt, self.slides.as_mut_slice());
        for completion in completed {
            self.on_tween_complete(completion);
        }

        self.clock += FIXED_CLOCK_STEP;
        let (pointer, clock) = (self.pointer, self.clock);
        let slide = &mut self.slides[self.active];
        if slide.phase == SlidePhase::Active {
            slide.rotation += slide.spin_velocity;
            slide.position.x = pointer.x * PARALLAX_DAMPING;
            slide.position.y = pointer.y * PARALLAX_DAMPING;
            slide.position.z = (clock * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
        }
    }

    fn on_tween_complete(&mut self, completion: Completion) {
        if completion.channel != Channel::Scale {
            return;
        }
        let index = completion.slide;
        match self.slides[index].phase {
            SlidePhase::Entering => {
                self.slides[index].phase = SlidePhase::Active;
                if index == self.active {
                    self.transition = Transition::Idle;
                }
            }
            SlidePhase::Exiting => {
                self.slides[index].phase = SlidePhase::Hidden;
                // Park fully-hidden slides far along the depth axis so residual
                // positioning can never leave them visible.
                self.slides[index].position = Vec3::new(0.0, 0.0, OFFSTAGE_Z);
            }
            _ => {}
        }
    }

    pub fn set_pointer(&mut self, offset: Vec2) {
        self.pointer = offset;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition == Transition::Running
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Flatten the ring into renderer instances, hidden slides included (their
    /// zero scale rasterizes nothing).
    pub fn instances(&self, out: &mut Vec<SlideInstance>) {
        out.clear();
        out.extend(self.slides.iter().map(|s| SlideInstance {
            position: s.position,
            rotation: s.rotation,
            scale: s.scale,
            color: s.color,
            emissive: EMISSIVE_INTENSITY,
        }));
    }
}

impl TweenTarget for [Slide] {
    fn set_scale(&mut self, index: usize, scale: f32) {
        if let Some(slide) = self.get_mut(index) {
            slide.scale = scale;
        }
    }

    fn set_rotation(&mut self, index: usize, rotation: Vec3) {
        if let Some(slide) = self.get_mut(index) {
            slide.rotation = rotation;
        }
    }
}
