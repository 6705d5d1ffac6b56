// Host-side integration tests for the carousel state machine.

use folio_core::constants::{ENTER_DURATION, FIXED_CLOCK_STEP, OFFSTAGE_Z, SLIDE_COLORS};
use folio_core::{Carousel, SlidePhase};
use glam::{Vec2, Vec3};

const FRAME: f32 = FIXED_CLOCK_STEP;

/// Run enough frames for the entrance animation to finish.
fn run_entrance(carousel: &mut Carousel) {
    let frames = (ENTER_DURATION / FRAME).ceil() as usize + 10;
    for _ in 0..frames {
        carousel.update(FRAME);
    }
}

/// Run frames until the in-flight transition completes (bounded).
fn run_transition(carousel: &mut Carousel) {
    for _ in 0..200 {
        carousel.update(FRAME);
        if !carousel.is_transitioning() {
            return;
        }
    }
    panic!("transition never completed");
}

#[test]
fn construction_parks_all_but_first_slide_offstage() {
    let carousel = Carousel::new(1);
    let slides = carousel.slides();
    assert_eq!(slides.len(), SLIDE_COLORS.len());
    assert_eq!(slides[0].position.z, 0.0);
    for slide in &slides[1..] {
        assert_eq!(slide.position.z, OFFSTAGE_Z);
        assert_eq!(slide.scale, 0.0);
        assert_eq!(slide.phase, SlidePhase::Hidden);
    }
    assert_eq!(carousel.active_index(), 0);
    assert!(!carousel.is_transitioning());
}

#[test]
fn entrance_settles_first_slide_at_full_scale() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    let slides = carousel.slides();
    assert!((slides[0].scale - 1.0).abs() < 1e-6);
    assert_eq!(slides[0].phase, SlidePhase::Active);
    for slide in &slides[1..] {
        assert_eq!(slide.scale, 0.0);
    }
}

#[test]
fn entrance_overshoots_before_settling() {
    // back-out easing should briefly push the scale past 1
    let mut carousel = Carousel::new(1);
    for _ in 0..32 {
        carousel.update(FRAME);
    }
    assert!(carousel.slides()[0].scale > 1.0);
    run_entrance(&mut carousel);
    assert!((carousel.slides()[0].scale - 1.0).abs() < 1e-6);
}

#[test]
fn advance_bumps_index_immediately_and_arms_guard() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.advance();
    assert_eq!(carousel.active_index(), 1);
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.slides()[0].phase, SlidePhase::Exiting);
    assert_eq!(carousel.slides()[1].phase, SlidePhase::Entering);
}

#[test]
fn advance_while_transitioning_is_a_no_op() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.advance();
    assert!(carousel.is_transitioning());

    let before: Vec<(f32, Vec3)> = carousel
        .slides()
        .iter()
        .map(|s| (s.scale, s.position))
        .collect();
    carousel.advance();
    assert_eq!(carousel.active_index(), 1);
    assert!(carousel.is_transitioning());
    let after: Vec<(f32, Vec3)> = carousel
        .slides()
        .iter()
        .map(|s| (s.scale, s.position))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn second_advance_before_settle_keeps_index() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.advance();
    // part-way through the transition
    for _ in 0..10 {
        carousel.update(FRAME);
    }
    assert!(carousel.is_transitioning());
    carousel.advance();
    assert_eq!(carousel.active_index(), 1);

    run_transition(&mut carousel);
    assert_eq!(carousel.active_index(), 1);
    assert!((carousel.slides()[1].scale - 1.0).abs() < 1e-6);
    assert_eq!(carousel.slides()[0].scale, 0.0);
}

#[test]
fn accepted_advances_wrap_modulo_slide_count() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    let len = carousel.slides().len();
    for n in 1..=(len * 2 + 3) {
        carousel.advance();
        assert_eq!(carousel.active_index(), n % len);
        run_transition(&mut carousel);
    }
}

#[test]
fn full_cycle_restores_starting_state() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    for _ in 0..carousel.slides().len() {
        carousel.advance();
        run_transition(&mut carousel);
    }
    assert_eq!(carousel.active_index(), 0);
    assert!((carousel.slides()[0].scale - 1.0).abs() < 1e-6);
    for slide in &carousel.slides()[1..] {
        assert_eq!(slide.scale, 0.0);
    }
}

#[test]
fn exited_slide_parks_offstage() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.advance();
    run_transition(&mut carousel);
    let old = &carousel.slides()[0];
    assert_eq!(old.phase, SlidePhase::Hidden);
    assert_eq!(old.position.z, OFFSTAGE_Z);
}

#[test]
fn idle_motion_tracks_pointer_and_bobs() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.set_pointer(Vec2::new(1.0, -1.0));
    let rotation_before = carousel.slides()[0].rotation;
    carousel.update(FRAME);
    let slide = &carousel.slides()[0];
    assert!((slide.position.x - 0.3).abs() < 1e-6);
    assert!((slide.position.y + 0.3).abs() < 1e-6);
    assert!(slide.position.z.abs() <= 0.3);
    assert_ne!(slide.rotation, rotation_before);
}

#[test]
fn idle_motion_skips_slides_still_entering() {
    let mut carousel = Carousel::new(1);
    run_entrance(&mut carousel);
    carousel.set_pointer(Vec2::new(1.0, 1.0));
    carousel.advance();
    carousel.update(FRAME);
    // the incoming slide is mid-entrance; idle motion must not touch it
    assert_eq!(carousel.slides()[1].position, Vec3::ZERO);
}
