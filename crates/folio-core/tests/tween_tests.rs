// Tests for the tween engine and its easing curves.

use folio_core::tween::{Channel, Easing, TweenTarget, Tweener};
use glam::Vec3;

#[derive(Default)]
struct Probe {
    scale: f32,
    rotation: Vec3,
}

impl TweenTarget for Probe {
    fn set_scale(&mut self, _index: usize, scale: f32) {
        self.scale = scale;
    }
    fn set_rotation(&mut self, _index: usize, rotation: Vec3) {
        self.rotation = rotation;
    }
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::BackIn,
        Easing::BackOut,
        Easing::QuadInOut,
        Easing::QuadOut,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6, "{easing:?} at 0");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
    }
}

#[test]
fn back_curves_leave_the_unit_range() {
    // anticipation: back-in dips below the start
    assert!(Easing::BackIn.sample(0.3) < 0.0);
    // overshoot: back-out passes the target before settling
    assert!(Easing::BackOut.sample(0.7) > 1.0);
}

#[test]
fn quad_in_out_is_symmetric() {
    assert!((Easing::QuadInOut.sample(0.5) - 0.5).abs() < 1e-6);
    assert!((Easing::QuadInOut.sample(0.25) - 0.125).abs() < 1e-6);
    assert!((Easing::QuadInOut.sample(0.75) - 0.875).abs() < 1e-6);
}

#[test]
fn scale_tween_reaches_exact_target() {
    let mut tweener = Tweener::default();
    let mut probe = Probe::default();
    tweener.scale_to(0, 0.0, 1.0, 1.0, Easing::Linear);
    assert!(tweener.is_animating(0, Channel::Scale));

    let completed = tweener.step(0.5, &mut probe);
    assert!(completed.is_empty());
    assert!((probe.scale - 0.5).abs() < 1e-6);

    let completed = tweener.step(0.5, &mut probe);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].slide, 0);
    assert_eq!(completed[0].channel, Channel::Scale);
    assert!((probe.scale - 1.0).abs() < 1e-6);
    assert!(!tweener.is_animating(0, Channel::Scale));
}

#[test]
fn completion_is_reported_once() {
    let mut tweener = Tweener::default();
    let mut probe = Probe::default();
    tweener.scale_to(0, 0.0, 1.0, 1.0, Easing::Linear);
    tweener.step(0.6, &mut probe);
    let completed = tweener.step(0.6, &mut probe);
    assert_eq!(completed.len(), 1);
    assert!(tweener.step(0.6, &mut probe).is_empty());
}

#[test]
fn retarget_replaces_inflight_tween_on_same_channel() {
    let mut tweener = Tweener::default();
    let mut probe = Probe::default();
    tweener.scale_to(0, 0.0, 1.0, 1.0, Easing::Linear);
    tweener.step(0.5, &mut probe);

    // replace: the original tween never completes
    tweener.scale_to(0, probe.scale, 0.0, 1.0, Easing::Linear);
    let completed = tweener.step(1.0, &mut probe);
    assert_eq!(completed.len(), 1);
    assert!(probe.scale.abs() < 1e-6);
}

#[test]
fn channels_on_one_slide_run_independently() {
    let mut tweener = Tweener::default();
    let mut probe = Probe::default();
    tweener.scale_to(0, 0.0, 1.0, 1.0, Easing::Linear);
    tweener.rotate_to(0, Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), 2.0, Easing::Linear);

    tweener.step(1.0, &mut probe);
    assert!((probe.scale - 1.0).abs() < 1e-6);
    assert!(tweener.is_animating(0, Channel::Rotation));
    assert!((probe.rotation - Vec3::new(0.5, 1.0, 1.5)).length() < 1e-5);

    tweener.step(1.0, &mut probe);
    assert!((probe.rotation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
}

#[test]
fn zero_duration_tween_completes_immediately() {
    let mut tweener = Tweener::default();
    let mut probe = Probe::default();
    tweener.scale_to(0, 0.0, 1.0, 0.0, Easing::BackOut);
    let completed = tweener.step(0.016, &mut probe);
    assert_eq!(completed.len(), 1);
    assert!((probe.scale - 1.0).abs() < 1e-6);
}
