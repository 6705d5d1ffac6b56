// Tests for the frame-rate counter.

use folio_core::fps::FpsCounter;

#[test]
fn emits_nothing_inside_the_first_second() {
    let mut fps = FpsCounter::new(0.0);
    for i in 0..59 {
        assert_eq!(fps.frame(i as f64 * 16.0), None);
    }
}

#[test]
fn emits_the_frame_count_once_per_second() {
    let mut fps = FpsCounter::new(0.0);
    for i in 1..60 {
        assert_eq!(fps.frame(i as f64 * 16.0), None);
    }
    assert_eq!(fps.frame(1000.0), Some(60));
}

#[test]
fn counter_resets_after_each_window() {
    let mut fps = FpsCounter::new(0.0);
    assert_eq!(fps.frame(1000.0), Some(1));
    assert_eq!(fps.frame(1500.0), None);
    assert_eq!(fps.frame(2000.0), Some(2));
}
