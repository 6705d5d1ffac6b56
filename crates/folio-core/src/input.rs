//! Pure input classification: pointer normalization, wheel and swipe triggers,
//! and the hover tilt mapping for work cards.

use glam::Vec2;

use crate::constants::{CARD_TILT_GAIN_DEG, SWIPE_THRESHOLD_PX};

/// Normalize client coordinates against the full viewport into [-1, 1] on both
/// axes, with the vertical axis inverted so "up" is positive.
#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    Vec2::new(
        (client_x / w) * 2.0 - 1.0,
        -((client_y / h) * 2.0 - 1.0),
    )
}

/// A wheel event advances the carousel only on positive vertical delta.
#[inline]
pub fn wheel_advances(delta_y: f64) -> bool {
    delta_y > 0.0
}

/// Tracks one touch gesture from start to end and classifies it.
///
/// A gesture advances the carousel when it drags leftward by more than the
/// threshold while staying below the threshold vertically; anything else
/// (rightward drags, vertical scrolls, diagonals) is ignored. Each gesture
/// fires at most once: `finish` consumes the recorded start point.
#[derive(Default, Clone, Copy, Debug)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some(Vec2::new(x, y));
    }

    pub fn finish(&mut self, x: f32, y: f32) -> bool {
        let Some(start) = self.start.take() else {
            return false;
        };
        let dx = start.x - x;
        let dy = (start.y - y).abs();
        dx > SWIPE_THRESHOLD_PX && dy < SWIPE_THRESHOLD_PX
    }
}

/// Map an in-card pointer offset (each axis in [-0.5, 0.5], measured from the
/// card center) to `(rotate_x_deg, rotate_y_deg)` for the hover tilt.
#[inline]
pub fn hover_tilt(rel_x: f32, rel_y: f32) -> (f32, f32) {
    (rel_y * CARD_TILT_GAIN_DEG, rel_x * CARD_TILT_GAIN_DEG)
}
