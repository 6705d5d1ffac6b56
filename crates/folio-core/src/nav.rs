//! Scroll math for navigation highlighting and reveal-on-scroll.

use crate::constants::{REVEAL_VIEWPORT_FRACTION, SCROLL_PROBE_OFFSET};

/// Document-space extent of one page section.
#[derive(Clone, Copy, Debug)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

/// Index of the section under the probe line (`scroll_y` plus a fixed offset
/// below the viewport top). When extents overlap the last match wins, matching
/// document order.
pub fn active_section(scroll_y: f32, sections: &[SectionExtent]) -> Option<usize> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET;
    let mut hit = None;
    for (i, section) in sections.iter().enumerate() {
        if probe >= section.top && probe < section.top + section.height {
            hit = Some(i);
        }
    }
    hit
}

/// An element reveals once its top edge rises above 80% of the viewport
/// height; it un-reveals when scrolled back below.
#[inline]
pub fn should_reveal(element_top: f32, viewport_height: f32) -> bool {
    element_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}
