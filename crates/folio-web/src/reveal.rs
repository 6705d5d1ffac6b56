//! Reveal-on-scroll: toggle an `in-view` class as elements cross the reveal
//! line. CSS owns the actual transition, so scrolling back reverses it.

use crate::dom;
use folio_core::nav::should_reveal;
use web_sys as web;

const REVEAL_SELECTORS: &[&str] = &[
    ".about-text",
    ".stat-card",
    ".work-card",
    ".skill-category",
    ".contact-form",
];

const IN_VIEW_CLASS: &str = "in-view";

pub fn wire(document: &web::Document) {
    apply(document);
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::listen0(window.as_ref(), "scroll", move || apply(&doc));
}

fn apply(document: &web::Document) {
    let (_, viewport_h) = dom::viewport_size();
    for selector in REVEAL_SELECTORS {
        dom::for_each_selected(document, selector, |el| {
            let top = el.get_bounding_client_rect().top() as f32;
            let list = el.class_list();
            if should_reveal(top, viewport_h) {
                let _ = list.add_1(IN_VIEW_CLASS);
            } else {
                let _ = list.remove_1(IN_VIEW_CLASS);
            }
        });
    }
}
