//! Hover micro-interactions: work-card lift and pointer tilt, scale bumps on
//! skill tags and buttons. Applied as inline CSS transforms; the stylesheet's
//! transition rules smooth them.

use crate::dom;
use folio_core::input::hover_tilt;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_work_cards(document);
    wire_scale_hover(document, ".skill-tag", "scale(1.1)");
    wire_scale_hover(document, ".btn", "scale(1.05)");
}

fn wire_work_cards(document: &web::Document) {
    dom::for_each_selected(document, ".work-card", |el| {
        let Ok(card) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        {
            let card_c = card.clone();
            dom::listen::<web::MouseEvent>(card.as_ref(), "mouseenter", move |_| {
                set_transform(&card_c, "translateY(-10px)");
            });
        }
        {
            let card_c = card.clone();
            dom::listen::<web::MouseEvent>(card.as_ref(), "mousemove", move |ev| {
                let rect = card_c.get_bounding_client_rect();
                let w = rect.width().max(1.0);
                let h = rect.height().max(1.0);
                let rel_x = ((ev.client_x() as f64 - rect.left()) / w - 0.5) as f32;
                let rel_y = ((ev.client_y() as f64 - rect.top()) / h - 0.5) as f32;
                let (rx, ry) = hover_tilt(rel_x, rel_y);
                set_transform(
                    &card_c,
                    &format!(
                        "translateY(-10px) perspective(600px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)"
                    ),
                );
            });
        }
        {
            let card_c = card.clone();
            dom::listen::<web::MouseEvent>(card.as_ref(), "mouseleave", move |_| {
                set_transform(&card_c, "");
            });
        }
    });
}

fn wire_scale_hover(document: &web::Document, selector: &str, transform: &str) {
    let transform = transform.to_string();
    dom::for_each_selected(document, selector, move |el| {
        let Ok(elem) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        {
            let t = transform.clone();
            let e = elem.clone();
            dom::listen::<web::MouseEvent>(elem.as_ref(), "mouseenter", move |_| {
                set_transform(&e, &t);
            });
        }
        {
            let e = elem.clone();
            dom::listen::<web::MouseEvent>(elem.as_ref(), "mouseleave", move |_| {
                set_transform(&e, "scale(1)");
            });
        }
    });
}

fn set_transform(el: &web::HtmlElement, value: &str) {
    if value.is_empty() {
        let _ = el.style().remove_property("transform");
    } else {
        let _ = el.style().set_property("transform", value);
    }
}
