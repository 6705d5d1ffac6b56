//! Navigation links: click-to-scroll and scroll-driven active highlighting.

use crate::dom;
use crate::menu;
use folio_core::nav::{active_section, SectionExtent};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_link_clicks(document);
    wire_scroll_highlight(document);
}

fn wire_link_clicks(document: &web::Document) {
    let doc_outer = document.clone();
    dom::for_each_selected(document, ".nav-link", move |el| {
        let doc = doc_outer.clone();
        let link = el.clone();
        dom::listen::<web::MouseEvent>(el.as_ref(), "click", move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Ok(Some(section)) = doc.query_selector(&href) else {
                return;
            };
            set_active(&doc, &link);
            menu::close(&doc);
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    });
}

fn wire_scroll_highlight(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();
    dom::listen0(window.as_ref(), "scroll", move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0) as f32;
        let mut extents = Vec::new();
        let mut ids = Vec::new();
        dom::for_each_selected(&doc, "section", |el| {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                extents.push(SectionExtent {
                    top: html.offset_top() as f32,
                    height: html.client_height() as f32,
                });
                ids.push(el.id());
            }
        });
        if let Some(i) = active_section(scroll_y, &extents) {
            let selector = format!("a[href=\"#{}\"]", ids[i]);
            if let Ok(Some(link)) = doc.query_selector(&selector) {
                set_active(&doc, &link);
            }
        }
    });
}

fn set_active(document: &web::Document, link: &web::Element) {
    dom::for_each_selected(document, ".nav-link", |el| {
        let _ = el.class_list().remove_1("active");
    });
    let _ = link.class_list().add_1("active");
}
