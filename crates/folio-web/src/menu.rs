//! Mobile navigation menu: hamburger toggle, close on outside click.
//! Open state lives in the DOM as the menu's "show" class.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn menu_el(document: &web::Document) -> Option<web::Element> {
    document.query_selector(".nav-menu").ok().flatten()
}

fn hamburger_el(document: &web::Document) -> Option<web::Element> {
    document.query_selector(".hamburger").ok().flatten()
}

pub fn is_open(document: &web::Document) -> bool {
    menu_el(document)
        .map(|m| m.class_list().contains("show"))
        .unwrap_or(false)
}

pub fn open(document: &web::Document) {
    if let (Some(menu), Some(hamburger)) = (menu_el(document), hamburger_el(document)) {
        let _ = menu.class_list().add_1("show");
        let _ = hamburger.class_list().add_1("active");
    }
}

pub fn close(document: &web::Document) {
    if let (Some(menu), Some(hamburger)) = (menu_el(document), hamburger_el(document)) {
        let _ = menu.class_list().remove_1("show");
        let _ = hamburger.class_list().remove_1("active");
    }
}

pub fn toggle(document: &web::Document) {
    if is_open(document) {
        close(document);
    } else {
        open(document);
    }
}

pub fn wire(document: &web::Document) {
    let Some(hamburger) = hamburger_el(document) else {
        log::info!("no .hamburger; mobile menu disabled");
        return;
    };
    {
        let doc = document.clone();
        dom::listen::<web::MouseEvent>(hamburger.as_ref(), "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            toggle(&doc);
        });
    }
    // Clicks outside both the menu and the hamburger close an open menu.
    // Link clicks inside the menu close it through the nav wiring.
    {
        let doc = document.clone();
        dom::listen::<web::MouseEvent>(document.as_ref(), "click", move |ev| {
            if !is_open(&doc) {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let inside = |el: Option<web::Element>| {
                el.map(|e| e.contains(target.as_ref())).unwrap_or(false)
            };
            if !inside(menu_el(&doc)) && !inside(hamburger_el(&doc)) {
                close(&doc);
            }
        });
    }
}
