//! Contact form: forwards the submitted fields to a WhatsApp deep link with
//! button feedback, then resets. There is no backend; the messaging link is
//! the delivery channel.

use crate::dom;
use folio_core::contact;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let form = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::info!("no #contactForm; contact form disabled");
        return;
    };
    let form_submit = form.clone();
    dom::listen::<web::Event>(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        handle_submit(&form_submit);
    });
}

fn handle_submit(form: &web::HtmlFormElement) {
    let name = input_value(form, "input[type=\"text\"]");
    let email = input_value(form, "input[type=\"email\"]");
    let message = textarea_value(form, "textarea");
    let link = contact::whatsapp_link(&name, &email, &message);

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let original_text = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    if let Some(b) = &button {
        b.set_text_content(Some("Opening WhatsApp..."));
        b.set_disabled(true);
        let _ = b.style().set_property("transform", "scale(0.95)");
    }

    let form = form.clone();
    let open_cb = Closure::once(move || {
        if let Some(win) = web::window() {
            let _ = win.open_with_url_and_target(&link, "_blank");
        }
        if let Some(b) = &button {
            b.set_text_content(Some("Message Sent! ✓"));
        }
        let reset_cb = Closure::once(move || {
            form.reset();
            if let Some(b) = &button {
                b.set_text_content(Some(&original_text));
                b.set_disabled(false);
                let _ = b.style().remove_property("transform");
            }
        });
        schedule(reset_cb, 1500);
    });
    schedule(open_cb, 500);
}

fn input_value(form: &web::HtmlFormElement, selector: &str) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

fn textarea_value(form: &web::HtmlFormElement, selector: &str) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

fn schedule<T: ?Sized>(cb: Closure<T>, timeout_ms: i32) {
    if let Some(win) = web::window() {
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                timeout_ms,
            );
    }
    cb.forget();
}
