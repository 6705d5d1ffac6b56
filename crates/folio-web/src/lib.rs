#![cfg(target_arch = "wasm32")]
//! WASM entry point: wires the page glue, then boots the slider when its
//! canvas is present.

mod dom;
mod effects;
mod events;
mod form;
mod frame;
mod menu;
mod nav;
mod render;
mod reveal;

use folio_core::fps::FpsCounter;
use folio_core::Carousel;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire(&document);
    menu::wire(&document);
    reveal::wire(&document);
    effects::wire(&document);
    form::wire(&document);

    // The slider only exists on pages that carry its canvas.
    let Some(canvas_el) = document.get_element_by_id("slider-canvas") else {
        log::info!("no #slider-canvas; slider disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // Session-unique seed so each visit gets its own idle spin.
    let seed = js_sys::Date::now() as u64;
    let carousel = Rc::new(RefCell::new(Carousel::new(seed)));
    events::wire_input_handlers(events::InputWiring {
        carousel: carousel.clone(),
        canvas: canvas.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let ctx = frame::FrameContext {
        carousel,
        canvas,
        gpu,
        last_instant: Instant::now(),
        fps: FpsCounter::new(js_sys::Date::now()),
        instances: Vec::new(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    log::info!("slider running");
    Ok(())
}
