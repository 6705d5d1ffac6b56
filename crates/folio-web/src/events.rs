//! Wires browser input events to the carousel: wheel, touch swipe, pointer
//! parallax, and surface resize.

use crate::dom;
use folio_core::input::{self, SwipeTracker};
use folio_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct InputWiring {
    pub carousel: Rc<RefCell<Carousel>>,
    pub canvas: web::HtmlCanvasElement,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    // Wheel down advances, once per event.
    {
        let carousel = w.carousel.clone();
        dom::listen::<web::WheelEvent>(target, "wheel", move |ev| {
            if input::wheel_advances(ev.delta_y()) {
                carousel.borrow_mut().advance();
            }
        });
    }

    // Pointer moves feed the parallax offset, normalized to the viewport.
    {
        let carousel = w.carousel.clone();
        dom::listen::<web::PointerEvent>(target, "pointermove", move |ev| {
            let (vw, vh) = dom::viewport_size();
            let offset = input::pointer_offset(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
            carousel.borrow_mut().set_pointer(offset);
        });
    }

    // Touch: a horizontal leftward swipe advances, at most once per gesture.
    {
        let tracker = Rc::new(RefCell::new(SwipeTracker::default()));
        {
            let tracker = tracker.clone();
            dom::listen::<web::TouchEvent>(target, "touchstart", move |ev| {
                if let Some(touch) = ev.touches().get(0) {
                    tracker
                        .borrow_mut()
                        .begin(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
        }
        {
            let carousel = w.carousel.clone();
            dom::listen::<web::TouchEvent>(target, "touchend", move |ev| {
                if let Some(touch) = ev.changed_touches().get(0) {
                    let fired = tracker
                        .borrow_mut()
                        .finish(touch.client_x() as f32, touch.client_y() as f32);
                    if fired {
                        carousel.borrow_mut().advance();
                    }
                }
            });
        }
    }

    // Resize: keep the canvas backing store in sync; the frame loop picks up
    // the new size and reconfigures the surface and camera aspect.
    {
        let canvas = w.canvas.clone();
        dom::listen0(target, "resize", move || {
            dom::sync_canvas_backing_size(&canvas);
        });
    }
}
