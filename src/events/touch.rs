use super::EventListener;
use scrollcam_core::{RawInput, ScrollCamera};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Vertical position of the first active touch.
#[inline]
fn first_touch_y(ev: &web::Event) -> Option<f64> {
    let touch_ev = ev.dyn_ref::<web::TouchEvent>()?;
    let touch = touch_ev.touches().get(0)?;
    Some(touch.client_y() as f64)
}

pub fn wire(window: &web::Window, controller: &Rc<RefCell<ScrollCamera>>) -> Vec<EventListener> {
    let target: &web::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(4);

    let ctrl = controller.clone();
    listeners.extend(EventListener::new(target, "touchstart", move |ev| {
        if let Some(y) = first_touch_y(&ev) {
            ctrl.borrow_mut().handle_input(&RawInput::TouchStart { y });
        }
    }));

    let ctrl = controller.clone();
    listeners.extend(EventListener::new(target, "touchmove", move |ev| {
        if let Some(y) = first_touch_y(&ev) {
            ctrl.borrow_mut().handle_input(&RawInput::TouchMove { y });
        }
    }));

    for kind in ["touchend", "touchcancel"] {
        let ctrl = controller.clone();
        listeners.extend(EventListener::new(target, kind, move |ev| {
            // a lifted finger with others still down re-anchors on the remaining one
            let raw = match first_touch_y(&ev) {
                Some(y) => RawInput::TouchStart { y },
                None => RawInput::TouchEnd,
            };
            ctrl.borrow_mut().handle_input(&raw);
        }));
    }

    listeners
}
