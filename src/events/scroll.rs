use super::EventListener;
use crate::dom;
use scrollcam_core::{RawInput, ScrollCamera};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(window: &web::Window, controller: &Rc<RefCell<ScrollCamera>>) -> Vec<EventListener> {
    let wnd = window.clone();
    let ctrl = controller.clone();
    EventListener::new(window.as_ref(), "scroll", move |_ev| {
        sample(&wnd, &ctrl);
    })
    .into_iter()
    .collect()
}

/// Read the scroll position once and feed it to the controller.
pub fn sample(window: &web::Window, controller: &Rc<RefCell<ScrollCamera>>) {
    let metrics = dom::scroll_metrics(window);
    controller
        .borrow_mut()
        .handle_input(&RawInput::Scroll(metrics));
}
