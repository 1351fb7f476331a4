//! Browser listener wiring for the scroll camera.
//!
//! Every listener is held as an [`EventListener`] and removed when dropped,
//! so swapping adapters or disposing the mount can never leave a stale
//! handler mutating the controller.

pub mod scroll;
pub mod touch;

use crate::dom;
use scrollcam_core::{DeviceClass, Navigation, ScrollCamera};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Register a passive listener. Logs and returns `None` if the browser
    /// refuses it.
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::error!("[input] add {} listener failed: {:?}", kind, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// The listeners of whichever input adapter is active.
pub struct InputListeners {
    window: web::Window,
    controller: Rc<RefCell<ScrollCamera>>,
    active: Vec<EventListener>,
}

impl InputListeners {
    pub fn new(window: web::Window, controller: Rc<RefCell<ScrollCamera>>) -> Self {
        Self {
            window,
            controller,
            active: Vec::new(),
        }
    }

    /// Replace the current listeners with the set for `device`. The old set
    /// is removed first, so attaching twice never double-counts events.
    pub fn attach(&mut self, device: DeviceClass) {
        self.detach();
        self.active = match device {
            DeviceClass::Desktop => scroll::wire(&self.window, &self.controller),
            DeviceClass::Mobile => touch::wire(&self.window, &self.controller),
        };
        log::info!(
            "[input] attached {:?} listeners: {:?}",
            device,
            self.active.iter().map(EventListener::kind).collect::<Vec<_>>()
        );
    }

    pub fn detach(&mut self) {
        self.active.clear();
    }
}

/// Resize listener: re-evaluates the device class and swaps adapters. A
/// desktop resize that keeps the class re-reads the scroll range, which the
/// browser does not report with a scroll event.
pub fn wire_resize(
    window: &web::Window,
    controller: Rc<RefCell<ScrollCamera>>,
    input: Rc<RefCell<InputListeners>>,
) -> Option<EventListener> {
    let wnd = window.clone();
    EventListener::new(window.as_ref(), "resize", move |_ev| {
        let width = dom::viewport_width(&wnd);
        // release the borrow before re-attaching or sampling
        let (transition, device) = {
            let mut c = controller.borrow_mut();
            (c.resize(width), c.device())
        };
        match transition {
            Some(t) => {
                log::info!("[input] {:?} -> {:?} at width {:.0}", t.from, t.to, width);
                input.borrow_mut().attach(t.to);
            }
            None if device == DeviceClass::Desktop => scroll::sample(&wnd, &controller),
            None => {}
        }
    })
}

/// Run a section jump and, on desktop, start the smooth scroll.
pub fn navigate(window: &web::Window, controller: &Rc<RefCell<ScrollCamera>>, index: i64) {
    let metrics = dom::scroll_metrics(window);
    // release the borrow before touching the scroll position
    let nav = controller.borrow_mut().go_to_section(index, metrics);
    if let Navigation::SmoothScroll { section, top } = nav {
        log::info!("[nav] section {} -> scroll to {:.0}", section, top);
        dom::smooth_scroll_to(window, top);
    }
}
