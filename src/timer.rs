use scrollcam_core::ScrollCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot timer that flips the controller to ready after first layout.
/// Cancelled on drop.
pub struct ReadyTimer {
    window: web::Window,
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl ReadyTimer {
    pub fn start(
        window: &web::Window,
        delay_ms: u32,
        controller: Rc<RefCell<ScrollCamera>>,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move || {
            if controller.borrow_mut().mark_ready() {
                log::info!("[ready] initial layout done");
            }
        }) as Box<dyn FnMut()>);
        let handle = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(h) => h,
            Err(e) => {
                log::error!("[ready] setTimeout failed: {:?}", e);
                return None;
            }
        };
        Some(Self {
            window: window.clone(),
            handle: Some(handle),
            _callback: callback,
        })
    }

    pub fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            self.window.clear_timeout_with_handle(h);
        }
    }
}

impl Drop for ReadyTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
