#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scrollcam_core::{Camera, ControllerConfig, DeviceClass, ScrollCamera, SectionCatalog};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod overlay;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollcam-web starting");
    Ok(())
}

/// Everything that must be torn down when the scene unmounts.
struct Mount {
    input: Rc<RefCell<events::InputListeners>>,
    _resize: Option<events::EventListener>,
    _ready: Option<timer::ReadyTimer>,
    frame_loop: frame::FrameLoop,
}

impl Mount {
    fn teardown(self) {
        self.frame_loop.stop();
        self.input.borrow_mut().detach();
        // remaining listeners and the ready timer go with `self`
    }
}

fn mount(
    catalog: SectionCatalog,
    config: ControllerConfig,
) -> anyhow::Result<(Rc<RefCell<ScrollCamera>>, Mount)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ready_delay_ms = config.ready_delay_ms;
    let width = dom::viewport_width(&window);
    let controller = Rc::new(RefCell::new(ScrollCamera::new(catalog, config, width)?));
    let device = controller.borrow().device();
    log::info!("[mount] width {:.0} -> {:?}", width, device);

    let input = Rc::new(RefCell::new(events::InputListeners::new(
        window.clone(),
        controller.clone(),
    )));
    input.borrow_mut().attach(device);
    if device == DeviceClass::Desktop {
        // pick up a restored scroll position before the first frame
        events::scroll::sample(&window, &controller);
    }
    controller.borrow_mut().snap_camera();

    let resize = events::wire_resize(&window, controller.clone(), input.clone());
    let ready = timer::ReadyTimer::start(&window, ready_delay_ms, controller.clone());

    let on_select: Rc<dyn Fn(usize)> = {
        let window = window.clone();
        let controller = controller.clone();
        Rc::new(move |index: usize| events::navigate(&window, &controller, index as i64))
    };
    let overlay = overlay::OverlaySync::new(document, controller.borrow().catalog(), on_select);
    let frame_loop = frame::start_loop(frame::FrameContext {
        controller: controller.clone(),
        overlay,
        last_instant: Instant::now(),
    });

    Ok((
        controller,
        Mount {
            input,
            _resize: resize,
            _ready: ready,
            frame_loop,
        },
    ))
}

/// Handle given to the page: the rendering side polls the camera pose and
/// the overlay state, section buttons call `go_to_section`.
#[wasm_bindgen]
pub struct ScrollCameraHandle {
    controller: Rc<RefCell<ScrollCamera>>,
    mount: Option<Mount>,
}

#[wasm_bindgen]
impl ScrollCameraHandle {
    /// Mount on the current page with the default portfolio sections.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ScrollCameraHandle, JsValue> {
        match mount(SectionCatalog::portfolio(), ControllerConfig::default()) {
            Ok((controller, mount)) => Ok(Self {
                controller,
                mount: Some(mount),
            }),
            Err(e) => {
                log::error!("[mount] {:#}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    pub fn progress(&self) -> f32 {
        self.controller.borrow().progress()
    }

    pub fn current_section(&self) -> u32 {
        self.controller.borrow().current_section() as u32
    }

    pub fn is_ready(&self) -> bool {
        self.controller.borrow().is_ready()
    }

    pub fn is_mobile(&self) -> bool {
        self.controller.borrow().device().is_mobile()
    }

    pub fn section_count(&self) -> u32 {
        self.controller.borrow().catalog().len() as u32
    }

    pub fn section_id(&self, index: u32) -> Option<String> {
        let c = self.controller.borrow();
        c.catalog().get(index as usize).map(|w| w.id.clone())
    }

    pub fn section_label(&self, index: u32) -> Option<String> {
        let c = self.controller.borrow();
        c.catalog().get(index as usize).map(|w| w.label.clone())
    }

    pub fn go_to_section(&self, index: i32) {
        if self.mount.is_none() {
            return;
        }
        if let Some(window) = web::window() {
            events::navigate(&window, &self.controller, index as i64);
        }
    }

    /// `[px, py, pz, lx, ly, lz]` of the smoothed camera.
    pub fn camera_pose(&self) -> js_sys::Float32Array {
        let pose = self.controller.borrow().camera_pose();
        js_sys::Float32Array::from(&pose.to_array()[..])
    }

    /// Column-major view-projection matrix followed by the eye position
    /// (20 floats), ready for a uniform buffer.
    pub fn camera_uniform(&self, aspect: f32) -> js_sys::Float32Array {
        let pose = self.controller.borrow().camera_pose();
        let uniform = Camera::new(pose, aspect.max(1e-3)).uniform();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&uniform));
        js_sys::Float32Array::from(floats)
    }

    /// Remove every listener and stop the frame loop and ready timer.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.teardown();
            log::info!("[mount] disposed");
        }
    }
}

impl Drop for ScrollCameraHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
