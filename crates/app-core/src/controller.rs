//! The owned state object tying catalog, progress, input and camera together.
//!
//! Lifecycle is `new -> (handle_input | resize | go_to_section | tick)* ->
//! drop`. The host owns listener registration; this type only sees the raw
//! samples those listeners produce.

use crate::camera::CameraPose;
use crate::catalog::{SectionCatalog, Waypoint};
use crate::config::{ConfigError, ControllerConfig};
use crate::input::{adapter_for, InputAdapter, RawInput, ScrollMetrics};
use crate::interpolator::CameraInterpolator;
use crate::progress::{DeviceClass, DeviceTransition, Navigation, ProgressState};

/// Everything the overlay needs for one frame, read in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct UiSnapshot {
    pub progress: f32,
    pub current_section: usize,
    pub is_ready: bool,
    pub device: DeviceClass,
    pub show_scroll_hint: bool,
}

pub struct ScrollCamera {
    catalog: SectionCatalog,
    config: ControllerConfig,
    state: ProgressState,
    adapter: Box<dyn InputAdapter>,
    interpolator: CameraInterpolator,
    last_section: usize,
}

impl ScrollCamera {
    pub fn new(
        catalog: SectionCatalog,
        config: ControllerConfig,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let device = DeviceClass::from_viewport_width(viewport_width, config.mobile_breakpoint_px);
        let state = ProgressState::new(catalog.len(), device);
        let adapter = adapter_for(device, config.touch_sensitivity);
        let interpolator = CameraInterpolator::new(&catalog, state.progress(), &config);
        log::debug!(
            "[controller] {} sections, device {:?}",
            catalog.len(),
            device
        );
        Ok(Self {
            catalog,
            config,
            state,
            adapter,
            interpolator,
            last_section: 0,
        })
    }

    #[inline]
    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    #[inline]
    pub fn current_section(&self) -> usize {
        self.state.current_section()
    }

    pub fn current_waypoint(&self) -> &Waypoint {
        &self.catalog[self.current_section()]
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.state.device()
    }

    /// Feed one raw event through the active adapter. Returns whether
    /// progress changed.
    pub fn handle_input(&mut self, raw: &RawInput) -> bool {
        match self.adapter.on_input_event(raw) {
            Some(delta) => self.state.apply(delta),
            None => false,
        }
    }

    /// Re-evaluate the device class for a new viewport width. On a change the
    /// old adapter is dropped and replaced; progress carries over as is.
    pub fn resize(&mut self, viewport_width: f64) -> Option<DeviceTransition> {
        let device =
            DeviceClass::from_viewport_width(viewport_width, self.config.mobile_breakpoint_px);
        let transition = self.state.set_device(device)?;
        self.adapter.reset();
        self.adapter = adapter_for(device, self.config.touch_sensitivity);
        Some(transition)
    }

    pub fn go_to_section(&mut self, index: i64, scroll: ScrollMetrics) -> Navigation {
        let nav = self.state.go_to_section(index, scroll);
        log::debug!("[controller] go_to_section({}) -> {:?}", index, nav);
        nav
    }

    pub fn mark_ready(&mut self) -> bool {
        self.state.mark_ready()
    }

    /// Park the camera on the target for the current progress.
    pub fn snap_camera(&mut self) {
        self.interpolator
            .snap_to(&self.catalog, self.state.progress());
    }

    /// Advance the camera one frame. Progress is read exactly once.
    pub fn tick(&mut self, dt_sec: f32) -> CameraPose {
        let progress = self.state.progress();
        self.interpolator.tick(&self.catalog, progress, dt_sec)
    }

    #[inline]
    pub fn camera_pose(&self) -> CameraPose {
        self.interpolator.pose()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        let progress = self.state.progress();
        UiSnapshot {
            progress,
            current_section: self.state.current_section(),
            is_ready: self.state.is_ready(),
            device: self.state.device(),
            show_scroll_hint: progress < self.config.scroll_hint_threshold,
        }
    }

    /// The new section index if it differs from the last call's.
    pub fn take_section_change(&mut self) -> Option<usize> {
        let section = self.state.current_section();
        if section == self.last_section {
            return None;
        }
        log::debug!("[controller] section {} -> {}", self.last_section, section);
        self.last_section = section;
        Some(section)
    }
}
