//! Input adapters: turn raw scroll or touch samples into progress updates.
//!
//! Both adapters implement [`InputAdapter`] so the controller can swap them
//! when the device class changes without branching on the event shape.

use crate::progress::DeviceClass;

const OFFSET_SLACK_PX: f64 = 1e-3;

/// Document scroll readings taken from the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Scroll offset as a fraction of the scrollable range, clamped to [0, 1].
    /// Pages that do not scroll (or report garbage) pin to 0.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if !(max.is_finite() && max > 0.0) || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0) as f32
    }

    /// Whole-pixel scroll position for `progress`, rounded up so reading the
    /// position back never lands just below a section boundary.
    pub fn offset_for(&self, progress: f32) -> Option<f64> {
        let max = self.max_offset();
        if !(max.is_finite() && max > 0.0) {
            return None;
        }
        // f32 progress carries ~1e-7 relative error; don't let it round up a whole pixel
        let exact = progress.clamp(0.0, 1.0) as f64 * max;
        Some((exact - OFFSET_SLACK_PX).ceil().clamp(0.0, max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput {
    Scroll(ScrollMetrics),
    TouchStart { y: f64 },
    TouchMove { y: f64 },
    TouchEnd,
}

/// What an adapter wants done to progress. Scroll input maps to an absolute
/// position, drag input accumulates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressDelta {
    Absolute(f32),
    Relative(f32),
}

pub trait InputAdapter {
    fn device_class(&self) -> DeviceClass;

    /// Map one raw event to a progress update, or `None` if the event does
    /// not move progress (wrong source, reference capture, bad coordinates).
    fn on_input_event(&mut self, raw: &RawInput) -> Option<ProgressDelta>;

    /// Forget any per-gesture state. Called when the adapter is detached.
    fn reset(&mut self) {}
}

/// Desktop adapter: progress follows the document scroll position.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollAdapter;

impl InputAdapter for ScrollAdapter {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::Desktop
    }

    fn on_input_event(&mut self, raw: &RawInput) -> Option<ProgressDelta> {
        match raw {
            RawInput::Scroll(metrics) => Some(ProgressDelta::Absolute(metrics.progress())),
            _ => None,
        }
    }
}

/// Mobile adapter: vertical drag deltas accumulate into progress.
///
/// The reference Y moves with the finger after every sample, so a long drag
/// split over many move events sums to the same total as one big move.
#[derive(Clone, Debug)]
pub struct TouchAdapter {
    sensitivity: f32,
    last_y: Option<f64>,
}

impl TouchAdapter {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            last_y: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.last_y.is_some()
    }
}

impl InputAdapter for TouchAdapter {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::Mobile
    }

    fn on_input_event(&mut self, raw: &RawInput) -> Option<ProgressDelta> {
        match *raw {
            RawInput::TouchStart { y } => {
                self.last_y = y.is_finite().then_some(y);
                None
            }
            RawInput::TouchMove { y } => {
                if !y.is_finite() {
                    log::warn!("[input] ignoring non-finite touch coordinate");
                    return None;
                }
                // A move without a start (finger already down on attach) only
                // captures the reference.
                let prev = self.last_y.replace(y)?;
                // Finger moving up means "scroll down": progress increases.
                let delta_px = prev - y;
                Some(ProgressDelta::Relative(delta_px as f32 * self.sensitivity))
            }
            RawInput::TouchEnd => {
                self.last_y = None;
                None
            }
            RawInput::Scroll(_) => None,
        }
    }

    fn reset(&mut self) {
        self.last_y = None;
    }
}

pub fn adapter_for(device: DeviceClass, touch_sensitivity: f32) -> Box<dyn InputAdapter> {
    match device {
        DeviceClass::Desktop => Box::new(ScrollAdapter),
        DeviceClass::Mobile => Box::new(TouchAdapter::new(touch_sensitivity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(delta: Option<ProgressDelta>) -> f32 {
        match delta {
            Some(ProgressDelta::Relative(d)) => d,
            other => panic!("expected a relative delta, got {:?}", other),
        }
    }

    #[test]
    fn scroll_progress_is_offset_over_range() {
        let m = ScrollMetrics::new(500.0, 3000.0, 1000.0);
        assert_eq!(m.max_offset(), 2000.0);
        assert!((m.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn scroll_progress_clamps_overscroll() {
        assert_eq!(ScrollMetrics::new(20_000.0, 3000.0, 1000.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(-50.0, 3000.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn short_page_pins_to_zero() {
        let m = ScrollMetrics::new(120.0, 800.0, 1000.0);
        assert_eq!(m.progress(), 0.0);
        assert!(!m.progress().is_nan());
        assert_eq!(ScrollMetrics::new(0.0, 1000.0, 1000.0).progress(), 0.0);
        assert_eq!(m.offset_for(0.5), None);
    }

    #[test]
    fn offset_for_rounds_up_to_whole_pixels() {
        let m = ScrollMetrics::new(0.0, 4000.0, 1000.0);
        assert_eq!(m.offset_for(1.0 / 3.0), Some(1000.0));
        assert_eq!(m.offset_for(0.0001), Some(1.0));
        assert_eq!(m.offset_for(2.0), Some(3000.0));
    }

    #[test]
    fn scroll_adapter_ignores_touch() {
        let mut a = ScrollAdapter;
        assert_eq!(a.on_input_event(&RawInput::TouchMove { y: 10.0 }), None);
        let delta = a.on_input_event(&RawInput::Scroll(ScrollMetrics::new(1000.0, 3000.0, 1000.0)));
        assert_eq!(delta, Some(ProgressDelta::Absolute(0.5)));
    }

    #[test]
    fn touch_move_uses_previous_sample_as_reference() {
        let mut a = TouchAdapter::new(0.002);
        assert_eq!(a.on_input_event(&RawInput::TouchStart { y: 500.0 }), None);
        let d = relative(a.on_input_event(&RawInput::TouchMove { y: 400.0 }));
        assert!((d - 0.2).abs() < 1e-6);
        // second move is relative to 400, not 500
        let d = relative(a.on_input_event(&RawInput::TouchMove { y: 450.0 }));
        assert!((d + 0.1).abs() < 1e-6);
    }

    #[test]
    fn touch_move_without_start_only_captures() {
        let mut a = TouchAdapter::new(0.002);
        assert_eq!(a.on_input_event(&RawInput::TouchMove { y: 300.0 }), None);
        assert!(a.is_tracking());
        a.on_input_event(&RawInput::TouchEnd);
        assert!(!a.is_tracking());
        assert_eq!(a.on_input_event(&RawInput::TouchMove { y: 100.0 }), None);
    }

    #[test]
    fn touch_ignores_non_finite_coordinates() {
        let mut a = TouchAdapter::new(0.002);
        a.on_input_event(&RawInput::TouchStart { y: 100.0 });
        assert_eq!(a.on_input_event(&RawInput::TouchMove { y: f64::NAN }), None);
        let d = relative(a.on_input_event(&RawInput::TouchMove { y: 50.0 }));
        assert!((d - 0.1).abs() < 1e-6);
    }
}
