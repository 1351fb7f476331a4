//! Single source of truth for scroll progress and the derived section index.

use crate::input::{ProgressDelta, ScrollMetrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    #[inline]
    pub fn from_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceTransition {
    pub from: DeviceClass,
    pub to: DeviceClass,
}

/// Result of a section jump request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Navigation {
    /// Progress was set directly (touch devices).
    Jumped { section: usize },
    /// The host must smooth-scroll the document to `top`; progress follows
    /// through the regular scroll events.
    SmoothScroll { section: usize, top: f64 },
    /// Nothing to scroll (page shorter than the viewport).
    Unchanged,
}

/// `clamp(floor(progress * (N - 1)), 0, N - 1)`.
pub fn section_for_progress(progress: f32, section_count: usize) -> usize {
    if section_count < 2 || !progress.is_finite() {
        return 0;
    }
    let last = section_count - 1;
    let t = progress.clamp(0.0, 1.0) * last as f32;
    (t.floor() as usize).min(last)
}

/// Progress value at which section `index` starts, nudged up to the nearest
/// f32 that [`section_for_progress`] reads back as `index`.
pub fn progress_for_section(index: usize, section_count: usize) -> f32 {
    if section_count < 2 {
        return 0.0;
    }
    let index = index.min(section_count - 1);
    let mut p = (index as f32 / (section_count - 1) as f32).clamp(0.0, 1.0);
    // `i / (N - 1)` can round to just below the boundary
    while p < 1.0 && section_for_progress(p, section_count) < index {
        p = f32::from_bits(p.to_bits() + 1);
    }
    p
}

/// Mutable, single-writer progress state. Input adapters write to it through
/// [`ProgressState::apply`]; the interpolator and the overlay only read.
#[derive(Clone, Debug)]
pub struct ProgressState {
    progress: f32,
    device: DeviceClass,
    ready: bool,
    section_count: usize,
}

impl ProgressState {
    pub fn new(section_count: usize, device: DeviceClass) -> Self {
        Self {
            progress: 0.0,
            device,
            ready: false,
            section_count,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Derived on every read; never stored next to `progress`.
    #[inline]
    pub fn current_section(&self) -> usize {
        section_for_progress(self.progress, self.section_count)
    }

    /// Set progress, clamped to [0, 1]. Non-finite values are dropped.
    /// Returns whether the stored value changed.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        if !progress.is_finite() {
            log::warn!("[progress] ignoring non-finite progress {}", progress);
            return false;
        }
        let next = progress.clamp(0.0, 1.0);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    pub fn apply(&mut self, delta: ProgressDelta) -> bool {
        match delta {
            ProgressDelta::Absolute(p) => self.set_progress(p),
            ProgressDelta::Relative(d) => self.set_progress(self.progress + d),
        }
    }

    /// One-shot: returns `true` only on the call that flips the flag.
    pub fn mark_ready(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        log::debug!("[progress] ready");
        true
    }

    /// Switch device class. Progress is left untouched.
    pub fn set_device(&mut self, device: DeviceClass) -> Option<DeviceTransition> {
        if device == self.device {
            return None;
        }
        let transition = DeviceTransition {
            from: self.device,
            to: device,
        };
        self.device = device;
        log::debug!(
            "[progress] device {:?} -> {:?} at progress {:.3}",
            transition.from,
            transition.to,
            self.progress
        );
        Some(transition)
    }

    /// Jump to section `index`, clamped to the catalog. Touch devices jump
    /// immediately; desktop returns a smooth-scroll target and leaves
    /// progress to the scroll adapter so the two never race.
    pub fn go_to_section(&mut self, index: i64, scroll: ScrollMetrics) -> Navigation {
        let last = self.section_count.saturating_sub(1);
        let section = index.clamp(0, last as i64) as usize;
        if section as i64 != index {
            log::warn!("[progress] section {} out of range, clamped to {}", index, section);
        }
        let target = progress_for_section(section, self.section_count);
        match self.device {
            DeviceClass::Mobile => {
                self.set_progress(target);
                Navigation::Jumped { section }
            }
            DeviceClass::Desktop => match scroll.offset_for(target) {
                Some(top) => Navigation::SmoothScroll {
                    section,
                    top: self.settle_offset(scroll, top, section),
                },
                None => Navigation::Unchanged,
            },
        }
    }

    /// Step `top` up whole pixels until the scroll event it produces reads
    /// back as `section`. Bounded by the max offset, which reads as progress 1.
    fn settle_offset(&self, scroll: ScrollMetrics, mut top: f64, section: usize) -> f64 {
        let max = scroll.max_offset();
        let landed = |top: f64| {
            let at = ScrollMetrics { offset: top, ..scroll };
            section_for_progress(at.progress(), self.section_count)
        };
        while top < max && landed(top) < section {
            top = (top + 1.0).min(max);
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_threshold_is_exclusive() {
        assert_eq!(DeviceClass::from_viewport_width(767.9, 768.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(768.0, 768.0), DeviceClass::Desktop);
        assert!(DeviceClass::Mobile.is_mobile());
    }

    #[test]
    fn section_index_follows_floor_of_scaled_progress() {
        assert_eq!(section_for_progress(0.0, 5), 0);
        assert_eq!(section_for_progress(0.24, 5), 0);
        assert_eq!(section_for_progress(0.25, 5), 1);
        assert_eq!(section_for_progress(0.6, 5), 2);
        assert_eq!(section_for_progress(0.99, 5), 3);
        assert_eq!(section_for_progress(1.0, 5), 4);
    }

    #[test]
    fn section_index_has_no_early_boundary() {
        // just short of the 0.25 boundary is still the first section
        assert_eq!(section_for_progress(0.24998, 5), 0);
        assert_eq!(section_for_progress(0.7499, 5), 2);
        let below = f32::from_bits(0.25f32.to_bits() - 1);
        assert_eq!(section_for_progress(below, 5), 0);
    }

    #[test]
    fn section_start_reads_back_as_its_own_index() {
        for n in 2..=16 {
            for i in 0..n {
                let p = progress_for_section(i, n);
                assert_eq!(section_for_progress(p, n), i, "n={} i={}", n, i);
                assert!((p - i as f32 / (n - 1) as f32).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn section_index_never_leaves_bounds() {
        for n in 2..12 {
            for i in 0..=1000 {
                let p = i as f32 / 1000.0;
                assert!(section_for_progress(p, n) < n);
            }
            assert_eq!(section_for_progress(7.0, n), n - 1);
            assert_eq!(section_for_progress(-3.0, n), 0);
            assert_eq!(section_for_progress(f32::NAN, n), 0);
        }
    }

    #[test]
    fn set_progress_clamps_and_drops_non_finite() {
        let mut s = ProgressState::new(5, DeviceClass::Desktop);
        s.set_progress(4.0);
        assert_eq!(s.progress(), 1.0);
        s.set_progress(-1.0);
        assert_eq!(s.progress(), 0.0);
        s.set_progress(0.3);
        assert!(!s.set_progress(f32::NAN));
        assert!(!s.set_progress(f32::INFINITY));
        assert_eq!(s.progress(), 0.3);
    }

    #[test]
    fn relative_deltas_hard_clamp() {
        let mut s = ProgressState::new(5, DeviceClass::Mobile);
        s.apply(ProgressDelta::Relative(1e6));
        assert_eq!(s.progress(), 1.0);
        s.apply(ProgressDelta::Relative(-1e6));
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn mark_ready_fires_once() {
        let mut s = ProgressState::new(3, DeviceClass::Desktop);
        assert!(!s.is_ready());
        assert!(s.mark_ready());
        assert!(!s.mark_ready());
        assert!(s.is_ready());
    }

    #[test]
    fn device_switch_preserves_progress() {
        let mut s = ProgressState::new(5, DeviceClass::Desktop);
        s.set_progress(0.437);
        let t = s.set_device(DeviceClass::Mobile).unwrap();
        assert_eq!(t.from, DeviceClass::Desktop);
        assert_eq!(s.progress(), 0.437);
        assert_eq!(s.set_device(DeviceClass::Mobile), None);
    }

    #[test]
    fn mobile_go_to_section_jumps() {
        let mut s = ProgressState::new(5, DeviceClass::Mobile);
        let nav = s.go_to_section(3, ScrollMetrics::default());
        assert_eq!(nav, Navigation::Jumped { section: 3 });
        assert_eq!(s.progress(), 0.75);
        assert_eq!(s.current_section(), 3);
    }

    #[test]
    fn desktop_go_to_section_scrolls_without_touching_progress() {
        let mut s = ProgressState::new(5, DeviceClass::Desktop);
        let metrics = ScrollMetrics::new(0.0, 5000.0, 1000.0);
        let nav = s.go_to_section(2, metrics);
        assert_eq!(nav, Navigation::SmoothScroll { section: 2, top: 2000.0 });
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn desktop_go_to_section_on_short_page_is_noop() {
        let mut s = ProgressState::new(5, DeviceClass::Desktop);
        let nav = s.go_to_section(2, ScrollMetrics::new(0.0, 500.0, 1000.0));
        assert_eq!(nav, Navigation::Unchanged);
    }

    #[test]
    fn go_to_section_clamps_index() {
        let mut s = ProgressState::new(5, DeviceClass::Mobile);
        assert_eq!(s.go_to_section(-5, ScrollMetrics::default()), Navigation::Jumped { section: 0 });
        assert_eq!(s.current_section(), 0);
        assert_eq!(s.go_to_section(10, ScrollMetrics::default()), Navigation::Jumped { section: 4 });
        assert_eq!(s.current_section(), 4);
        assert_eq!(s.progress(), 1.0);
    }
}
