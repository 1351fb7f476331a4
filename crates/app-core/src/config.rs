use crate::constants::*;
use thiserror::Error;

/// Tunable parameters for input, camera follow and overlay behavior.
///
/// The defaults come from `constants.rs`; hosts may override any of them and
/// should call [`ControllerConfig::validate`] before building a controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Progress gained per pixel of upward drag on touch devices.
    pub touch_sensitivity: f32,
    /// Per-frame share (at 60 Hz) of the remaining distance the camera covers.
    pub follow_factor: f32,
    /// Viewport widths strictly below this select the touch adapter.
    pub mobile_breakpoint_px: f64,
    pub ready_delay_ms: u32,
    pub max_frame_dt_sec: f32,
    /// The scroll hint shows while progress is below this; in [0, 1].
    pub scroll_hint_threshold: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            touch_sensitivity: TOUCH_SENSITIVITY,
            follow_factor: FOLLOW_FACTOR,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            ready_delay_ms: READY_DELAY_MS,
            max_frame_dt_sec: MAX_FRAME_DT_SEC,
            scroll_hint_threshold: SCROLL_HINT_THRESHOLD,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("touch sensitivity must be positive and finite, got {0}")]
    InvalidSensitivity(f32),
    #[error("follow factor must be in (0, 1], got {0}")]
    InvalidFollowFactor(f32),
    #[error("mobile breakpoint must be positive and finite, got {0}")]
    InvalidBreakpoint(f64),
    #[error("max frame dt must be positive and finite, got {0}")]
    InvalidFrameDt(f32),
    #[error("scroll hint threshold must be in [0, 1], got {0}")]
    InvalidHintThreshold(f32),
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.touch_sensitivity.is_finite() && self.touch_sensitivity > 0.0) {
            return Err(ConfigError::InvalidSensitivity(self.touch_sensitivity));
        }
        if !(self.follow_factor > 0.0 && self.follow_factor <= 1.0) {
            return Err(ConfigError::InvalidFollowFactor(self.follow_factor));
        }
        if !(self.mobile_breakpoint_px.is_finite() && self.mobile_breakpoint_px > 0.0) {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_breakpoint_px));
        }
        if !(self.max_frame_dt_sec.is_finite() && self.max_frame_dt_sec > 0.0) {
            return Err(ConfigError::InvalidFrameDt(self.max_frame_dt_sec));
        }
        if !(0.0..=1.0).contains(&self.scroll_hint_threshold) {
            return Err(ConfigError::InvalidHintThreshold(self.scroll_hint_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_in_tuned_ranges() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert!((0.0015..=0.002).contains(&cfg.touch_sensitivity));
        assert!((0.05..=0.1).contains(&cfg.follow_factor));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cfg = ControllerConfig {
            follow_factor: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFollowFactor(0.0)));

        let cfg = ControllerConfig {
            touch_sensitivity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSensitivity(_))
        ));

        let cfg = ControllerConfig {
            mobile_breakpoint_px: -1.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBreakpoint(-1.0)));
    }

    #[test]
    fn rejects_hint_threshold_outside_unit_range() {
        for bad in [f32::NAN, f32::INFINITY, -0.1, 1.5] {
            let cfg = ControllerConfig {
                scroll_hint_threshold: bad,
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidHintThreshold(_))),
                "threshold {} accepted",
                bad
            );
        }
        for ok in [0.0, 1.0] {
            let cfg = ControllerConfig {
                scroll_hint_threshold: ok,
                ..Default::default()
            };
            assert_eq!(cfg.validate(), Ok(()));
        }
    }
}
