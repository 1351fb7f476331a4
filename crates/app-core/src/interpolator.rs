//! Progress-to-pose mapping plus the per-frame exponential follow.

use crate::camera::CameraPose;
use crate::catalog::SectionCatalog;
use crate::config::ControllerConfig;
use crate::constants::REFERENCE_FRAME_RATE;

/// `a² (3 − 2a)`: zero velocity at both ends of a segment.
#[inline]
pub fn smoothstep(alpha: f32) -> f32 {
    let a = alpha.clamp(0.0, 1.0);
    a * a * (3.0 - 2.0 * a)
}

/// The bracketing waypoint pair for a progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Lower waypoint; `index + 1` is always valid.
    pub index: usize,
    /// Local fraction between `index` and `index + 1`.
    pub alpha: f32,
    pub eased: f32,
}

pub fn segment_for(progress: f32, waypoint_count: usize) -> Segment {
    debug_assert!(waypoint_count >= 2);
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let t = p * (waypoint_count - 1) as f32;
    let index = (t.floor() as usize).min(waypoint_count - 2);
    let alpha = (t - index as f32).clamp(0.0, 1.0);
    Segment {
        index,
        alpha,
        eased: smoothstep(alpha),
    }
}

/// Where the camera should be for `progress`, before smoothing.
pub fn target_pose(catalog: &SectionCatalog, progress: f32) -> CameraPose {
    let seg = segment_for(progress, catalog.len());
    let a = &catalog[seg.index];
    let b = &catalog[seg.index + 1];
    CameraPose {
        position: a.position.lerp(b.position, seg.eased),
        look_at: a.look_at.lerp(b.look_at, seg.eased),
    }
}

/// Per-tick blend for a follow factor tuned at 60 Hz:
/// `1 − (1 − follow)^(dt · 60)`. Exactly `follow` at `dt = 1/60`.
#[inline]
pub fn follow_blend(follow_factor: f32, dt_sec: f32) -> f32 {
    if dt_sec <= 0.0 {
        return 0.0;
    }
    let frames = dt_sec * REFERENCE_FRAME_RATE;
    (1.0 - (1.0 - follow_factor).powf(frames)).clamp(0.0, 1.0)
}

/// Holds the smoothed pose between frames and eases it toward the target.
#[derive(Clone, Debug)]
pub struct CameraInterpolator {
    pose: CameraPose,
    follow_factor: f32,
    max_dt_sec: f32,
}

impl CameraInterpolator {
    /// Starts parked on the pose for `progress`.
    pub fn new(catalog: &SectionCatalog, progress: f32, config: &ControllerConfig) -> Self {
        Self {
            pose: target_pose(catalog, progress),
            follow_factor: config.follow_factor,
            max_dt_sec: config.max_frame_dt_sec,
        }
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn snap_to(&mut self, catalog: &SectionCatalog, progress: f32) {
        self.pose = target_pose(catalog, progress);
    }

    /// Advance one frame and return the smoothed pose.
    pub fn tick(&mut self, catalog: &SectionCatalog, progress: f32, dt_sec: f32) -> CameraPose {
        let target = target_pose(catalog, progress);
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, self.max_dt_sec)
        } else {
            0.0
        };
        let k = follow_blend(self.follow_factor, dt);
        self.pose.position = self.pose.position.lerp(target.position, k);
        self.pose.look_at = self.pose.look_at.lerp(target.look_at, k);
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Waypoint;
    use glam::Vec3;

    fn line_catalog() -> SectionCatalog {
        SectionCatalog::new(vec![
            Waypoint::new("a", "A", Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO),
            Waypoint::new("b", "B", Vec3::new(10.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 0.0)),
        ])
        .unwrap()
    }

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstep(0.4) - 0.352).abs() < 1e-6);
        assert_eq!(smoothstep(-2.0), 0.0);
    }

    #[test]
    fn final_progress_pins_last_waypoint() {
        let seg = segment_for(1.0, 5);
        assert_eq!(seg.index, 3);
        assert_eq!(seg.alpha, 1.0);
        let cat = SectionCatalog::portfolio();
        assert_eq!(target_pose(&cat, 1.0).position, cat[4].position);
        assert_eq!(target_pose(&cat, 0.0).position, cat[0].position);
    }

    #[test]
    fn follow_blend_matches_factor_at_reference_rate() {
        assert!((follow_blend(0.06, 1.0 / 60.0) - 0.06).abs() < 1e-5);
        assert_eq!(follow_blend(0.06, 0.0), 0.0);
        // two half-frames equal one full frame
        let half = follow_blend(0.06, 1.0 / 120.0);
        assert!(((1.0 - (1.0 - half) * (1.0 - half)) - 0.06).abs() < 1e-5);
    }

    #[test]
    fn tick_moves_part_way_toward_target() {
        let cat = line_catalog();
        let cfg = ControllerConfig::default();
        let mut interp = CameraInterpolator::new(&cat, 0.0, &cfg);
        let pose = interp.tick(&cat, 1.0, 1.0 / 60.0);
        assert!((pose.position.x - 0.6).abs() < 1e-4);
        assert!(pose.position.x < 10.0);
    }

    #[test]
    fn zero_dt_holds_pose() {
        let cat = line_catalog();
        let mut interp = CameraInterpolator::new(&cat, 0.0, &ControllerConfig::default());
        let before = interp.pose();
        assert_eq!(interp.tick(&cat, 1.0, 0.0), before);
        assert_eq!(interp.tick(&cat, 1.0, f32::NAN), before);
    }

    #[test]
    fn converges_without_overshoot() {
        let cat = line_catalog();
        let mut interp = CameraInterpolator::new(&cat, 0.0, &ControllerConfig::default());
        let mut prev = interp.pose().position.x;
        for _ in 0..600 {
            let x = interp.tick(&cat, 1.0, 1.0 / 60.0).position.x;
            assert!(x >= prev && x <= 10.0);
            prev = x;
        }
        assert!((prev - 10.0).abs() < 1e-3);
    }

    #[test]
    fn snap_to_lands_on_target() {
        let cat = line_catalog();
        let mut interp = CameraInterpolator::new(&cat, 0.0, &ControllerConfig::default());
        interp.snap_to(&cat, 0.5);
        assert_eq!(interp.pose(), target_pose(&cat, 0.5));
    }
}
