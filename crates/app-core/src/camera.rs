//! Camera types handed to the rendering side.
//!
//! These avoid platform-specific APIs; the web frontend reads them each frame
//! and either forwards the pose to JS or uploads the uniform directly.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Where the camera is and which world-space point it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// World-to-view transform. Falls back to looking down -Z when the
    /// target coincides with the eye or sits straight above/below it.
    pub fn view_matrix(&self, up: Vec3) -> Mat4 {
        let dir = self.look_at - self.position;
        let degenerate =
            dir.length_squared() < 1e-12 || dir.normalize().cross(up).length_squared() < 1e-12;
        let target = if degenerate {
            self.position - Vec3::Z
        } else {
            self.look_at
        };
        Mat4::look_at_rh(self.position, target, up)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.look_at.x,
            self.look_at.y,
            self.look_at.z,
        ]
    }
}

/// Right-handed perspective camera driven by a [`CameraPose`].
#[derive(Clone, Debug)]
pub struct Camera {
    pub pose: CameraPose,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(pose: CameraPose, aspect: f32) -> Self {
        Self {
            pose,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_aspect_from_size(&mut self, width: f32, height: f32) {
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix(self.up)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            eye: self.pose.position.extend(1.0).to_array(),
        }
    }
}

/// GPU-ready camera block (std140 compatible).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn view_matrix_puts_target_on_negative_z() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO);
        let v = pose.view_matrix(Vec3::Y) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(v.x.abs() < 1e-5 && v.y.abs() < 1e-5);
        assert!((v.z + 12.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_pose_still_yields_finite_matrix() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(CameraPose::new(p, p).view_matrix(Vec3::Y).is_finite());
        let above = CameraPose::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0));
        assert!(above.view_matrix(Vec3::Y).is_finite());
    }

    #[test]
    fn uniform_is_plain_bytes() {
        let cam = Camera::new(CameraPose::new(Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO), 16.0 / 9.0);
        let u = cam.uniform();
        assert_eq!(bytemuck::bytes_of(&u).len(), 80);
        assert_eq!(u.eye, [0.0, 0.0, 12.0, 1.0]);
    }

    #[test]
    fn aspect_from_size_guards_zero_height() {
        let mut cam = Camera::new(CameraPose::new(Vec3::Z, Vec3::ZERO), 1.0);
        cam.set_aspect_from_size(800.0, 0.0);
        assert_eq!(cam.aspect, 800.0);
        assert!(cam.projection_matrix().is_finite());
    }
}
