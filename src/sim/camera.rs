//! First-person view orientation
//!
//! Angles accumulate without wraparound or clamping. Pitching past vertical
//! flips the up vector, which is allowed.

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Orientation plus field of view; held by anything that needs a view basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Yaw (radians), 0 looks down +Z
    pub horizontal_angle: f32,
    /// Pitch (radians), positive looks up
    pub vertical_angle: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Camera {
    pub fn new(horizontal_angle: f32, vertical_angle: f32, fov: f32) -> Self {
        Self {
            horizontal_angle,
            vertical_angle,
            fov,
        }
    }

    /// Add scaled cursor deltas to both angles
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32, sensitivity: f32) {
        self.horizontal_angle += sensitivity * delta_x;
        self.vertical_angle += sensitivity * delta_y;
    }

    /// Unit view direction
    pub fn direction(&self) -> Vec3 {
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        Vec3::new(cos_v * sin_h, sin_v, cos_v * cos_h)
    }

    /// Unit right vector, always horizontal
    pub fn right(&self) -> Vec3 {
        let (sin, cos) = (self.horizontal_angle - FRAC_PI_2).sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.direction())
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Look-at view matrix from `eye` along the current direction
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::look_at_rh(eye, eye + self.direction(), self.up())
    }

    /// Perspective projection for this camera's field of view
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, near, far)
    }
}
