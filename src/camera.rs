//! Camera that loosely follows the hand anchor.
//!
//! Rendering is external; this only keeps the eye position and matrices the
//! renderer needs so camera motion stays in step with the formation loop.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera easing toward the hand every frame.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Slow spin applied to the whole scene, in radians.
    pub scene_yaw: f32,
}

impl FollowCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            scene_yaw: 0.0,
        }
    }

    /// Ease the eye one frame toward the spot implied by `hand_anchor`.
    pub fn follow(&mut self, hand_anchor: Vec3) {
        self.eye.x += (hand_anchor.x * CAMERA_FOLLOW_XY - self.eye.x) * CAMERA_EASE_XY;
        self.eye.y += (hand_anchor.y * CAMERA_FOLLOW_XY - self.eye.y) * CAMERA_EASE_XY;
        self.eye.z +=
            (CAMERA_BASE_Z + hand_anchor.z * CAMERA_FOLLOW_Z - self.eye.z) * CAMERA_EASE_Z;
        self.scene_yaw += SCENE_YAW_PER_FRAME;
    }

    pub fn set_viewport(&mut self, width_px: u32, height_px: u32) {
        self.aspect = width_px as f32 / height_px.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view transform, including the scene yaw.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up) * Mat4::from_rotation_y(self.scene_yaw)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
