//! Camera and orbit-capability state.
//!
//! The camera is plain data plus a view-projection helper; the render host
//! owns the actual orbit input handling and reads the capability flags to
//! decide which gestures to honor.

use glam::{Mat4, Vec3};

pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, fovy: f32, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

/// Which orbit gestures the host may apply, plus the radial range the eye is
/// kept inside. Panning stays off in every mode of the exhibit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub rotate: bool,
    pub zoom: bool,
    pub pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    #[must_use]
    pub fn new(min_distance: f32, max_distance: f32) -> Self {
        Self {
            rotate: true,
            zoom: true,
            pan: false,
            min_distance,
            max_distance,
        }
    }
}
