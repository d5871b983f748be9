//! Radial camera bounds, enforced every tick regardless of view state.

use glam::Vec3;

/// Clamp `eye`'s distance from the origin into `[min, max]`, preserving its
/// direction. A zero-length eye has no direction and is returned as-is.
#[must_use]
pub fn clamp_radial(eye: Vec3, min: f32, max: f32) -> Vec3 {
    let len = eye.length();
    if len < 1e-6 {
        return eye;
    }
    let clamped = len.clamp(min, max);
    if (clamped - len).abs() < f32::EPSILON {
        eye
    } else {
        eye * (clamped / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_close_is_pushed_out_along_its_direction() {
        let eye = clamp_radial(Vec3::new(0.1, 0.0, 0.0), 0.5, 4.5);
        assert!((eye.length() - 0.5).abs() < 1e-6);
        assert!(eye.x > 0.0);
        assert!(eye.y.abs() < 1e-9 && eye.z.abs() < 1e-9);
    }

    #[test]
    fn too_far_is_pulled_in() {
        let eye = clamp_radial(Vec3::splat(10.0), 0.5, 4.5);
        assert!((eye.length() - 4.5).abs() < 1e-4);
        let dir = eye.normalize();
        assert!((dir - Vec3::splat(10.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn in_range_is_untouched() {
        let eye = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(clamp_radial(eye, 0.5, 4.5), eye);
    }

    #[test]
    fn zero_eye_stays_put() {
        assert_eq!(clamp_radial(Vec3::ZERO, 0.5, 4.5), Vec3::ZERO);
    }
}
