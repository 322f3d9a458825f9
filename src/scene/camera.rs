use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the configured idle position, looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: options.default_position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.safe_up());
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// World-space ray (origin, unit direction) through an NDC point.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv_view_proj = self.build_matrix().inverse();

        // perspective_rh maps depth to [0, 1]
        let near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let origin = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        let dir = (far - origin).try_normalize().unwrap_or(Vec3::NEG_Z);
        (origin, dir)
    }

    /// `up`, swapped for another axis when the view direction is parallel
    /// to it (camera over a pole).
    fn safe_up(&self) -> Vec3 {
        let forward = (self.target - self.eye).normalize_or_zero();
        if forward.cross(self.up).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            self.up
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_origin() {
        let camera = Camera::default();
        let (origin, dir) = camera.ray_from_ndc(Vec2::ZERO);
        assert!((dir - Vec3::NEG_Z).length() < 1e-4);
        assert!(origin.z > 2.0 && origin.z < 2.5);
    }

    #[test]
    fn polar_camera_builds_finite_matrix() {
        let camera = Camera {
            eye: Vec3::Y * 3.0,
            ..Camera::default()
        };
        let m = camera.build_matrix();
        assert!(m.is_finite());
    }
}
