use glam::{Vec2, Vec3};

use super::camera::Camera;

/// Nearest positive ray parameter where the ray meets the sphere.
///
/// Returns the far intersection when the origin is inside the sphere.
#[must_use]
pub fn ray_sphere_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (2.0 * a);
    if near > 0.0 {
        return Some(near);
    }
    let far = (-b + root) / (2.0 * a);
    (far > 0.0).then_some(far)
}

/// Point on the sphere of `radius` at the origin under `ndc`, if any.
#[must_use]
pub fn pick_sphere(camera: &Camera, ndc: Vec2, radius: f32) -> Option<Vec3> {
    let (origin, dir) = camera.ray_from_ndc(ndc);
    ray_sphere_intersect(origin, dir, Vec3::ZERO, radius)
        .map(|t| origin + dir * t)
}

/// Pixel coordinates (origin top-left) to NDC (y up).
#[must_use]
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let width = width.max(1.0);
    let height = height.max(1.0);
    Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_front_of_unit_sphere() {
        let t = ray_sphere_intersect(Vec3::Z * 3.0, Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!((t.unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn misses_sphere() {
        assert!(ray_sphere_intersect(
            Vec3::new(2.0, 0.0, 3.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            1.0
        )
        .is_none());
    }

    #[test]
    fn pick_center_of_screen() {
        let hit = pick_sphere(&Camera::default(), Vec2::ZERO, 1.0).unwrap();
        assert!((hit - Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn pick_corner_misses() {
        assert!(pick_sphere(&Camera::default(), Vec2::ONE, 1.0).is_none());
    }

    #[test]
    fn ndc_conversion() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
        assert!(pixel_to_ndc(5.0, 5.0, 0.0, 0.0).is_finite());
    }
}
