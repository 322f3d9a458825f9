use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, distance bounds and return-to-idle parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 100.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Closest the camera may get to the globe center.
    #[schemars(title = "Min Distance", range(min = 1.05, max = 3.0), extend("step" = 0.05))]
    pub min_distance: f32,
    /// Farthest the camera may get from the globe center.
    #[schemars(title = "Max Distance", range(min = 2.0, max = 20.0), extend("step" = 0.1))]
    pub max_distance: f32,
    /// Idle camera position the view returns to outside zoom-focus.
    #[schemars(skip)]
    pub default_position: [f32; 3],
    /// Per-tick linear blend toward the target camera position.
    #[schemars(title = "Camera Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub blend: f32,
    /// Distance from the idle position below which the camera stops
    /// returning.
    #[schemars(skip)]
    pub idle_return_threshold: f32,
}

impl CameraOptions {
    /// Distance bounds as an ordered, positive `(min, max)` pair.
    #[must_use]
    pub fn distance_bounds(&self) -> (f32, f32) {
        let lo = self.min_distance.min(self.max_distance).max(f32::EPSILON);
        let hi = self.min_distance.max(self.max_distance).max(lo);
        (lo, hi)
    }

    /// Idle camera position as a vector.
    #[must_use]
    pub fn default_position(&self) -> Vec3 {
        Vec3::from_array(self.default_position)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            min_distance: 1.5,
            max_distance: 5.0,
            default_position: [0.0, 0.0, 2.5],
            blend: 0.05,
            idle_return_threshold: 0.01,
        }
    }
}
