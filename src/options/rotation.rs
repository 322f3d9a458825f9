use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Free-rotation, input sensitivity and auto-rotation parameters.
pub struct RotationOptions {
    /// Exponential smoothing factor applied to yaw/pitch each tick.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Maximum absolute pitch in degrees.
    #[schemars(skip)]
    pub pitch_limit_deg: f32,
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub drag_sensitivity: f32,
    /// Radians of rotation per wheel delta unit.
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0001, max = 0.005), extend("step" = 0.0001))]
    pub wheel_sensitivity: f32,
    /// Idle spin in radians per millisecond.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 0.001), extend("step" = 0.00001))]
    pub auto_rotate_speed: f32,
    /// Quiet time after the last interaction before auto-rotation resumes.
    #[schemars(title = "Auto-Rotate Delay (ms)", range(min = 0.0, max = 20000.0), extend("step" = 250.0))]
    pub auto_rotate_delay_ms: f32,
    /// Radians of boost per pixel of page scroll.
    #[schemars(skip)]
    pub scroll_boost_scale: f32,
    /// Multiplicative boost decay applied every free-mode tick.
    #[schemars(skip)]
    pub scroll_boost_decay: f32,
    /// Boost magnitude below which it snaps to zero.
    #[schemars(skip)]
    pub scroll_boost_epsilon: f32,
    /// Cloud shell yaw relative to the globe (parallax).
    #[schemars(title = "Cloud Parallax", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub cloud_yaw_factor: f32,
}

impl RotationOptions {
    /// Pitch limit in radians, never negative.
    #[must_use]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit_deg.abs().to_radians()
    }

    /// Boost decay clamped into `[0, 1)` so the boost always shrinks.
    #[must_use]
    pub fn boost_decay(&self) -> f32 {
        self.scroll_boost_decay.clamp(0.0, 0.999)
    }
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            pitch_limit_deg: 45.0,
            drag_sensitivity: 0.003,
            wheel_sensitivity: 0.0005,
            auto_rotate_speed: 0.0001,
            auto_rotate_delay_ms: 3000.0,
            scroll_boost_scale: 0.0002,
            scroll_boost_decay: 0.95,
            scroll_boost_epsilon: 1e-4,
            cloud_yaw_factor: 1.05,
        }
    }
}
