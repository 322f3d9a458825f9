use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// How camera and orientation approach their targets in zoom-focus mode.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomBlend {
    /// Fixed per-tick blend toward the targets. The eased progress is
    /// still computed and reported, but does not drive the motion.
    #[default]
    ConstantRate,
    /// Blend from the pose at zoom start by the eased progress, so the
    /// transition lasts exactly `duration_ms`.
    Eased,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom-focus transition parameters.
pub struct ZoomOptions {
    /// Nominal transition length.
    #[schemars(title = "Duration (ms)", range(min = 100.0, max = 5000.0), extend("step" = 50.0))]
    pub duration_ms: f32,
    /// Curve applied to the transition progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Blend strategy.
    #[schemars(title = "Blend Mode")]
    pub blend: ZoomBlend,
    /// Per-tick slerp factor toward the target orientation.
    #[schemars(title = "Orientation Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub orientation_blend: f32,
    /// Body-space axis rotated onto the focused surface point.
    #[schemars(skip)]
    pub reference_axis: [f32; 3],
}

impl ZoomOptions {
    /// Reference axis as a unit vector (falls back to +Z).
    #[must_use]
    pub fn reference_axis(&self) -> Vec3 {
        Vec3::from_array(self.reference_axis)
            .try_normalize()
            .unwrap_or(Vec3::Z)
    }
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            easing: EasingFunction::CubicInOut,
            blend: ZoomBlend::ConstantRate,
            orientation_blend: 0.05,
            reference_axis: [0.0, 0.0, 1.0],
        }
    }
}
