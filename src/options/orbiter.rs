use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbiter", inline)]
#[serde(default)]
/// Decorative orbiting model and its nametag.
pub struct OrbiterOptions {
    /// Whether the orbiter is animated at all.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Ellipse semi-axis along X.
    #[schemars(title = "Semi-Major Axis", range(min = 1.1, max = 5.0), extend("step" = 0.05))]
    pub semi_major: f32,
    /// Ellipse semi-axis along Z.
    #[schemars(title = "Semi-Minor Axis", range(min = 1.1, max = 5.0), extend("step" = 0.05))]
    pub semi_minor: f32,
    /// Base height above the equatorial plane.
    #[schemars(skip)]
    pub height: f32,
    /// Orbit speed in radians per millisecond.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 0.002), extend("step" = 0.00005))]
    pub angular_speed: f32,
    /// Amplitude of the vertical float.
    #[schemars(skip)]
    pub float_amplitude: f32,
    /// Float phase speed in radians per millisecond.
    #[schemars(skip)]
    pub float_speed: f32,
    /// Maximum bank angle in radians, scaled by the orbital tangent.
    #[schemars(skip)]
    pub tilt: f32,
    /// Vertical offset of the nametag above the model.
    #[schemars(skip)]
    pub nametag_offset: f32,
    /// Nametag text.
    #[schemars(title = "Nametag")]
    pub nametag: String,
}

impl Default for OrbiterOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            semi_major: 2.0,
            semi_minor: 1.6,
            height: 0.2,
            angular_speed: 0.0002,
            float_amplitude: 0.03,
            float_speed: 0.002,
            tilt: 0.25,
            nametag_offset: 0.15,
            nametag: "Voyager".into(),
        }
    }
}
