//! Geographic helpers for mapping latitude/longitude onto the unit globe.
//!
//! The globe convention is Y-up with longitude 0 facing +Z:
//! `x = cos(lat)·sin(lng)`, `y = sin(lat)`, `z = cos(lat)·cos(lng)`.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named point on the globe, in degrees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct GeoLocation {
    /// Display name.
    pub name: String,
    /// Latitude in degrees (north positive).
    #[schemars(range(min = -90.0, max = 90.0))]
    pub latitude: f32,
    /// Longitude in degrees (east positive).
    #[schemars(range(min = -180.0, max = 180.0))]
    pub longitude: f32,
}

impl GeoLocation {
    /// Unit vector for this location.
    #[must_use]
    pub fn to_unit_vector(&self) -> Vec3 {
        lat_lng_to_unit(self.latitude, self.longitude)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            name: "Đà Nẵng".into(),
            latitude: 16.0544,
            longitude: 108.2022,
        }
    }
}

/// Convert latitude/longitude in degrees to a unit vector on the globe.
#[must_use]
pub fn lat_lng_to_unit(latitude_deg: f32, longitude_deg: f32) -> Vec3 {
    let lat = latitude_deg.to_radians();
    let lng = longitude_deg.to_radians();
    Vec3::new(lat.cos() * lng.sin(), lat.sin(), lat.cos() * lng.cos())
}

/// Inverse of [`lat_lng_to_unit`]: degrees `(latitude, longitude)` of a
/// direction. The zero vector maps to `(0, 0)`.
#[must_use]
pub fn unit_to_lat_lng(direction: Vec3) -> (f32, f32) {
    let Some(dir) = direction.try_normalize() else {
        return (0.0, 0.0);
    };
    let lat = dir.y.clamp(-1.0, 1.0).asin();
    let lng = dir.x.atan2(dir.z);
    (lat.to_degrees(), lng.to_degrees())
}
