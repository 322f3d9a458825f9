//! Decorative body on an elliptical orbit around the globe.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use super::state::OrbiterState;
use crate::options::OrbiterOptions;

/// World-space placement of the orbiter and its nametag for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbiterPose {
    /// Model position.
    pub position: Vec3,
    /// Model orientation: +Z faces the globe, banked along the orbit.
    pub orientation: Quat,
    /// Nametag anchor, floating above the model.
    pub nametag_position: Vec3,
}

impl OrbiterState {
    /// Advance the orbit and float phase by `dt_ms`.
    pub fn advance(&mut self, options: &OrbiterOptions, dt_ms: f32) {
        self.angle = (self.angle + options.angular_speed * dt_ms).rem_euclid(TAU);
        self.float_phase =
            (self.float_phase + options.float_speed * dt_ms).rem_euclid(TAU);
    }

    /// Pose at the current angle.
    #[must_use]
    pub fn pose(&self, options: &OrbiterOptions) -> OrbiterPose {
        let (sin, cos) = self.angle.sin_cos();
        let a = options.semi_major;
        let b = options.semi_minor;

        let position = Vec3::new(
            a * cos,
            options.height + options.float_amplitude * self.float_phase.sin(),
            b * sin,
        );

        let facing = (-position).try_normalize().unwrap_or(Vec3::NEG_Z);
        let look = Quat::from_rotation_arc(Vec3::Z, facing);

        // d/dθ of the ellipse, in the orbital plane
        let tangent = Vec3::new(-a * sin, 0.0, b * cos)
            .try_normalize()
            .unwrap_or(Vec3::X);
        let bank = Quat::from_axis_angle(facing, options.tilt * tangent.x);

        OrbiterPose {
            position,
            orientation: (bank * look).normalize(),
            nametag_position: position + Vec3::Y * options.nametag_offset,
        }
    }
}
