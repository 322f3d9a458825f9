//! Boundary to the rendering engine.
//!
//! The view controller never owns meshes or materials. It talks to the
//! renderer through [`SceneSink`] (pose output) and [`SurfacePicker`]
//! (ray-cast input), addressing bodies by opaque [`BodyHandle`]s that
//! stay `None` in [`SceneHandles`] until their assets have loaded.

/// Perspective camera looking at the origin.
pub mod camera;
/// In-memory scene used by tests and the native viewer.
pub mod headless;
/// Ray construction and ray/sphere intersection.
pub mod picking;

use glam::{Quat, Vec2, Vec3};

pub use camera::Camera;
pub use headless::{BodyTransform, HeadlessScene};

/// Opaque, copyable identifier of a body owned by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u32);

impl BodyHandle {
    /// Wrap a raw engine id.
    #[must_use]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// The raw engine id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// What a body is, for engines that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Textured Earth sphere.
    Globe,
    /// Transparent cloud shell.
    Clouds,
    /// Atmosphere glow shell.
    Atmosphere,
    /// Decorative orbiting model.
    Orbiter,
    /// Text label above the orbiter.
    Nametag,
    /// Background star points.
    Stars,
}

/// Handles of the bodies the controller drives. Any may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneHandles {
    /// Globe sphere.
    pub globe: Option<BodyHandle>,
    /// Cloud shell.
    pub clouds: Option<BodyHandle>,
    /// Atmosphere shell.
    pub atmosphere: Option<BodyHandle>,
    /// Orbiter model.
    pub orbiter: Option<BodyHandle>,
    /// Orbiter nametag.
    pub nametag: Option<BodyHandle>,
}

impl SceneHandles {
    /// Store `handle` in the slot for `kind`. Returns `false` for kinds the
    /// controller does not drive.
    pub fn assign(&mut self, kind: BodyKind, handle: BodyHandle) -> bool {
        let slot = match kind {
            BodyKind::Globe => &mut self.globe,
            BodyKind::Clouds => &mut self.clouds,
            BodyKind::Atmosphere => &mut self.atmosphere,
            BodyKind::Orbiter => &mut self.orbiter,
            BodyKind::Nametag => &mut self.nametag,
            BodyKind::Stars => return false,
        };
        *slot = Some(handle);
        true
    }
}

/// Receives the controller's per-frame output.
pub trait SceneSink {
    /// Move the camera; it keeps looking at the origin.
    fn set_camera_position(&mut self, position: Vec3);
    /// Set a body's world orientation.
    fn set_body_orientation(&mut self, body: BodyHandle, orientation: Quat);
    /// Set a body's world position.
    fn set_body_position(&mut self, body: BodyHandle, position: Vec3);
    /// Feed the day/night shader's time uniform (seconds).
    fn set_shader_time(&mut self, seconds: f32);
}

/// Ray-casts against the globe surface.
pub trait SurfacePicker {
    /// World-space hit on the globe under `ndc` (x right, y up, both in
    /// `[-1, 1]`), or `None` on a miss.
    fn pick_surface(&self, ndc: Vec2) -> Option<Vec3>;
}

impl<F> SurfacePicker for F
where
    F: Fn(Vec2) -> Option<Vec3>,
{
    fn pick_surface(&self, ndc: Vec2) -> Option<Vec3> {
        self(ndc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_fills_matching_slot() {
        let mut handles = SceneHandles::default();
        assert!(handles.assign(BodyKind::Orbiter, BodyHandle::from_raw(4)));
        assert_eq!(handles.orbiter, Some(BodyHandle::from_raw(4)));
        assert!(!handles.assign(BodyKind::Stars, BodyHandle::from_raw(5)));
        assert!(handles.globe.is_none());
    }

    #[test]
    fn closures_are_pickers() {
        let picker = |ndc: Vec2| (ndc == Vec2::ZERO).then_some(Vec3::Z);
        assert_eq!(picker.pick_surface(Vec2::ZERO), Some(Vec3::Z));
        assert_eq!(picker.pick_surface(Vec2::ONE), None);
    }
}
