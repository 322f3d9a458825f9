use glam::{Quat, Vec2, Vec3};
use rustc_hash::FxHashMap;

use super::camera::Camera;
use super::picking::pick_sphere;
use super::{BodyHandle, BodyKind, SceneHandles, SceneSink, SurfacePicker};

/// Radius of the globe body; the controller works in globe radii.
pub const GLOBE_RADIUS: f32 = 1.0;

/// Placement of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// World position.
    pub position: Vec3,
    /// World orientation.
    pub orientation: Quat,
    /// What the body is.
    pub kind: BodyKind,
}

/// Renderer-free scene: a camera plus a flat map of body transforms.
///
/// Picks analytically against the unit globe, so it stands in for the GPU
/// engine in tests and in the native viewer.
#[derive(Debug, Clone)]
pub struct HeadlessScene {
    camera: Camera,
    bodies: FxHashMap<BodyHandle, BodyTransform>,
    next_id: u32,
    shader_time: f32,
}

impl HeadlessScene {
    /// Empty scene with the given camera.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            bodies: FxHashMap::default(),
            next_id: 0,
            shader_time: 0.0,
        }
    }

    /// Add a body at the origin with identity orientation.
    pub fn spawn(&mut self, kind: BodyKind) -> BodyHandle {
        let handle = BodyHandle::from_raw(self.next_id);
        self.next_id += 1;
        let _ = self.bodies.insert(
            handle,
            BodyTransform {
                position: Vec3::ZERO,
                orientation: Quat::IDENTITY,
                kind,
            },
        );
        handle
    }

    /// Spawn globe, clouds and atmosphere; orbiter and nametag stay unset.
    pub fn spawn_globe_set(&mut self) -> SceneHandles {
        SceneHandles {
            globe: Some(self.spawn(BodyKind::Globe)),
            clouds: Some(self.spawn(BodyKind::Clouds)),
            atmosphere: Some(self.spawn(BodyKind::Atmosphere)),
            ..SceneHandles::default()
        }
    }

    /// Remove a body. Returns whether it existed.
    pub fn despawn(&mut self, handle: BodyHandle) -> bool {
        self.bodies.remove(&handle).is_some()
    }

    /// Transform of a body, if it exists.
    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&BodyTransform> {
        self.bodies.get(&handle)
    }

    /// Number of live bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene has no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Last shader time pushed.
    #[must_use]
    pub fn shader_time(&self) -> f32 {
        self.shader_time
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl SceneSink for HeadlessScene {
    fn set_camera_position(&mut self, position: Vec3) {
        self.camera.eye = position;
    }

    fn set_body_orientation(&mut self, body: BodyHandle, orientation: Quat) {
        if let Some(transform) = self.bodies.get_mut(&body) {
            transform.orientation = orientation;
        } else {
            log::trace!("orientation for unknown body {}", body.raw());
        }
    }

    fn set_body_position(&mut self, body: BodyHandle, position: Vec3) {
        if let Some(transform) = self.bodies.get_mut(&body) {
            transform.position = position;
        } else {
            log::trace!("position for unknown body {}", body.raw());
        }
    }

    fn set_shader_time(&mut self, seconds: f32) {
        self.shader_time = seconds;
    }
}

impl SurfacePicker for HeadlessScene {
    fn pick_surface(&self, ndc: Vec2) -> Option<Vec3> {
        pick_sphere(&self.camera, ndc, GLOBE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ViewCommand, ViewController, ViewMode};

    #[test]
    fn spawn_and_despawn() {
        let mut scene = HeadlessScene::default();
        let handles = scene.spawn_globe_set();
        assert_eq!(scene.len(), 3);
        assert!(handles.orbiter.is_none());
        assert!(scene.despawn(handles.clouds.unwrap()));
        assert!(!scene.despawn(handles.clouds.unwrap()));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn writes_to_missing_bodies_are_ignored() {
        let mut scene = HeadlessScene::default();
        scene.set_body_position(BodyHandle::from_raw(9), Vec3::ONE);
        assert!(scene.is_empty());
    }

    #[test]
    fn resize_ignores_zero_size() {
        let mut scene = HeadlessScene::default();
        scene.resize(800, 400);
        assert_eq!(scene.camera().aspect, 2.0);
        scene.resize(0, 400);
        assert_eq!(scene.camera().aspect, 2.0);
    }

    #[test]
    fn click_center_then_right_click_scenario() {
        let mut scene = HeadlessScene::default();
        let handles = scene.spawn_globe_set();
        let mut view = ViewController::default();

        let hit = scene.pick_surface(Vec2::ZERO);
        view.execute(ViewCommand::PrimaryPress { hit }, 0.0);
        view.execute(ViewCommand::Release, 5.0);
        assert_eq!(view.mode(), ViewMode::ZoomFocus);

        let mut now = 0.0;
        for _ in 0..120 {
            now += 16.0;
            view.tick(now, 16.0).apply(&mut scene, &handles);
        }
        assert!(scene.camera().eye.length() < 1.6);

        view.execute(ViewCommand::ExitZoom, now);
        view.tick(now + 16.0, 16.0).apply(&mut scene, &handles);
        let globe = scene.body(handles.globe.unwrap()).unwrap();
        // one free tick from identity targets stays near identity
        assert!(globe.orientation.angle_between(Quat::IDENTITY) < 0.01);
    }
}
