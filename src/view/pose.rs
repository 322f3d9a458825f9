//! Per-tick output handed to the rendering engine.

use glam::Vec3;

use super::orbiter::OrbiterPose;
use super::state::{BodyOrientations, ViewMode};
use crate::scene::{SceneHandles, SceneSink};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePose {
    /// Mode that produced this pose.
    pub mode: ViewMode,
    /// Camera position; the camera always looks at the origin.
    pub camera_position: Vec3,
    /// Orientations of globe, clouds and atmosphere.
    pub bodies: BodyOrientations,
    /// Orbiter placement, `None` when the orbiter is disabled.
    pub orbiter: Option<OrbiterPose>,
    /// Eased zoom transition progress, `None` in free mode.
    pub zoom_progress: Option<f32>,
    /// Seconds fed to the day/night shader's `time` uniform.
    pub shader_time: f32,
}

impl FramePose {
    /// Push this pose into the rendering engine.
    ///
    /// Unset handles (bodies whose assets have not loaded yet) are skipped.
    pub fn apply<S: SceneSink + ?Sized>(
        &self,
        sink: &mut S,
        handles: &SceneHandles,
    ) {
        sink.set_camera_position(self.camera_position);

        let orientations = [
            (handles.globe, self.bodies.globe),
            (handles.clouds, self.bodies.clouds),
            (handles.atmosphere, self.bodies.atmosphere),
        ];
        for (handle, orientation) in orientations {
            if let Some(handle) = handle {
                sink.set_body_orientation(handle, orientation);
            }
        }

        if let Some(orbiter) = &self.orbiter {
            if let Some(handle) = handles.orbiter {
                sink.set_body_position(handle, orbiter.position);
                sink.set_body_orientation(handle, orbiter.orientation);
            }
            if let Some(handle) = handles.nametag {
                sink.set_body_position(handle, orbiter.nametag_position);
            }
        }

        sink.set_shader_time(self.shader_time);
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::scene::{BodyHandle, BodyKind, HeadlessScene};

    fn pose() -> FramePose {
        FramePose {
            mode: ViewMode::Free,
            camera_position: Vec3::new(0.0, 0.0, 3.0),
            bodies: BodyOrientations::uniform(Quat::from_rotation_y(0.5)),
            orbiter: Some(OrbiterPose {
                position: Vec3::X * 2.0,
                orientation: Quat::IDENTITY,
                nametag_position: Vec3::new(2.0, 0.2, 0.0),
            }),
            zoom_progress: None,
            shader_time: 1.5,
        }
    }

    #[test]
    fn apply_updates_all_present_bodies() {
        let mut scene = HeadlessScene::default();
        let mut handles = scene.spawn_globe_set();
        handles.orbiter = Some(scene.spawn(BodyKind::Orbiter));

        pose().apply(&mut scene, &handles);

        assert_eq!(scene.camera().eye, Vec3::new(0.0, 0.0, 3.0));
        let globe = scene.body(handles.globe.unwrap()).unwrap();
        assert_eq!(globe.orientation, Quat::from_rotation_y(0.5));
        let orbiter = scene.body(handles.orbiter.unwrap()).unwrap();
        assert_eq!(orbiter.position, Vec3::X * 2.0);
        assert_eq!(scene.shader_time(), 1.5);
    }

    #[test]
    fn apply_tolerates_unset_handles() {
        let mut scene = HeadlessScene::default();
        let handles = SceneHandles::default();
        pose().apply(&mut scene, &handles);
        assert_eq!(scene.shader_time(), 1.5);
        assert!(scene.body(BodyHandle::from_raw(0)).is_none());
    }
}
