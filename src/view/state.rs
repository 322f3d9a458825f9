//! The single explicit state record owned by the view controller.

use glam::{Quat, Vec3};

/// Which sub-state governs camera and body orientation this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Yaw/pitch rotation with auto-rotation and scroll boost.
    #[default]
    Free,
    /// Animating toward a focused surface point.
    ZoomFocus,
}

/// Camera position and the point it is blending toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Current camera position (looking at the origin).
    pub position: Vec3,
    /// Position the camera blends toward in zoom-focus mode.
    pub target_position: Vec3,
}

/// Free-mode yaw/pitch, target and smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Yaw the smoothing converges to (radians).
    pub target_yaw: f32,
    /// Pitch the smoothing converges to (radians).
    pub target_pitch: f32,
    /// Smoothed yaw applied to the bodies.
    pub yaw: f32,
    /// Smoothed pitch applied to the bodies.
    pub pitch: f32,
}

/// Zoom-focus sub-state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFocusState {
    /// Whether zoom-focus mode is active.
    pub active: bool,
    /// Focused point, a unit vector.
    pub target_point: Vec3,
    /// Rotation taking the reference axis onto `target_point`, plus any
    /// drag applied while focused.
    pub target_orientation: Quat,
    /// Time the transition started.
    pub started_ms: f64,
    /// Eased transition progress in `[0, 1]`.
    pub progress: f32,
    /// Camera position when the transition started.
    pub start_camera: Vec3,
    /// Body orientation when the transition started.
    pub start_orientation: Quat,
}

impl Default for ZoomFocusState {
    fn default() -> Self {
        Self {
            active: false,
            target_point: Vec3::Z,
            target_orientation: Quat::IDENTITY,
            started_ms: 0.0,
            progress: 0.0,
            start_camera: Vec3::ZERO,
            start_orientation: Quat::IDENTITY,
        }
    }
}

/// Idle spin and the decaying scroll boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRotateState {
    /// Whether the idle spin is currently applied.
    pub enabled: bool,
    /// Extra yaw added (then decayed) every free-mode tick.
    pub scroll_boost: f32,
    /// Time of the last user interaction; `None` until the first one.
    pub last_interaction_ms: Option<f64>,
}

impl AutoRotateState {
    /// Milliseconds since the last interaction (infinite if none yet).
    #[must_use]
    pub fn quiet_for(&self, now_ms: f64) -> f64 {
        self.last_interaction_ms
            .map_or(f64::INFINITY, |last| now_ms - last)
    }
}

impl Default for AutoRotateState {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_boost: 0.0,
            last_interaction_ms: None,
        }
    }
}

/// Orientations of the co-rotating bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyOrientations {
    /// The globe itself.
    pub globe: Quat,
    /// The cloud shell (yaws faster in free mode).
    pub clouds: Quat,
    /// The atmosphere shell.
    pub atmosphere: Quat,
}

impl BodyOrientations {
    /// All bodies at identity.
    pub const IDENTITY: Self = Self::uniform(Quat::IDENTITY);

    /// All bodies sharing one orientation.
    #[must_use]
    pub const fn uniform(orientation: Quat) -> Self {
        Self {
            globe: orientation,
            clouds: orientation,
            atmosphere: orientation,
        }
    }
}

impl Default for BodyOrientations {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Orbit angle and float phase of the decorative orbiter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbiterState {
    /// Angle along the ellipse (radians, wrapped to `[0, τ)`).
    pub angle: f32,
    /// Phase of the vertical float (radians, wrapped to `[0, τ)`).
    pub float_phase: f32,
}

/// Everything the controller mutates, in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Camera pose.
    pub camera: CameraPose,
    /// Free-mode rotation.
    pub rotation: RotationState,
    /// Zoom-focus sub-state.
    pub zoom: ZoomFocusState,
    /// Auto-rotation timing and scroll boost.
    pub auto_rotate: AutoRotateState,
    /// Current co-rotating body orientations.
    pub bodies: BodyOrientations,
    /// Decorative orbiter.
    pub orbiter: OrbiterState,
    /// Whether a primary drag is in progress.
    pub dragging: bool,
    /// Seconds accumulated for the day/night shader.
    pub shader_time: f32,
}

impl ViewState {
    /// Initial state with the camera parked at `camera_position`.
    #[must_use]
    pub fn new(camera_position: Vec3) -> Self {
        Self {
            camera: CameraPose {
                position: camera_position,
                target_position: camera_position,
            },
            rotation: RotationState::default(),
            zoom: ZoomFocusState::default(),
            auto_rotate: AutoRotateState::default(),
            bodies: BodyOrientations::IDENTITY,
            orbiter: OrbiterState::default(),
            dragging: false,
            shader_time: 0.0,
        }
    }

    /// The mode governing this tick.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        if self.zoom.active {
            ViewMode::ZoomFocus
        } else {
            ViewMode::Free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_free_and_auto_rotating() {
        let state = ViewState::new(Vec3::new(0.0, 0.0, 2.5));
        assert_eq!(state.mode(), ViewMode::Free);
        assert!(state.auto_rotate.enabled);
        assert_eq!(state.bodies, BodyOrientations::IDENTITY);
    }

    #[test]
    fn quiet_time_is_infinite_before_first_interaction() {
        let mut auto = AutoRotateState::default();
        assert!(auto.quiet_for(0.0).is_infinite());
        auto.last_interaction_ms = Some(1000.0);
        assert_eq!(auto.quiet_for(1500.0), 500.0);
    }
}
