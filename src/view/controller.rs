//! The view state controller: input operations and the per-frame update.
//!
//! All state lives in one [`ViewState`]; input operations only mutate it
//! and never block, and [`ViewController::tick`] turns it into a
//! [`FramePose`] once per rendered frame.

use glam::{Quat, Vec2, Vec3};

use super::command::ViewCommand;
use super::pose::FramePose;
use super::state::{BodyOrientations, RotationState, ViewMode, ViewState};
use crate::options::{Options, ZoomBlend};
use crate::util::geo::lat_lng_to_unit;

/// Lengths below this are treated as a degenerate (zero) camera vector.
const DEGENERATE_LENGTH: f32 = 1e-6;

/// Owns the view state and applies commands and ticks to it.
#[derive(Debug, Clone)]
pub struct ViewController {
    options: Options,
    state: ViewState,
}

impl ViewController {
    /// Create a controller with the camera parked at its idle position.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let (min, max) = options.camera.distance_bounds();
        let home = options.camera.default_position();
        let start = clamp_distance(home, min, max, home);
        Self {
            options,
            state: ViewState::new(start),
        }
    }

    /// Read-only view of the controller state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Takes effect on the next operation or tick.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.state.mode()
    }

    /// Execute a command at time `now_ms`.
    pub fn execute(&mut self, command: ViewCommand, now_ms: f64) {
        match command {
            ViewCommand::PrimaryPress { hit } => self.press_primary(hit, now_ms),
            ViewCommand::Drag { delta } => self.drag(delta, now_ms),
            ViewCommand::Release => self.release(),
            ViewCommand::Wheel { delta } => self.wheel(delta, now_ms),
            ViewCommand::Scroll { delta } => self.scroll(delta, now_ms),
            ViewCommand::ExitZoom => self.exit_zoom(),
            ViewCommand::ZoomToLocation {
                latitude,
                longitude,
            } => self.zoom_to_location(latitude, longitude, now_ms),
            ViewCommand::ZoomHome => {
                let home = self.options.home.clone();
                log::debug!("zooming to home location {}", home.name);
                self.zoom_to_location(home.latitude, home.longitude, now_ms);
            }
            ViewCommand::ResetView => self.reset_view(),
        }
    }

    // ── Input operations ────────────────────────────────────────────

    /// Primary press: start a drag, and enter zoom-focus on a globe hit
    /// when not already focused.
    pub fn press_primary(&mut self, hit: Option<Vec3>, now_ms: f64) {
        self.state.dragging = true;
        self.mark_interaction(now_ms);

        if self.state.zoom.active {
            return;
        }
        if let Some(point) = hit {
            if !self.enter_zoom(point, now_ms) {
                log::debug!("ignored press on a degenerate surface point");
            }
        }
    }

    /// Pointer motion while the primary button is held.
    pub fn drag(&mut self, delta: Vec2, now_ms: f64) {
        if !self.state.dragging || delta == Vec2::ZERO {
            return;
        }

        let sensitivity = self.options.rotation.drag_sensitivity;
        if self.state.zoom.active {
            // Rotate the target, not the current pose, so the slerp stays
            // smooth while dragging.
            let yaw = Quat::from_axis_angle(Vec3::Y, delta.x * sensitivity);
            let pitch =
                Quat::from_axis_angle(Vec3::X, -delta.y * sensitivity);
            let zoom = &mut self.state.zoom;
            zoom.target_orientation =
                (pitch * (yaw * zoom.target_orientation)).normalize();
        } else {
            let limit = self.options.rotation.pitch_limit();
            let rotation = &mut self.state.rotation;
            rotation.target_yaw += delta.x * sensitivity;
            rotation.target_pitch = (rotation.target_pitch
                - delta.y * sensitivity)
                .clamp(-limit, limit);
        }

        self.mark_interaction(now_ms);
    }

    /// Primary release ends the drag.
    pub fn release(&mut self) {
        self.state.dragging = false;
    }

    /// Secondary click: leave zoom-focus, send the camera home and reset
    /// the bodies to identity. No-op in free mode.
    pub fn exit_zoom(&mut self) {
        if !self.state.zoom.active {
            return;
        }
        self.state.zoom.active = false;
        self.state.camera.target_position =
            self.options.camera.default_position();
        self.state.bodies = BodyOrientations::IDENTITY;
        log::debug!("left zoom-focus");
    }

    /// Wheel: vertical delta turns yaw, horizontal delta turns pitch.
    pub fn wheel(&mut self, delta: Vec2, now_ms: f64) {
        if delta == Vec2::ZERO {
            return;
        }
        let sensitivity = self.options.rotation.wheel_sensitivity;
        let limit = self.options.rotation.pitch_limit();
        let rotation = &mut self.state.rotation;
        rotation.target_yaw += delta.y * sensitivity;
        rotation.target_pitch = (rotation.target_pitch
            + delta.x * sensitivity)
            .clamp(-limit, limit);
        self.mark_interaction(now_ms);
    }

    /// Page scroll: feed the decaying yaw boost.
    pub fn scroll(&mut self, delta: f32, now_ms: f64) {
        if delta == 0.0 {
            return;
        }
        self.state.auto_rotate.scroll_boost +=
            delta * self.options.rotation.scroll_boost_scale;
        self.mark_interaction(now_ms);
    }

    /// Focus on a latitude/longitude (degrees) without a prior click.
    pub fn zoom_to_location(
        &mut self,
        latitude: f32,
        longitude: f32,
        now_ms: f64,
    ) {
        let point = lat_lng_to_unit(latitude, longitude);
        if self.enter_zoom(point, now_ms) {
            self.mark_interaction(now_ms);
        }
    }

    /// Leave zoom-focus and zero every rotation target and boost.
    pub fn reset_view(&mut self) {
        self.exit_zoom();
        self.state.rotation.target_yaw = 0.0;
        self.state.rotation.target_pitch = 0.0;
        self.state.auto_rotate.scroll_boost = 0.0;
        self.state.camera.target_position =
            self.options.camera.default_position();
    }

    // ── Per-frame update ────────────────────────────────────────────

    /// Advance one frame. `dt_ms` is the wall-clock delta since the
    /// previous tick; negative or non-finite deltas count as zero.
    pub fn tick(&mut self, now_ms: f64, dt_ms: f32) -> FramePose {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        self.maybe_resume_auto_rotate(now_ms);

        if self.state.zoom.active {
            self.tick_zoom(now_ms);
        } else {
            self.tick_free(dt_ms);
        }

        if self.options.orbiter.enabled {
            self.state.orbiter.advance(&self.options.orbiter, dt_ms);
        }

        self.state.shader_time += dt_ms * 0.001;

        self.frame_pose()
    }

    /// Pose for the current state without advancing it.
    #[must_use]
    pub fn frame_pose(&self) -> FramePose {
        let zoom_active = self.state.zoom.active;
        FramePose {
            mode: self.state.mode(),
            camera_position: self.state.camera.position,
            bodies: self.state.bodies,
            orbiter: self
                .options
                .orbiter
                .enabled
                .then(|| self.state.orbiter.pose(&self.options.orbiter)),
            zoom_progress: zoom_active.then_some(self.state.zoom.progress),
            shader_time: self.state.shader_time,
        }
    }

    fn maybe_resume_auto_rotate(&mut self, now_ms: f64) {
        let auto = &self.state.auto_rotate;
        if auto.enabled || self.state.dragging || self.state.zoom.active {
            return;
        }
        let delay = f64::from(self.options.rotation.auto_rotate_delay_ms);
        if auto.quiet_for(now_ms) > delay {
            self.state.auto_rotate.enabled = true;
            log::debug!("auto-rotation resumed");
        }
    }

    fn tick_zoom(&mut self, now_ms: f64) {
        let (min, max) = self.options.camera.distance_bounds();
        let zoom_opts = &self.options.zoom;
        let zoom = &mut self.state.zoom;

        let raw = if zoom_opts.duration_ms > 0.0 {
            ((now_ms - zoom.started_ms) / f64::from(zoom_opts.duration_ms))
                as f32
        } else {
            1.0
        };
        zoom.progress = zoom_opts.easing.evaluate(raw);

        // Once an eased transition has landed, drags keep blending at the
        // constant rate instead of snapping to the moved target.
        let eased = zoom_opts.blend == ZoomBlend::Eased && raw <= 1.0;

        let camera = &mut self.state.camera;
        let (position, globe) = if eased {
            (
                zoom.start_camera.lerp(camera.target_position, zoom.progress),
                zoom.start_orientation
                    .slerp(zoom.target_orientation, zoom.progress),
            )
        } else {
            (
                camera
                    .position
                    .lerp(camera.target_position, self.options.camera.blend),
                self.state
                    .bodies
                    .globe
                    .slerp(zoom.target_orientation, zoom_opts.orientation_blend),
            )
        };

        camera.position = clamp_distance(position, min, max, zoom.target_point);
        self.state.bodies = BodyOrientations::uniform(globe.normalize());
    }

    fn tick_free(&mut self, dt_ms: f32) {
        let opts = &self.options.rotation;
        let auto = &mut self.state.auto_rotate;
        let rotation = &mut self.state.rotation;

        if auto.enabled {
            rotation.target_yaw += opts.auto_rotate_speed * dt_ms;
        }

        // Applied even while auto-rotation is off (e.g. right after a drag).
        if auto.scroll_boost != 0.0 {
            rotation.target_yaw += auto.scroll_boost;
            auto.scroll_boost *= opts.boost_decay();
            if auto.scroll_boost.abs() < opts.scroll_boost_epsilon {
                auto.scroll_boost = 0.0;
            }
        }

        let limit = opts.pitch_limit();
        let k = opts.smoothing.clamp(0.0, 1.0);
        rotation.yaw += (rotation.target_yaw - rotation.yaw) * k;
        rotation.pitch += (rotation.target_pitch - rotation.pitch) * k;
        rotation.pitch = rotation.pitch.clamp(-limit, limit);

        self.state.bodies = free_orientations(rotation, opts.cloud_yaw_factor);

        let camera_opts = &self.options.camera;
        let (min, max) = camera_opts.distance_bounds();
        let home = camera_opts.default_position();
        let camera = &mut self.state.camera;
        if camera.position.distance(home) > camera_opts.idle_return_threshold {
            camera.position = camera.position.lerp(home, camera_opts.blend);
        }
        camera.position = clamp_distance(camera.position, min, max, home);
    }

    // ── Helpers ─────────────────────────────────────────────────────

    /// Enter zoom-focus toward `point`. Returns `false` for a zero point.
    fn enter_zoom(&mut self, point: Vec3, now_ms: f64) -> bool {
        let Some(direction) = point.try_normalize() else {
            return false;
        };
        let (min, _) = self.options.camera.distance_bounds();
        let reference = self.options.zoom.reference_axis();

        let zoom = &mut self.state.zoom;
        zoom.active = true;
        zoom.target_point = direction;
        zoom.target_orientation = Quat::from_rotation_arc(reference, direction);
        zoom.started_ms = now_ms;
        zoom.progress = 0.0;
        zoom.start_camera = self.state.camera.position;
        zoom.start_orientation = self.state.bodies.globe;

        self.state.camera.target_position = direction * min;
        self.state.auto_rotate.enabled = false;

        log::debug!(
            "entered zoom-focus toward ({:.3}, {:.3}, {:.3})",
            direction.x,
            direction.y,
            direction.z
        );
        true
    }

    fn mark_interaction(&mut self, now_ms: f64) {
        self.state.auto_rotate.enabled = false;
        self.state.auto_rotate.last_interaction_ms = Some(now_ms);
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Independent pitch-then-yaw rotations, clouds yawing faster.
fn free_orientations(
    rotation: &RotationState,
    cloud_yaw_factor: f32,
) -> BodyOrientations {
    let pitch = Quat::from_rotation_x(rotation.pitch);
    let globe = pitch * Quat::from_rotation_y(rotation.yaw);
    BodyOrientations {
        globe,
        clouds: pitch * Quat::from_rotation_y(rotation.yaw * cloud_yaw_factor),
        atmosphere: globe,
    }
}

/// Clamp `v`'s length into `[min, max]`. A degenerate vector is pushed out
/// along `fallback` (or +Z) to `min`.
fn clamp_distance(v: Vec3, min: f32, max: f32, fallback: Vec3) -> Vec3 {
    let len = v.length();
    if !len.is_finite() || len < DEGENERATE_LENGTH {
        return fallback.try_normalize().unwrap_or(Vec3::Z) * min;
    }
    if len < min {
        v * (min / len)
    } else if len > max {
        v * (max / len)
    } else {
        v
    }
}
