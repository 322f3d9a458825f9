//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! touch drag, page scroll offset, viewport size) and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! controller's [`execute`](crate::view::ViewController::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{DragSource, PointerState};
use crate::scene::picking::pixel_to_ndc;
use crate::scene::SurfacePicker;
use crate::view::ViewCommand;

/// Maps physical key strings to [`ViewCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format, which is
/// also the DOM `KeyboardEvent.code` format: `"KeyH"`, `"Escape"`, etc.
///
/// Only *discrete* commands make sense as key bindings; parameterized
/// commands like `Drag` are produced by the pointer interpreter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Leave zoom-focus.
    ExitZoom,
    /// Focus the configured home location.
    ZoomHome,
    /// Leave zoom-focus and clear rotation targets.
    ResetView,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewCommand`].
    fn to_command(self) -> ViewCommand {
        match self {
            Self::ExitZoom => ViewCommand::ExitZoom,
            Self::ZoomHome => ViewCommand::ZoomHome,
            Self::ResetView => ViewCommand::ResetView,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyCommandTag::ExitZoom),
            ("KeyH".into(), KeyCommandTag::ZoomHome),
            ("KeyR".into(), KeyCommandTag::ResetView),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, returning the previous binding.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        tag: KeyCommandTag,
    ) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event, &scene) {
///     view.execute(cmd, clock.now_ms());
/// }
///
/// if let Some(cmd) = input.handle_key_press("KeyH") {
///     view.execute(cmd, clock.now_ms());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Pointer tracking and drag ownership.
    pointer: PointerState,
    /// Page scroll offset seen by the previous `Scroll` event.
    last_scroll_y: f32,
    /// Viewport size in physical pixels.
    viewport: (u32, u32),
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer: PointerState::default(),
            last_scroll_y: 0.0,
            viewport: (1, 1),
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Set the viewport used for NDC conversion.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Record the page's current scroll offset without emitting a boost.
    ///
    /// Call once at startup; a page restored mid-scroll would otherwise
    /// turn its whole offset into spin on the first `Scroll` event.
    pub fn set_scroll_origin(&mut self, y: f32) {
        self.last_scroll_y = y;
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Last known pointer position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.pointer.position
    }

    /// Whether a primary drag (mouse or single touch) is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.pointer.drag.is_some()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key)
    }

    /// Pixel position to NDC for the current viewport.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        pixel_to_ndc(x, y, self.viewport.0 as f32, self.viewport.1 as f32)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `picker` resolves the globe point under a press.
    pub fn handle_event<P: SurfacePicker + ?Sized>(
        &mut self,
        event: InputEvent,
        picker: &P,
    ) -> Option<ViewCommand> {
        match event {
            InputEvent::PointerDown { x, y, button } => match button {
                MouseButton::Left => {
                    Some(self.press(DragSource::Mouse, x, y, picker))
                }
                MouseButton::Right => Some(ViewCommand::ExitZoom),
                MouseButton::Middle => None,
            },
            InputEvent::PointerMoved { x, y } => {
                self.drag_to(DragSource::Mouse, x, y)
            }
            InputEvent::PointerUp { button } => (button == MouseButton::Left
                && self.pointer.release(DragSource::Mouse))
            .then_some(ViewCommand::Release),
            InputEvent::Wheel { dx, dy } => {
                let delta = Vec2::new(dx, dy);
                (delta != Vec2::ZERO).then_some(ViewCommand::Wheel { delta })
            }
            InputEvent::Scroll { y } => {
                let delta = y - self.last_scroll_y;
                self.last_scroll_y = y;
                (delta != 0.0).then_some(ViewCommand::Scroll { delta })
            }
            InputEvent::TouchStart { touches, x, y } => {
                if touches == 1 {
                    Some(self.press(DragSource::Touch, x, y, picker))
                } else {
                    self.end_touch_drag()
                }
            }
            InputEvent::TouchMoved { touches, x, y } => {
                if touches == 1 {
                    self.drag_to(DragSource::Touch, x, y)
                } else {
                    self.end_touch_drag()
                }
            }
            InputEvent::TouchEnd { touches, .. } => {
                if touches == 0 {
                    self.end_touch_drag()
                } else {
                    None
                }
            }
            InputEvent::ContextMenu => None,
            InputEvent::Resized { width, height } => {
                self.set_viewport(width, height);
                None
            }
        }
    }

    fn press<P: SurfacePicker + ?Sized>(
        &mut self,
        source: DragSource,
        x: f32,
        y: f32,
        picker: &P,
    ) -> ViewCommand {
        self.pointer.press(source, Vec2::new(x, y));
        let hit = picker.pick_surface(self.to_ndc(x, y));
        ViewCommand::PrimaryPress { hit }
    }

    fn drag_to(
        &mut self,
        source: DragSource,
        x: f32,
        y: f32,
    ) -> Option<ViewCommand> {
        self.pointer
            .move_to(source, Vec2::new(x, y))
            .map(|delta| ViewCommand::Drag { delta })
    }

    /// Extra fingers (pinch) or lifting the last one end a touch drag.
    fn end_touch_drag(&mut self) -> Option<ViewCommand> {
        self.pointer
            .release(DragSource::Touch)
            .then_some(ViewCommand::Release)
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn front_picker(ndc: Vec2) -> Option<Vec3> {
        (ndc.length() < 0.5).then_some(Vec3::Z)
    }

    fn processor() -> InputProcessor {
        let mut input = InputProcessor::new();
        input.set_viewport(200, 100);
        input
    }

    #[test]
    fn press_center_picks_globe() {
        let mut input = processor();
        let cmd = input.handle_event(
            InputEvent::PointerDown {
                x: 100.0,
                y: 50.0,
                button: MouseButton::Left,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::PrimaryPress { hit: Some(Vec3::Z) }));
        assert!(input.dragging());
    }

    #[test]
    fn press_corner_misses() {
        let mut input = processor();
        let cmd = input.handle_event(
            InputEvent::PointerDown {
                x: 0.0,
                y: 0.0,
                button: MouseButton::Left,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::PrimaryPress { hit: None }));
    }

    #[test]
    fn right_press_exits_zoom() {
        let mut input = processor();
        let cmd = input.handle_event(
            InputEvent::PointerDown {
                x: 0.0,
                y: 0.0,
                button: MouseButton::Right,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::ExitZoom));
        assert!(!input.dragging());
        assert_eq!(
            input.handle_event(InputEvent::ContextMenu, &front_picker),
            None
        );
    }

    #[test]
    fn drag_emits_deltas_until_release() {
        let mut input = processor();
        let _ = input.handle_event(
            InputEvent::PointerMoved { x: 5.0, y: 5.0 },
            &front_picker,
        );
        let _ = input.handle_event(
            InputEvent::PointerDown {
                x: 10.0,
                y: 10.0,
                button: MouseButton::Left,
            },
            &front_picker,
        );
        let cmd = input.handle_event(
            InputEvent::PointerMoved { x: 14.0, y: 7.0 },
            &front_picker,
        );
        assert_eq!(
            cmd,
            Some(ViewCommand::Drag {
                delta: Vec2::new(4.0, -3.0)
            })
        );
        let cmd = input.handle_event(
            InputEvent::PointerUp {
                button: MouseButton::Left,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::Release));
        let cmd = input.handle_event(
            InputEvent::PointerMoved { x: 20.0, y: 7.0 },
            &front_picker,
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn wheel_and_scroll() {
        let mut input = processor();
        assert_eq!(
            input.handle_event(
                InputEvent::Wheel { dx: 0.0, dy: 0.0 },
                &front_picker
            ),
            None
        );
        assert_eq!(
            input.handle_event(
                InputEvent::Wheel { dx: 1.0, dy: 2.0 },
                &front_picker
            ),
            Some(ViewCommand::Wheel {
                delta: Vec2::new(1.0, 2.0)
            })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll { y: 120.0 }, &front_picker),
            Some(ViewCommand::Scroll { delta: 120.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll { y: 100.0 }, &front_picker),
            Some(ViewCommand::Scroll { delta: -20.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll { y: 100.0 }, &front_picker),
            None
        );
    }

    #[test]
    fn scroll_origin_excludes_restored_offset() {
        let mut input = processor();
        input.set_scroll_origin(2000.0);
        assert_eq!(
            input.handle_event(InputEvent::Scroll { y: 2010.0 }, &front_picker),
            Some(ViewCommand::Scroll { delta: 10.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::Scroll { y: 2010.0 }, &front_picker),
            None
        );
    }

    #[test]
    fn pinch_is_swallowed_and_ends_touch_drag() {
        let mut input = processor();
        let cmd = input.handle_event(
            InputEvent::TouchStart {
                touches: 1,
                x: 100.0,
                y: 50.0,
            },
            &front_picker,
        );
        assert!(matches!(cmd, Some(ViewCommand::PrimaryPress { .. })));
        let cmd = input.handle_event(
            InputEvent::TouchMoved {
                touches: 1,
                x: 102.0,
                y: 50.0,
            },
            &front_picker,
        );
        assert!(matches!(cmd, Some(ViewCommand::Drag { .. })));

        let cmd = input.handle_event(
            InputEvent::TouchStart {
                touches: 2,
                x: 102.0,
                y: 50.0,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::Release));
        let cmd = input.handle_event(
            InputEvent::TouchMoved {
                touches: 2,
                x: 150.0,
                y: 80.0,
            },
            &front_picker,
        );
        assert_eq!(cmd, None);
        let cmd = input.handle_event(
            InputEvent::TouchMoved {
                touches: 1,
                x: 160.0,
                y: 80.0,
            },
            &front_picker,
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn lifting_last_finger_releases() {
        let mut input = processor();
        let _ = input.handle_event(
            InputEvent::TouchStart {
                touches: 1,
                x: 1.0,
                y: 1.0,
            },
            &front_picker,
        );
        let cmd = input.handle_event(
            InputEvent::TouchEnd {
                touches: 0,
                x: 1.0,
                y: 1.0,
            },
            &front_picker,
        );
        assert_eq!(cmd, Some(ViewCommand::Release));
    }

    #[test]
    fn resize_changes_ndc() {
        let mut input = processor();
        let _ = input.handle_event(
            InputEvent::Resized {
                width: 400,
                height: 400,
            },
            &front_picker,
        );
        assert_eq!(input.viewport(), (400, 400));
        assert_eq!(input.to_ndc(200.0, 200.0), Vec2::ZERO);
    }

    #[test]
    fn default_key_bindings() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("Escape"), Some(ViewCommand::ExitZoom));
        assert_eq!(input.handle_key_press("KeyH"), Some(ViewCommand::ZoomHome));
        assert_eq!(input.handle_key_press("KeyR"), Some(ViewCommand::ResetView));
        assert_eq!(input.handle_key_press("KeyQ"), None);
    }

    #[test]
    fn rebinding() {
        let mut input = InputProcessor::new();
        let previous = input
            .key_bindings_mut()
            .bind("Backspace", KeyCommandTag::ExitZoom);
        assert_eq!(previous, None);
        assert_eq!(
            input.key_bindings_mut().unbind("Escape"),
            Some(KeyCommandTag::ExitZoom)
        );
        assert_eq!(input.handle_key_press("Escape"), None);
        assert_eq!(
            input.handle_key_press("Backspace"),
            Some(ViewCommand::ExitZoom)
        );
    }
}
