/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewCommand`](crate::view::ViewCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0 },
///     &scene,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down at a screen position.
    PointerDown {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
        /// Which button was pressed.
        button: MouseButton,
    },
    /// Cursor moved to absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A pointer button was released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
    },
    /// Mouse wheel or trackpad delta.
    Wheel {
        /// Horizontal delta.
        dx: f32,
        /// Vertical delta.
        dy: f32,
    },
    /// Absolute page scroll offset of the host document.
    Scroll {
        /// Vertical scroll offset in pixels.
        y: f32,
    },
    /// Touch began.
    TouchStart {
        /// Number of active touch points.
        touches: u32,
        /// Horizontal position of the first touch.
        x: f32,
        /// Vertical position of the first touch.
        y: f32,
    },
    /// Touch moved.
    TouchMoved {
        /// Number of active touch points.
        touches: u32,
        /// Horizontal position of the first touch.
        x: f32,
        /// Vertical position of the first touch.
        y: f32,
    },
    /// Touch ended.
    TouchEnd {
        /// Number of touch points still active.
        touches: u32,
        /// Horizontal position of the lifted touch.
        x: f32,
        /// Vertical position of the lifted touch.
        y: f32,
    },
    /// Context menu requested (right click); the host suppresses it.
    ContextMenu,
    /// Viewport size changed.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
