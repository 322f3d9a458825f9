//! Input handling: event types, pointer tracking, and the input processor
//! that converts raw window events into view commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position and drag ownership.
pub(crate) mod mouse;
/// Converts raw events into view commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
