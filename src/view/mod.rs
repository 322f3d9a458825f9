//! View state: the free / zoom-focus state machine driving camera and
//! globe orientation.
//!
//! [`ViewController`] owns a single [`ViewState`] record. Input arrives as
//! [`ViewCommand`]s, time arrives through [`ViewController::tick`], and each
//! tick yields a [`FramePose`] for the renderer.

/// Command vocabulary executed by the controller.
pub mod command;
/// The controller and its per-frame update.
pub mod controller;
/// Decorative orbiting body.
pub mod orbiter;
/// Per-tick renderer output.
pub mod pose;
/// Controller state record.
pub mod state;

pub use command::ViewCommand;
pub use controller::ViewController;
pub use orbiter::OrbiterPose;
pub use pose::FramePose;
pub use state::{
    AutoRotateState, BodyOrientations, CameraPose, OrbiterState,
    RotationState, ViewMode, ViewState, ZoomFocusState,
};
