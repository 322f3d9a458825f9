//! The controller's complete interactive vocabulary.
//!
//! Every user-facing operation (pointer gesture, wheel, page scroll, key
//! press, or programmatic call) is represented as a `ViewCommand`.
//! Consumers construct commands and pass them to
//! [`ViewController::execute`](super::ViewController::execute).

use glam::{Vec2, Vec3};

/// A discrete or parameterized operation the view controller can perform.
///
/// The controller never cares *how* a command was triggered:
///
/// ```
/// # use globeview::{options::Options, view::{ViewCommand, ViewController}};
/// # use glam::Vec3;
/// let mut view = ViewController::new(Options::default());
/// view.execute(ViewCommand::PrimaryPress { hit: Some(Vec3::Z) }, 0.0);
/// view.execute(ViewCommand::ExitZoom, 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// Primary button (or single touch) went down. `hit` is the
    /// world-space point on the globe under the pointer, if any.
    PrimaryPress {
        /// Ray-cast hit against the globe surface.
        hit: Option<Vec3>,
    },

    /// Pointer moved by `delta` pixels while the primary button is held.
    Drag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Primary button (or single touch) released.
    Release,

    // ── Wheel / scroll ──────────────────────────────────────────────
    /// Mouse wheel delta (horizontal, vertical).
    Wheel {
        /// Raw wheel deltas.
        delta: Vec2,
    },

    /// Page scrolled by `delta` pixels since the last scroll event.
    Scroll {
        /// Signed scroll distance.
        delta: f32,
    },

    // ── Zoom focus ──────────────────────────────────────────────────
    /// Leave zoom-focus mode (secondary click). No-op in free mode.
    ExitZoom,

    /// Focus on a geographic location without a prior click.
    ZoomToLocation {
        /// Latitude in degrees.
        latitude: f32,
        /// Longitude in degrees.
        longitude: f32,
    },

    /// Focus on the configured home location.
    ZoomHome,

    /// Leave zoom-focus and clear all rotation targets.
    ResetView,
}
