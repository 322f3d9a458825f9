// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! View state controller for an interactive 3D Earth globe.
//!
//! Globeview owns the camera and globe orientation of a globe scene and
//! leaves drawing to a rendering engine. It handles free drag/wheel/touch
//! rotation with decaying auto-rotation and a page-scroll boost, a
//! click-to-focus zoom mode that interpolates camera and orientation toward
//! a picked surface point, a decorative orbiter with a nametag, and a
//! seeded background starfield.
//!
//! # Key entry points
//!
//! - [`ViewController`] - the state machine; call
//!   [`tick`](ViewController::tick) once per frame
//! - [`InputProcessor`] - turns raw pointer, wheel, touch and key events
//!   into [`ViewCommand`]s
//! - [`FramePose`] - per-frame output, pushed into any [`scene::SceneSink`]
//! - [`Options`] - every tuning constant, loadable from TOML presets
//! - [`assets`] - background loading of textures, model and font with
//!   fallback locations
//!
//! # Architecture
//!
//! Input events go through the [`InputProcessor`], which ray-casts clicks
//! via a [`scene::SurfacePicker`] and emits commands. The controller folds
//! commands into its state and, on each tick, advances free rotation or
//! the zoom transition and returns a [`FramePose`]. Assets stream in on a
//! background [`assets::AssetLoader`] thread; bodies become drawable as
//! their assets land.
//!
//! The `viewer` feature adds a winit window ([`Viewer`]); the `web` feature
//! adds wasm-bindgen bindings in [`web`].

pub mod assets;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod starfield;
pub mod util;
pub mod view;
#[cfg(feature = "viewer")]
mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use error::GlobeError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
pub use view::{FramePose, ViewCommand, ViewController};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
