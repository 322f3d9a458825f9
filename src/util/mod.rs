//! Shared utilities for the view controller.
//!
//! Helpers for frame timing, easing curves, and geographic coordinate
//! conversion.

pub mod easing;
pub mod frame_timing;
pub mod geo;
