//! Camera system for 3D scene viewing.
//!
//! A fixed-direction perspective camera looking down -Z at the origin; the
//! wheel moves it along the view axis within a clamped range.

/// Zoom controller owning the camera's distance.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
