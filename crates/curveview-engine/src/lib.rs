//! curveview engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window and event loop, wgpu device/surface, the curve pipeline, and the
//! GPU-backed curve model.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod model;
