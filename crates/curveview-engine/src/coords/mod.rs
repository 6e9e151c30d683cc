//! Window-space coordinate types.
//!
//! Canonical CPU space for window metrics:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Model coordinates and their projection live in `curveview_geom`.

mod viewport;

pub use viewport::Viewport;
