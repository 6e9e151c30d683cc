//! GPU-backed curve models.
//!
//! A model pairs a sampled [`curveview_geom::Curve`] with the GPU buffers
//! needed to draw it. Buffers are owned by the model and released when it
//! drops.

mod curve_model;
mod error;

pub use curve_model::CurveModel;
pub use error::ModelError;
