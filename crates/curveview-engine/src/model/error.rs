use curveview_geom::GeomError;
use thiserror::Error;

/// Failure to construct a [`CurveModel`](super::CurveModel).
#[derive(Debug, Error)]
pub enum ModelError {
    /// The curve definition itself is invalid.
    #[error(transparent)]
    Geometry(#[from] GeomError),

    /// A GPU resource could not be created for the curve.
    #[error("failed to acquire {what}: {reason}")]
    ResourceAcquisition { what: &'static str, reason: String },
}
