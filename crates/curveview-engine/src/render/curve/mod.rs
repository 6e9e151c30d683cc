//! Curve line-strip pipeline and the GPU types it consumes.

mod shader;
mod types;

pub use shader::CurveShader;
pub(crate) use shader::{COLOR_BINDING, SCALE_TRANS_BINDING};
pub use types::{ColorUniform, CurveVertex, ScaleTransUniform};
