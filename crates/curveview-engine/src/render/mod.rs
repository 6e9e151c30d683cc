//! GPU rendering subsystem.
//!
//! Convention:
//! - curve vertices are uploaded in model coordinates
//! - the vertex shader maps them to NDC with a per-draw `scaleTrans` uniform

mod ctx;
pub mod curve;

pub use ctx::{RenderCtx, RenderTarget};
