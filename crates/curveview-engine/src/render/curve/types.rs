use bytemuck::{Pod, Zeroable};
use curveview_geom::{Projection, Rgb};

use super::shader::MC_POSITION_LOCATION;

/// One polyline vertex in model coordinates (`mcPosition`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    pub mc_position: [f32; 2],
}

impl CurveVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: MC_POSITION_LOCATION,
    }];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// `scaleTrans` uniform: `[scale_x, trans_x, scale_y, trans_y]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ScaleTransUniform {
    pub scale_trans: [f32; 4],
}

impl From<Projection> for ScaleTransUniform {
    fn from(p: Projection) -> Self {
        Self { scale_trans: p.to_uniform() }
    }
}

/// `color` uniform: rgb padded to 16 bytes for uniform-buffer alignment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorUniform {
    pub rgb: [f32; 3],
    pub _pad: f32,
}

impl From<Rgb> for ColorUniform {
    fn from(c: Rgb) -> Self {
        Self { rgb: c.to_array(), _pad: 0.0 }
    }
}
