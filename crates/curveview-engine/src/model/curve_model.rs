use wgpu::util::DeviceExt;

use curveview_geom::{ColorAssigner, Curve, CurveDef, Extent, GeomError, ViewState};

use crate::render::curve::{
    ColorUniform, CurveShader, CurveVertex, ScaleTransUniform, COLOR_BINDING, SCALE_TRANS_BINDING,
};
use crate::render::{RenderCtx, RenderTarget};

use super::ModelError;

/// One curve on screen: sampled polyline, palette color and GPU buffers.
///
/// The buffers and bind group are plain owned wgpu handles, released once
/// when the model drops.
pub struct CurveModel {
    curve: Curve,
    vertex_count: u32,

    vbo: wgpu::Buffer,
    scale_trans_ubo: wgpu::Buffer,
    color_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CurveModel {
    /// Samples `def`, assigns the next palette color and uploads the polyline.
    ///
    /// Nothing is mutated on failure: the size check runs before sampling,
    /// and `colors` only advances once sampling succeeded.
    pub fn new(
        ctx: &RenderCtx<'_>,
        shader: &CurveShader,
        def: CurveDef,
        colors: &mut ColorAssigner,
    ) -> Result<Self, ModelError> {
        let sample_count = def.range.sample_count();
        let vertex_bytes = (sample_count as u64)
            .checked_mul(std::mem::size_of::<CurveVertex>() as u64)
            .unwrap_or(u64::MAX);
        let limits = ctx.device.limits();
        let max_bytes = limits.max_buffer_size;
        if vertex_bytes > max_bytes {
            return Err(ModelError::ResourceAcquisition {
                what: "vertex buffer",
                reason: format!("{vertex_bytes} bytes exceeds the device limit of {max_bytes}"),
            });
        }
        let vertex_count = u32::try_from(sample_count).map_err(|_| ModelError::ResourceAcquisition {
            what: "vertex buffer",
            reason: format!("{sample_count} vertices do not fit a draw call"),
        })?;

        let curve = Curve::new(def, colors)?;

        let vertices: Vec<CurveVertex> = curve
            .vertices()
            .into_iter()
            .map(|mc_position| CurveVertex { mc_position })
            .collect();

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("curveview curve vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let scale_trans_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("curveview curve scaleTrans ubo"),
            size: std::mem::size_of::<ScaleTransUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Color never changes after construction.
        let color_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("curveview curve color ubo"),
            contents: bytemuck::bytes_of(&ColorUniform::from(curve.color())),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("curveview curve bind group"),
            layout: shader.bind_group_layout(),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: SCALE_TRANS_BINDING,
                    resource: scale_trans_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: COLOR_BINDING,
                    resource: color_ubo.as_entire_binding(),
                },
            ],
        });

        log::debug!(
            "curve model: {} samples over t in [{}, {}], extent {:?}",
            sample_count,
            curve.def().range.t_min(),
            curve.def().range.t_max(),
            curve.bounding_box().as_array()
        );

        Ok(Self {
            curve,
            vertex_count,
            vbo,
            scale_trans_ubo,
            color_ubo,
            bind_group,
        })
    }

    /// Model-coordinate extent, z fixed to `[-1, 1]`.
    #[inline]
    pub fn bounding_box(&self) -> Extent {
        self.curve.bounding_box()
    }

    /// Draws the curve as a line strip using the current view.
    ///
    /// The projection is computed first; on failure nothing is written or
    /// recorded. The draw happens inside its own render pass, so pipeline and
    /// bind-group state do not outlive this call.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        shader: &CurveShader,
        view: &ViewState,
    ) -> Result<(), GeomError> {
        let aspect = ctx.viewport.aspect_ratio().ok_or_else(|| GeomError::InvalidParameter {
            name: "viewport",
            reason: format!("{}x{} viewport has no aspect ratio", ctx.viewport.width, ctx.viewport.height),
        })?;
        let projection = self.curve.projection(view, aspect)?;

        ctx.queue.write_buffer(
            &self.scale_trans_ubo,
            0,
            bytemuck::bytes_of(&ScaleTransUniform::from(projection)),
        );

        let mut rpass = target.begin_overlay_pass("curveview curve pass");
        rpass.set_pipeline(shader.pipeline());
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);

        Ok(())
    }

    /// Per-model command hook. Models have no commands of their own yet.
    pub fn handle_command(&mut self, ch: char, lds_x: f64, lds_y: f64) -> bool {
        let _ = (ch, lds_x, lds_y);
        true
    }
}
