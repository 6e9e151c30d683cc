use super::types::{ColorUniform, CurveVertex, ScaleTransUniform};

/// Vertex attribute location of `mcPosition`.
pub(crate) const MC_POSITION_LOCATION: u32 = 0;

/// Bind-group-0 binding of the `scaleTrans` uniform.
pub(crate) const SCALE_TRANS_BINDING: u32 = 0;

/// Bind-group-0 binding of the `color` uniform.
pub(crate) const COLOR_BINDING: u32 = 1;

/// Compiled curve pipeline plus name-based lookup of its inputs.
///
/// The pipeline draws line strips of [`CurveVertex`] and reads two uniforms
/// from bind group 0. A pipeline is tied to one surface format; rebuild it
/// when the format changes.
pub struct CurveShader {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl CurveShader {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("curveview curve shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/curve.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("curveview curve bgl"),
            entries: &[
                uniform_entry(SCALE_TRANS_BINDING, std::mem::size_of::<ScaleTransUniform>()),
                uniform_entry(COLOR_BINDING, std::mem::size_of::<ColorUniform>()),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("curveview curve pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("curveview curve pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CurveVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("curve pipeline built for {format:?}");

        Self {
            format,
            pipeline,
            bind_group_layout,
        }
    }

    /// Surface format the pipeline was built for.
    #[inline]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Shader location of a per-vertex attribute.
    pub fn attribute_location(name: &str) -> Option<u32> {
        match name {
            "mcPosition" => Some(MC_POSITION_LOCATION),
            _ => None,
        }
    }

    /// Binding index (group 0) of a uniform.
    pub fn uniform_location(name: &str) -> Option<u32> {
        match name {
            "scaleTrans" => Some(SCALE_TRANS_BINDING),
            "color" => Some(COLOR_BINDING),
            _ => None,
        }
    }
}

fn uniform_entry(binding: u32, size: usize) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(size as u64),
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(CurveShader::attribute_location("mcPosition"), Some(0));
        assert_eq!(CurveShader::uniform_location("scaleTrans"), Some(0));
        assert_eq!(CurveShader::uniform_location("color"), Some(1));
    }

    #[test]
    fn unknown_names_are_none() {
        assert_eq!(CurveShader::attribute_location("position"), None);
        assert_eq!(CurveShader::uniform_location("scale_trans"), None);
        assert_eq!(CurveShader::uniform_location("mcPosition"), None);
    }
}
