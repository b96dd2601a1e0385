//! Line and triangle render pipelines for composed frames
//!
//! Two pipelines share one shader, one view-projection uniform, and one
//! depth buffer: a line-list pass for edges and a triangle-list pass for
//! faces. Quads are fan-triangulated at upload (every generated face is
//! convex). Neither pass culls - face winding is preserved from the
//! generators but only the depth test decides visibility.

use wgpu::util::DeviceExt;

use crate::frame::{DrawCommand, Frame, FrameVertex};

/// GPU vertex: position padded to 16 bytes, then RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub _padding: f32,
    pub color: [f32; 4],
}

impl From<&FrameVertex> for GpuVertex {
    fn from(v: &FrameVertex) -> Self {
        Self {
            position: v.position.to_array(),
            _padding: 0.0,
            color: v.color,
        }
    }
}

/// Uniforms shared by both passes
/// Layout: 64 bytes (must match frame.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view_proj: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

/// Pipelines, buffers, and depth texture for drawing composed frames
pub struct FramePipeline {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    line_buffer: Option<wgpu::Buffer>,
    line_vertex_count: u32,
    triangle_buffer: Option<wgpu::Buffer>,
    triangle_vertex_count: u32,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl FramePipeline {
    /// Create both pipelines for a surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Frame Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("shaders/frame.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Frame Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let line_pipeline = Self::build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
        );
        let triangle_pipeline = Self::build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            line_pipeline,
            triangle_pipeline,
            uniform_buffer,
            bind_group,
            line_buffer: None,
            line_vertex_count: 0,
            triangle_buffer: None,
            triangle_vertex_count: 0,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    fn build_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Frame Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Get the vertex buffer layout for GpuVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Update the shared view-projection uniform
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Ensure the depth texture exists at the given size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Frame Depth Texture"),
                size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
            self.depth_texture =
                Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Upload a composed frame into fresh vertex buffers
    ///
    /// Lines map directly; polygons are fan-triangulated. Called only when
    /// the cached frame went stale, not every redraw.
    pub fn upload_frame(&mut self, device: &wgpu::Device, frame: &Frame) {
        let (line_vertices, triangle_vertices) = tessellate(frame);

        self.line_vertex_count = line_vertices.len() as u32;
        self.line_buffer = (!line_vertices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Frame Line Buffer"),
                contents: bytemuck::cast_slice(&line_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        self.triangle_vertex_count = triangle_vertices.len() as u32;
        self.triangle_buffer = (!triangle_vertices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Frame Triangle Buffer"),
                contents: bytemuck::cast_slice(&triangle_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });
    }

    /// Draw the uploaded frame into a centered square viewport
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
        surface_size: (u32, u32),
    ) {
        let depth_view = self
            .depth_texture
            .as_ref()
            .expect("Depth texture not created. Call ensure_depth_texture first.");

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Frame Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // Square viewport centered in the available area
        let (width, height) = surface_size;
        let side = width.min(height);
        if side == 0 {
            return;
        }
        render_pass.set_viewport(
            ((width - side) / 2) as f32,
            ((height - side) / 2) as f32,
            side as f32,
            side as f32,
            0.0,
            1.0,
        );

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        // Emission order: edges first, then faces
        if let Some(buffer) = &self.line_buffer {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, buffer.slice(..));
            render_pass.draw(0..self.line_vertex_count, 0..1);
        }
        if let Some(buffer) = &self.triangle_buffer {
            render_pass.set_pipeline(&self.triangle_pipeline);
            render_pass.set_vertex_buffer(0, buffer.slice(..));
            render_pass.draw(0..self.triangle_vertex_count, 0..1);
        }
    }
}

/// Flatten a frame into line-list and triangle-list vertex arrays
fn tessellate(frame: &Frame) -> (Vec<GpuVertex>, Vec<GpuVertex>) {
    let mut lines = Vec::new();
    let mut triangles = Vec::new();

    for command in &frame.commands {
        match command {
            DrawCommand::Line(vs) => {
                lines.push(GpuVertex::from(&vs[0]));
                lines.push(GpuVertex::from(&vs[1]));
            }
            DrawCommand::Polygon(vs) => {
                // Fan around the first vertex; faces are convex
                for i in 1..vs.len().saturating_sub(1) {
                    triangles.push(GpuVertex::from(&vs[0]));
                    triangles.push(GpuVertex::from(&vs[i]));
                    triangles.push(GpuVertex::from(&vs[i + 1]));
                }
            }
        }
    }

    (lines, triangles)
}

/// Perspective frustum matrix (the glFrustum formula, column-major)
pub fn frustum_matrix(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> [[f32; 4]; 4] {
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -(2.0 * far * near) / (far - near);

    [
        [2.0 * near / (right - left), 0.0, 0.0, 0.0],
        [0.0, 2.0 * near / (top - bottom), 0.0, 0.0],
        [a, b, c, -1.0],
        [0.0, 0.0, d, 0.0],
    ]
}
