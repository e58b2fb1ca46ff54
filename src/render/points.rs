use super::helpers;
use celestial_core::{Layer, LayerAttributes, ParticleAttrib};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

/// GPU mirror of `LayerUniforms` in particles.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color_core: [f32; 4],
    color_mid: [f32; 4],
    color_edge: [f32; 4],
    glow_color: [f32; 4],
    center: [f32; 4],
    viewport: [f32; 4],
}

/// Per-frame inputs for one layer, gathered from the sink calls.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LayerParams {
    pub(crate) model: Mat4,
    pub(crate) time: f32,
    pub(crate) glow: f32,
    pub(crate) size: f32,
    pub(crate) pixel_ratio: f32,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            time: 0.0,
            glow: 0.0,
            size: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

/// Fixed colours and gradient for one layer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LayerLook {
    pub(crate) core: [f32; 3],
    pub(crate) mid: [f32; 3],
    pub(crate) edge: [f32; 3],
    pub(crate) glow: [f32; 3],
    pub(crate) center: Vec3,
    pub(crate) radius: f32,
}

fn rgb_w(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

impl LayerUniforms {
    pub(crate) fn pack(
        view_proj: Mat4,
        params: &LayerParams,
        look: &LayerLook,
        framebuffer: [f32; 2],
    ) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: params.model.to_cols_array_2d(),
            color_core: rgb_w(look.core, params.time),
            color_mid: rgb_w(look.mid, params.glow),
            color_edge: rgb_w(look.edge, params.size),
            glow_color: rgb_w(look.glow, params.pixel_ratio),
            center: look.center.extend(look.radius).to_array(),
            viewport: Vec4::new(framebuffer[0], framebuffer[1], 0.0, 0.0).to_array(),
        }
    }
}

/// Instance buffers and uniforms for one point layer.
pub(crate) struct LayerBuffers {
    pub(crate) layer: Layer,
    pub(crate) positions: Option<wgpu::Buffer>,
    pub(crate) attributes: Option<wgpu::Buffer>,
    pub(crate) count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) params: LayerParams,
    pub(crate) look: LayerLook,
}

impl LayerBuffers {
    pub(crate) fn new(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        layer: Layer,
        look: LayerLook,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(layer_label(layer)),
            size: std::mem::size_of::<LayerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(layer_label(layer)),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            layer,
            positions: None,
            attributes: None,
            count: 0,
            uniform_buffer,
            bind_group,
            params: LayerParams::default(),
            look,
        }
    }

    /// Replace both instance buffers. Positions stay writable for
    /// per-frame updates.
    pub(crate) fn upload(&mut self, device: &wgpu::Device, data: LayerAttributes<'_>) {
        let count = data.positions.len().min(data.attributes.len());
        if count == 0 {
            self.positions = None;
            self.attributes = None;
            self.count = 0;
            return;
        }
        self.positions = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_positions"),
            contents: bytemuck::cast_slice(&data.positions[..count]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        }));
        self.attributes = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_attributes"),
            contents: bytemuck::cast_slice::<ParticleAttrib, u8>(&data.attributes[..count]),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.count = count as u32;
        log::info!("[gpu] {:?}: {} instances", self.layer, count);
    }

    /// Overwrite live positions; extra entries beyond the uploaded count are
    /// ignored.
    pub(crate) fn write_positions(&self, queue: &wgpu::Queue, positions: &[Vec3]) {
        if let Some(buf) = &self.positions {
            let n = positions.len().min(self.count as usize);
            queue.write_buffer(buf, 0, bytemuck::cast_slice(&positions[..n]));
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, view_proj: Mat4, framebuffer: [f32; 2]) {
        let u = LayerUniforms::pack(view_proj, &self.params, &self.look, framebuffer);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, pipeline: &wgpu::RenderPipeline) {
        let (Some(positions), Some(attributes)) = (&self.positions, &self.attributes) else {
            return;
        };
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, positions.slice(..));
        rpass.set_vertex_buffer(1, attributes.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}

fn layer_label(layer: Layer) -> &'static str {
    match layer {
        Layer::Particles => "particles",
        Layer::Stars => "stars",
    }
}

pub(crate) struct PointPipelines {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) particles: wgpu::RenderPipeline,
    pub(crate) stars: wgpu::RenderPipeline,
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const PARTICLE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x2];

// One instance per point; the quad corners come from the vertex index.
const INSTANCE_LAYOUTS: [wgpu::VertexBufferLayout<'static>; 2] = [
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec3>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &POSITION_ATTRS,
    },
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleAttrib>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRS,
    },
];

pub(crate) fn create_point_pipelines(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    target_format: wgpu::TextureFormat,
) -> PointPipelines {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_points"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let make = |vs: &str, fs: &str| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(vs),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs),
                buffers: &INSTANCE_LAYOUTS,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(helpers::ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };
    PointPipelines {
        particles: make("vs_particles", "fs_particles"),
        stars: make("vs_stars", "fs_stars"),
        bgl,
    }
}
