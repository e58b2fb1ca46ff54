use crate::constants::BloomSettings;
use celestial_core::{
    uniform, Camera, Layer, LayerAttributes, RenderSink, SceneConfig, Uniforms, PARTICLES_WGSL,
    POST_WGSL,
};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod points;
mod post;
mod targets;
use points::{LayerBuffers, LayerLook, PointPipelines};
use targets::{RenderTargets, HDR_FORMAT};

/// WebGPU renderer for one scene: stars and particles are drawn as additive
/// billboards into an HDR target, then bloomed and tone mapped to the canvas.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Post-processing resources
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    post_groups: post::PostBindGroups,
    // Point layers
    pipelines: PointPipelines,
    particles: LayerBuffers,
    stars: LayerBuffers,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    bloom: BloomSettings,
    view_proj: Mat4,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &SceneConfig,
        bloom: BloomSettings,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);

        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });
        let pipelines = points::create_point_pipelines(&device, &points_shader, HDR_FORMAT);

        let palette = &scene.palette;
        let surface_shape = scene.shape.surface();
        let particles = LayerBuffers::new(
            &device,
            &pipelines.bgl,
            Layer::Particles,
            LayerLook {
                core: palette.core,
                mid: palette.mid,
                edge: palette.edge,
                glow: palette.glow,
                center: surface_shape.centroid(),
                radius: palette.gradient_radius,
            },
        );
        let stars = LayerBuffers::new(
            &device,
            &pipelines.bgl,
            Layer::Stars,
            LayerLook {
                core: palette.star,
                mid: palette.star,
                edge: palette.star,
                glow: palette.star,
                center: Vec3::ZERO,
                radius: scene.stars.outer_radius,
            },
        );

        // Post shader + pipelines
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = post::rebuild_bind_groups(&device, &post, &linear_sampler, &targets);

        let bg = palette.background;
        let gpu = Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            post,
            post_groups,
            pipelines,
            particles,
            stars,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
            bloom,
            view_proj: Mat4::IDENTITY,
        };
        gpu.write_post_uniforms();
        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);
        Ok(gpu)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.rebuild_post_bind_groups();
            self.write_post_uniforms();
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut LayerBuffers {
        match layer {
            Layer::Particles => &mut self.particles,
            Layer::Stars => &mut self.stars,
        }
    }

    fn draw(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let framebuffer = [self.width as f32, self.height as f32];
        self.stars
            .write_uniforms(&self.queue, self.view_proj, framebuffer);
        self.particles
            .write_uniforms(&self.queue, self.view_proj, framebuffer);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.stars.draw(&mut rpass, &self.pipelines.stars);
            self.particles.draw(&mut rpass, &self.pipelines.particles);
        }

        if self.bloom.is_enabled() {
            // Bright pass → bloom_a
            post::blit(
                &mut encoder,
                "bright_pass",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.bright_pipeline,
                &self.post_groups.hdr,
                None,
            );
            // Blur horizontal bloom_a -> bloom_b
            post::blit(
                &mut encoder,
                "blur_h",
                &self.targets.bloom_b_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_a,
                None,
            );
            // Blur vertical bloom_b -> bloom_a
            post::blit(
                &mut encoder,
                "blur_v",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_b,
                None,
            );
        }
        // Composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn rebuild_post_bind_groups(&mut self) {
        self.post_groups = post::rebuild_bind_groups(
            &self.device,
            &self.post,
            &self.linear_sampler,
            &self.targets,
        );
    }

    fn write_post_uniforms(&self) {
        let (bw, bh) = targets::bloom_size(self.width, self.height);
        post::write_post_uniforms(&self.queue, &self.post, [bw as f32, bh as f32], self.bloom);
    }
}

impl RenderSink for GpuState {
    fn upload_static(&mut self, layer: Layer, data: LayerAttributes<'_>) {
        let buffers = match layer {
            Layer::Particles => &mut self.particles,
            Layer::Stars => &mut self.stars,
        };
        buffers.upload(&self.device, data);
    }

    fn upload_positions(&mut self, layer: Layer, positions: &[Vec3]) {
        let buffers = match layer {
            Layer::Particles => &self.particles,
            Layer::Stars => &self.stars,
        };
        buffers.write_positions(&self.queue, positions);
    }

    fn set_uniforms(&mut self, layer: Layer, uniforms: &Uniforms) {
        let params = &mut self.layer_mut(layer).params;
        params.time = uniforms.get_or_zero(uniform::TIME);
        params.glow = uniforms.get_or_zero(uniform::GLOW);
        params.size = uniforms.get_or_zero(uniform::SIZE);
        params.pixel_ratio = uniforms.get(uniform::PIXEL_RATIO).unwrap_or(1.0);
    }

    fn set_transform(&mut self, layer: Layer, model: Mat4) {
        self.layer_mut(layer).params.model = model;
    }

    fn set_camera(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection();
    }

    fn render(&mut self) {
        match self.draw() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}
