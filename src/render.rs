use blob_core::EdgeUniforms;
use web_sys as web;

mod edge;
mod surface_format;
mod helpers;
mod targets;
use edge::EdgeResources;
use targets::LayerTargets;

/// Which Canvas2D layer a pixel upload targets.
#[derive(Clone, Copy, Debug)]
pub enum LayerSlot {
    Background,
    Below,
    Blob,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: LayerTargets,
    linear_sampler: wgpu::Sampler,
    edge: EdgeResources,
    bind_group: wgpu::BindGroup,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = surface_format::pick_surface_format(&caps.formats)
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
        let layer_format = surface_format::layer_format_for(format);
        log::info!(
            "[gpu] surface {}x{} {:?}, layers {:?}",
            width,
            height,
            format,
            layer_format
        );

        let targets = LayerTargets::new(&device, width, height, layer_format);
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

        // WGSL validation errors are fatal
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("edge_shader"),
            source: wgpu::ShaderSource::Wgsl(blob_core::EDGE_WGSL.into()),
        });
        let edge = edge::create_edge_resources(&device, &shader, format);
        if let Some(err) = device.pop_error_scope().await {
            anyhow::bail!("edge shader failed validation: {}", err);
        }
        let bind_group = edge::create_bind_group(&device, &edge, &targets, &linear_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            edge,
            bind_group,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.bind_group =
                edge::create_bind_group(&self.device, &self.edge, &self.targets, &self.linear_sampler);
            log::info!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Copy straight-alpha RGBA8 pixels into one layer texture.
    ///
    /// Uploads whose length does not match the current target size are
    /// dropped; this only happens for the frame in which a resize lands.
    pub fn upload_layer(&self, slot: LayerSlot, pixels: &[u8]) {
        let (width, height) = (self.targets.width, self.targets.height);
        if pixels.len() != (width * height * 4) as usize {
            log::debug!(
                "[gpu] skipping {:?} upload: {} bytes for {}x{}",
                slot,
                pixels.len(),
                width,
                height
            );
            return;
        }
        let texture = match slot {
            LayerSlot::Background => &self.targets.background,
            LayerSlot::Below => &self.targets.below,
            LayerSlot::Blob => &self.targets.blob,
        };
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn render(&mut self, uniforms: &EdgeUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&self.edge.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        edge::draw(&mut encoder, &view, &self.edge.pipeline, &self.bind_group);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
