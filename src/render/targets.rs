use super::helpers;
use wgpu;

/// Sampled copies of the three Canvas2D layers, refreshed every frame.
///
/// - `background` is the full-frame gradient.
/// - `below` holds the embedded labels on transparent pixels.
/// - `blob` holds the clipped blob fill, edge-shaded in the composite pass.
pub(crate) struct LayerTargets {
    pub(crate) background: wgpu::Texture,
    pub(crate) background_view: wgpu::TextureView,
    pub(crate) below: wgpu::Texture,
    pub(crate) below_view: wgpu::TextureView,
    pub(crate) blob: wgpu::Texture,
    pub(crate) blob_view: wgpu::TextureView,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) format: wgpu::TextureFormat,
}

fn layer_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture(
        device,
        label,
        width,
        height,
        format,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    )
}

impl LayerTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (background, background_view) =
            layer_texture(device, "layer_background", width, height, format);
        let (below, below_view) = layer_texture(device, "layer_below", width, height, format);
        let (blob, blob_view) = layer_texture(device, "layer_blob", width, height, format);
        Self {
            background,
            background_view,
            below,
            below_view,
            blob,
            blob_view,
            width,
            height,
            format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.format);
    }
}
