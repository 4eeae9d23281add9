/// Texture format for the Canvas2D layer copies.
///
/// Canvas pixels are sRGB-encoded bytes. On an sRGB surface the layers are
/// decoded on sample and re-encoded on write; on a plain unorm surface they
/// pass through untouched, so both ends stay in the same encoding.
pub fn layer_format_for(surface: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Prefer an sRGB 8-bit surface, then any 8-bit unorm one, then whatever
/// the surface lists first.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    use wgpu::TextureFormat as F;
    formats
        .iter()
        .copied()
        .find(|f| matches!(f, F::Bgra8UnormSrgb | F::Rgba8UnormSrgb))
        .or_else(|| {
            formats
                .iter()
                .copied()
                .find(|f| matches!(f, F::Bgra8Unorm | F::Rgba8Unorm))
        })
        .or_else(|| formats.first().copied())
}
