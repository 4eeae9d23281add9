//! Edge shading of the blob silhouette.
//!
//! The GPU path runs `shaders/edge.wgsl`; [`ReferenceEdgeShader`] is the same
//! math on the CPU so the contract can be checked on the host:
//!
//! - alpha is blurred over two rings of taps up to `blur_amount` pixels out;
//! - the blurred alpha is remapped with `smoothstep(0, edge_width, a)` and
//!   never drops below the source alpha, so the soft band grows outward from
//!   the silhouette and every opaque source pixel stays opaque;
//! - `time` only shimmers colour, never alpha.

use crate::raster::Image;
use crate::surface::SurfaceSize;
use glam::{Vec2, Vec3, Vec4};

/// Uniform block of the edge pass, laid out for direct upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EdgeUniforms {
    pub resolution: [f32; 2],
    pub edge_width: f32,
    pub blur_amount: f32,
    pub time: f32,
    pub _pad: [f32; 3],
}

impl EdgeUniforms {
    pub fn new(size: SurfaceSize, edge_width: f32, blur_amount: f32, time: f32) -> Self {
        Self {
            resolution: [size.width as f32, size.height as f32],
            edge_width,
            blur_amount,
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Turns a rendered blob fill into its edge-shaded version.
pub trait EdgeShader {
    fn shade(&self, source: &Image, uniforms: &EdgeUniforms) -> Image;
}

// Unit directions for the 8-tap rings
const RING: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [0.7071, 0.7071],
    [0.0, 1.0],
    [-0.7071, 0.7071],
    [-1.0, 0.0],
    [-0.7071, -0.7071],
    [0.0, -1.0],
    [0.7071, -0.7071],
];

const SHIMMER_AMPLITUDE: f32 = 0.04;

/// Period of the shimmer wave in `time` units (`sin(2 * time)`).
pub const SHIMMER_PERIOD: f64 = std::f64::consts::PI;

/// Shader time for a frame: `frame_count * time_per_frame` in f64, wrapped to
/// one shimmer period.
pub fn shimmer_time(frame_count: u64, time_per_frame: f32) -> f32 {
    (frame_count as f64 * time_per_frame as f64).rem_euclid(SHIMMER_PERIOD) as f32
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceEdgeShader;

impl ReferenceEdgeShader {
    fn shade_pixel(source: &Image, x: u32, y: u32, u: &EdgeUniforms) -> Vec4 {
        let base = Vec2::new(x as f32, y as f32);
        let mut premul = Vec3::ZERO;
        let mut alpha = 0.0;
        let mut taps = 0.0;
        let mut tap = |offset: Vec2| {
            let p = (base + offset).round();
            let c = source.fetch_clamped(p.x as i64, p.y as i64);
            premul += c.truncate() * c.w;
            alpha += c.w;
            taps += 1.0;
        };
        tap(Vec2::ZERO);
        for radius in [u.blur_amount * 0.5, u.blur_amount] {
            for d in RING {
                tap(Vec2::from(d) * radius);
            }
        }
        let blurred = alpha / taps;
        if blurred <= 0.0 {
            return Vec4::ZERO;
        }
        let rgb = premul / alpha;
        let edge = smoothstep(0.0, u.edge_width, blurred).max(source.get(x, y).w);
        // Shimmer is strongest in the band and vanishes in the solid interior
        let band = 1.0 - edge;
        let uv = base / Vec2::from(u.resolution).max(Vec2::ONE);
        let wave = (u.time * 2.0 + (uv.x + uv.y) * 12.0).sin();
        let rgb = (rgb + Vec3::splat(wave * SHIMMER_AMPLITUDE * band)).clamp(Vec3::ZERO, Vec3::ONE);
        rgb.extend(edge)
    }
}

impl EdgeShader for ReferenceEdgeShader {
    fn shade(&self, source: &Image, uniforms: &EdgeUniforms) -> Image {
        let mut out = Image::new(source.width(), source.height());
        for y in 0..source.height() {
            for x in 0..source.width() {
                out.set(x, y, Self::shade_pixel(source, x, y, uniforms));
            }
        }
        out
    }
}
