//! Minimal RGBA float images for host-side rendering and shader checks.
//!
//! Colours are straight (non-premultiplied) RGBA in 0..1, row-major, origin at
//! the top-left like a canvas.

use crate::curve::BlobPath;
use glam::{Vec2, Vec4};

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl Image {
    /// Fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec4::ZERO; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Vec4 {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, c: Vec4) {
        let i = self.index(x, y);
        self.pixels[i] = c;
    }

    /// Clamp-to-edge fetch at integer offsets from `(x, y)`.
    pub fn fetch_clamped(&self, x: i64, y: i64) -> Vec4 {
        if self.width == 0 || self.height == 0 {
            return Vec4::ZERO;
        }
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(cx, cy)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Vec4::ZERO);
    }

    /// Paint each row with one colour; extra rows are ignored.
    pub fn fill_rows(&mut self, rows: &[Vec4]) {
        for (y, c) in rows.iter().enumerate().take(self.height as usize) {
            let start = y * self.width as usize;
            self.pixels[start..start + self.width as usize].fill(*c);
        }
    }

    /// Paint `rows` clipped to `path`, testing pixel centres.
    pub fn fill_path_rows(&mut self, path: &BlobPath, rows: &[Vec4]) {
        for y in 0..self.height.min(rows.len() as u32) {
            let c = rows[y as usize];
            for x in 0..self.width {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if path.contains_point(center.x, center.y) {
                    self.set(x, y, c);
                }
            }
        }
    }

    /// Source-over `top` onto `self`, pixel by pixel. Sizes must match.
    pub fn blend_over(&mut self, top: &Image) {
        debug_assert_eq!((self.width, self.height), (top.width, top.height));
        for (dst, src) in self.pixels.iter_mut().zip(top.pixels.iter()) {
            *dst = over(*src, *dst);
        }
    }
}

/// Porter-Duff source-over on straight alpha.
pub fn over(src: Vec4, dst: Vec4) -> Vec4 {
    let a = src.w + dst.w * (1.0 - src.w);
    if a <= 0.0 {
        return Vec4::ZERO;
    }
    let rgb = (src.truncate() * src.w + dst.truncate() * dst.w * (1.0 - src.w)) / a;
    rgb.extend(a)
}
