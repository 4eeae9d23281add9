//! Per-frame rendering seam.
//!
//! [`crate::Sketch::render_frame`] drives a [`FrameSink`] through a fixed
//! sequence: `begin_frame` (clear) → `paint_background` → `paint_below_text`
//! → `paint_blob` → `composite`. The shape is stepped between the text and
//! blob stages. The web front-end implements the sink with Canvas2D layers and
//! a WebGPU composite; [`SoftwareSink`] does the same on the host.

use crate::config::TextStyle;
use crate::curve::BlobPath;
use crate::labels::Labels;
use crate::raster::Image;
use crate::shading::{EdgeShader, EdgeUniforms};
use crate::surface::SurfaceSize;
use glam::{Vec2, Vec4};
use std::convert::Infallible;

pub trait FrameSink {
    type Error;

    /// Clear every intermediate layer; `size` is the current surface size.
    fn begin_frame(&mut self, size: SurfaceSize);

    /// Full-frame background, one colour per row.
    fn paint_background(&mut self, rows: &[Vec4]);

    /// Redraw every embedded label.
    ///
    /// The layer was cleared in `begin_frame`, so implementations must apply
    /// `style` (font, size, centred alignment, fill) on every call instead of
    /// relying on state left over from the previous frame.
    fn paint_below_text(&mut self, labels: &Labels, style: &TextStyle);

    /// Blob fill: `rows` clipped to `path` on an otherwise transparent layer.
    fn paint_blob(&mut self, path: &BlobPath, rows: &[Vec4]);

    /// Edge-shade the blob layer and composite background, text and blob.
    fn composite(&mut self, uniforms: &EdgeUniforms) -> Result<(), Self::Error>;
}

/// Host renderer built on [`Image`] and any [`EdgeShader`].
///
/// Glyphs are not rasterised; embedded labels are recorded as text anchors
/// so callers can still inspect what would be drawn.
pub struct SoftwareSink<S: EdgeShader> {
    shader: S,
    background: Image,
    below: Image,
    blob: Image,
    output: Image,
    text_anchors: Vec<(String, Vec2)>,
    text_font: Option<String>,
}

impl<S: EdgeShader> SoftwareSink<S> {
    pub fn new(shader: S, size: SurfaceSize) -> Self {
        Self {
            shader,
            background: Image::new(size.width, size.height),
            below: Image::new(size.width, size.height),
            blob: Image::new(size.width, size.height),
            output: Image::new(size.width, size.height),
            text_anchors: Vec::new(),
            text_font: None,
        }
    }

    #[inline]
    pub fn output(&self) -> &Image {
        &self.output
    }

    #[inline]
    pub fn blob_layer(&self) -> &Image {
        &self.blob
    }

    #[inline]
    pub fn text_anchors(&self) -> &[(String, Vec2)] {
        &self.text_anchors
    }

    #[inline]
    pub fn text_font(&self) -> Option<&str> {
        self.text_font.as_deref()
    }

    pub fn shader(&self) -> &S {
        &self.shader
    }
}

impl<S: EdgeShader> FrameSink for SoftwareSink<S> {
    type Error = Infallible;

    fn begin_frame(&mut self, size: SurfaceSize) {
        if (self.blob.width(), self.blob.height()) != (size.width, size.height) {
            self.background = Image::new(size.width, size.height);
            self.below = Image::new(size.width, size.height);
            self.blob = Image::new(size.width, size.height);
            self.output = Image::new(size.width, size.height);
        }
        self.background.clear();
        self.below.clear();
        self.blob.clear();
        self.text_anchors.clear();
        self.text_font = None;
    }

    fn paint_background(&mut self, rows: &[Vec4]) {
        self.background.fill_rows(rows);
    }

    fn paint_below_text(&mut self, labels: &Labels, style: &TextStyle) {
        self.text_font = Some(style.css_font());
        self.text_anchors
            .extend(labels.embedded().map(|l| (l.word.clone(), l.position)));
    }

    fn paint_blob(&mut self, path: &BlobPath, rows: &[Vec4]) {
        self.blob.fill_path_rows(path, rows);
    }

    fn composite(&mut self, uniforms: &EdgeUniforms) -> Result<(), Self::Error> {
        let shaded = self.shader.shade(&self.blob, uniforms);
        let mut out = self.background.clone();
        out.blend_over(&self.below);
        out.blend_over(&shaded);
        self.output = out;
        Ok(())
    }
}
