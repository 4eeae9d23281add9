use crate::constants::LABEL_COLOR;
use blob_core::labels::Labels;
use blob_core::palette::css_rgb;
use blob_core::{BlobPath, SurfaceSize, TextStyle};
use glam::Vec4;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One offscreen Canvas2D surface. Never attached to the document.
pub struct Layer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Layer {
    pub fn new(document: &web::Document, size: SurfaceSize) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(size.width);
        canvas.set_height(size.height);

        // Pixels are read back every frame
        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("willReadFrequently"),
            &JsValue::TRUE,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn ctx(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn resize(&self, size: SurfaceSize) {
        // Setting either dimension also resets the context state
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn read_pixels(&self) -> anyhow::Result<Vec<u8>> {
        let data = self
            .ctx
            .get_image_data(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(data.data().0)
    }

    fn fill_rows(&self, rows: &[Vec4]) {
        let width = self.canvas.width() as f64;
        for (y, colour) in rows.iter().enumerate() {
            self.ctx.set_fill_style_str(&css_rgb(*colour));
            self.ctx.fill_rect(0.0, y as f64, width, 1.0);
        }
    }
}

/// Background, below-blob text and blob fill, in compositing order.
pub struct Layers {
    pub background: Layer,
    pub below: Layer,
    pub blob: Layer,
}

impl Layers {
    pub fn new(document: &web::Document, size: SurfaceSize) -> anyhow::Result<Self> {
        Ok(Self {
            background: Layer::new(document, size)?,
            below: Layer::new(document, size)?,
            blob: Layer::new(document, size)?,
        })
    }

    pub fn resize(&self, size: SurfaceSize) {
        self.background.resize(size);
        self.below.resize(size);
        self.blob.resize(size);
    }

    pub fn clear(&self) {
        self.background.clear();
        self.below.clear();
        self.blob.clear();
    }

    pub fn paint_background(&self, rows: &[Vec4]) {
        self.background.fill_rows(rows);
    }

    pub fn paint_below_text(&self, labels: &Labels, style: &TextStyle) {
        let ctx = self.below.ctx();
        ctx.set_font(&style.css_font());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(LABEL_COLOR);
        for label in labels.embedded() {
            _ = ctx.fill_text(
                &label.word,
                label.position.x as f64,
                label.position.y as f64,
            );
        }
    }

    pub fn paint_blob(&self, path: &BlobPath, rows: &[Vec4]) {
        let ctx = self.blob.ctx();
        ctx.save();
        ctx.begin_path();
        let start = path.start();
        ctx.move_to(start.x as f64, start.y as f64);
        for seg in path.segments() {
            ctx.bezier_curve_to(
                seg.ctrl1.x as f64,
                seg.ctrl1.y as f64,
                seg.ctrl2.x as f64,
                seg.ctrl2.y as f64,
                seg.end.x as f64,
                seg.end.y as f64,
            );
        }
        ctx.close_path();
        ctx.clip();
        self.blob.fill_rows(rows);
        ctx.restore();
    }
}
