use crate::layers::Layers;
use crate::render::{GpuState, LayerSlot};
use blob_core::labels::Labels;
use blob_core::{BlobPath, EdgeUniforms, FrameSink, Sketch, SurfaceSize, TextStyle};
use glam::Vec4;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D layers feeding the WebGPU edge/composite pass.
pub struct WebSink<'a> {
    layers: &'a Layers,
    gpu: &'a mut GpuState,
}

impl FrameSink for WebSink<'_> {
    type Error = anyhow::Error;

    fn begin_frame(&mut self, _size: SurfaceSize) {
        self.layers.clear();
    }

    fn paint_background(&mut self, rows: &[Vec4]) {
        self.layers.paint_background(rows);
    }

    fn paint_below_text(&mut self, labels: &Labels, style: &TextStyle) {
        self.layers.paint_below_text(labels, style);
    }

    fn paint_blob(&mut self, path: &BlobPath, rows: &[Vec4]) {
        self.layers.paint_blob(path, rows);
    }

    fn composite(&mut self, uniforms: &EdgeUniforms) -> Result<(), Self::Error> {
        self.gpu
            .upload_layer(LayerSlot::Background, &self.layers.background.read_pixels()?);
        self.gpu
            .upload_layer(LayerSlot::Below, &self.layers.below.read_pixels()?);
        self.gpu
            .upload_layer(LayerSlot::Blob, &self.layers.blob.read_pixels()?);
        self.gpu
            .render(uniforms)
            .map_err(|e| anyhow::anyhow!("surface error: {:?}", e))
    }
}

pub struct FrameContext {
    pub sketch: Rc<RefCell<Sketch>>,
    pub layers: Layers,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.apply_resize();
        let mut sink = WebSink {
            layers: &self.layers,
            gpu: &mut self.gpu,
        };
        if let Err(e) = self.sketch.borrow_mut().render_frame(&mut sink) {
            log::error!("render error: {:?}", e);
        }
    }

    // The backing size is kept in sync by the window resize listener;
    // everything sized from it catches up here, before any painting.
    fn apply_resize(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let current = self.sketch.borrow().size();
        if (w, h) == (current.width, current.height) {
            return;
        }
        if let Err(e) = self.sketch.borrow_mut().resize(w, h) {
            log::warn!("[resize] ignored: {}", e);
            return;
        }
        let size = self.sketch.borrow().size();
        self.layers.resize(size);
        self.gpu.resize_if_needed(w, h);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
