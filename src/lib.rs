#![cfg(target_arch = "wasm32")]
use blob_core::device::{is_mobile_user_agent, MOBILE_NOTICE_HTML};
use blob_core::{Sketch, SketchConfig, SurfaceSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layers;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

async fn load_font(document: &web::Document, css_font: &str) -> anyhow::Result<()> {
    let promise = document
        .fonts()
        .load(css_font)
        .map_err(|e| anyhow::anyhow!("font load error: {:?}", e))?;
    let faces = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("font load rejected: {:?}", e))?;
    if js_sys::Array::from(&faces).length() == 0 {
        log::warn!("[sketch] no font face matched {:?}; using fallback", css_font);
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::ensure_canvas(&document)?;
    wire_canvas_resize(&canvas);
    let container = dom::ensure_word_container(&document)?;

    let mobile = dom::user_agent()
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or(false);
    if mobile {
        log::info!("[sketch] mobile user agent; pointer input disabled");
        dom::show_mobile_notice(&document, MOBILE_NOTICE_HTML)?;
    }

    let config = SketchConfig::default();
    config.validate()?;
    load_font(&document, &config.text_style.css_font()).await?;

    let size = SurfaceSize::new(canvas.width(), canvas.height())?;
    let text_style = config.text_style.clone();
    let sketch = Rc::new(RefCell::new(Sketch::new(config, size)?));
    log::info!("[sketch] {}x{}", size.width, size.height);

    let layers = layers::Layers::new(&document, size)?;
    let gpu = render::GpuState::new(&canvas).await?;
    let overlay = Rc::new(RefCell::new(overlay::OverlayLabels::new(
        document.clone(),
        container,
        text_style,
    )));

    if !mobile {
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            sketch: sketch.clone(),
            overlay,
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sketch,
        layers,
        gpu,
        canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
