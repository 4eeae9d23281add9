use crate::constants::{
    CANVAS_ID, CANVAS_STYLE, MOBILE_NOTICE_ID, MOBILE_NOTICE_STYLE, WORD_CONTAINER_ID,
    WORD_CONTAINER_STYLE,
};
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))
}

/// Find `#app-canvas`, creating a full-window one if the page has none.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas.set_attribute("style", CANVAS_STYLE).map_err(js_err)?;
    body(document)?.append_child(&canvas).map_err(js_err)?;
    Ok(canvas)
}

/// Full-window container that holds the overlay words.
pub fn ensure_word_container(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(WORD_CONTAINER_ID) {
        return Ok(el);
    }
    let container = document.create_element("div").map_err(js_err)?;
    container.set_id(WORD_CONTAINER_ID);
    container
        .set_attribute("style", WORD_CONTAINER_STYLE)
        .map_err(js_err)?;
    body(document)?.append_child(&container).map_err(js_err)?;
    Ok(container)
}

pub fn show_mobile_notice(document: &web::Document, html: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(MOBILE_NOTICE_ID).is_some() {
        return Ok(());
    }
    let notice = document.create_element("div").map_err(js_err)?;
    notice.set_id(MOBILE_NOTICE_ID);
    notice
        .set_attribute("style", MOBILE_NOTICE_STYLE)
        .map_err(js_err)?;
    notice.set_inner_html(html);
    body(document)?.append_child(&notice).map_err(js_err)?;
    Ok(())
}

pub fn user_agent() -> Option<String> {
    web::window().and_then(|w| w.navigator().user_agent().ok())
}

/// Window inner size in CSS pixels, at least 1x1.
pub fn window_size() -> (u32, u32) {
    let Some(w) = web::window() else {
        return (1, 1);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Match the canvas backing store to the window so canvas pixels and pointer
/// CSS pixels share one coordinate space.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let (w, h) = window_size();
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
}
