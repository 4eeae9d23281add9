use crate::input;
use crate::overlay::OverlayLabels;
use blob_core::{LabelLayer, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sketch: Rc<RefCell<Sketch>>,
    pub overlay: Rc<RefCell<OverlayLabels>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut sketch = w.sketch.borrow_mut();
        let outcome = sketch.pointer_down(pos.x, pos.y);
        if let Some(label) = sketch.labels().get(outcome.label) {
            log::info!(
                "[press] ({:.0},{:.0}) inside={} word={:?}",
                pos.x,
                pos.y,
                outcome.inside,
                label.word
            );
            if label.layer == LabelLayer::Overlay {
                let mut overlay = w.overlay.borrow_mut();
                match overlay.place(label) {
                    Ok(()) => log::debug!("[press] overlay nodes={}", overlay.len()),
                    Err(e) => log::error!("overlay label error: {:?}", e),
                }
            }
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut sketch = w.sketch.borrow_mut();
        if let Some(label) = sketch.pointer_move(pos.x, pos.y) {
            // Embedded labels are picked up by the next frame's text pass
            if label.layer == LabelLayer::Overlay {
                w.overlay.borrow().move_to(label);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut sketch = w.sketch.borrow_mut();
        if sketch.drag().is_active() {
            log::debug!("[drag] released");
        }
        sketch.pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
