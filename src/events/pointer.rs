use super::SharedScene;
use crate::input;
use celestial_core::{PointerInput, PointerKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: SharedScene,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
    wire_wheel(&w);
}

/// Pointer position in CSS pixels relative to the viewport, tagged with
/// the DOM pointer id so each finger is tracked on its own.
#[inline]
fn pointer_input(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::new(
        ev.client_x() as f32,
        ev.client_y() as f32,
        PointerKind::from_dom(&ev.pointer_type()),
        ev.time_stamp(),
    )
    .with_pointer_id(ev.pointer_id())
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() > 0 {
            return;
        }
        w.scene.borrow_mut().pointer_down(pointer_input(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene.borrow_mut().pointer_move(pointer_input(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event: &'static str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let input = pointer_input(&ev);
        {
            let mut scene = w.scene.borrow_mut();
            if event == "pointercancel" {
                scene.pointer_cancel(input);
            } else {
                scene.pointer_up(input);
            }
        }
        if w.canvas.has_pointer_capture(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        w.scene.borrow_mut().wheel(delta);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so the page does not scroll under the canvas.
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
