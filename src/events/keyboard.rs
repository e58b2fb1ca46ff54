use super::SharedScene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Space/KeyD toggle, KeyR auto-rotate, arrows nudge the orbit.
pub fn wire_global_keydown(scene: SharedScene) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let code = ev.code();
        if scene.borrow_mut().key_down(&code) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
