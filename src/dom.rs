use crate::constants::{CANVAS_ID, SCENE_ATTR};
use crate::input;
use celestial_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn scene_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn scene_attr(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(SCENE_ATTR)
}

/// Window size in CSS pixels plus the raw device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

pub fn detect_mobile(window: &web::Window) -> bool {
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    input::is_mobile(&ua, navigator.max_touch_points(), width)
}

/// Match the canvas backing store to its CSS size at `pixel_ratio`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f32) {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = input::backing_size(rect.width(), rect.height(), pixel_ratio);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
}
