use crate::constants::BloomSettings;
use crate::dom;
use crate::events::SharedScene;
use crate::render;
use celestial_core::{NullSink, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SharedScene,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        let mut scene = self.scene.borrow_mut();
        match &mut self.gpu {
            Some(g) => {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                scene.frame(elapsed, g);
            }
            // Without a GPU the scene still runs so the hint and hooks work.
            None => scene.frame(elapsed, &mut NullSink),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &SceneConfig,
    bloom: BloomSettings,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, config, bloom).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Keep the canvas backing store and the scene viewport in step with the
/// window.
pub fn apply_resize(scene: &SharedScene, canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = dom::viewport(&window);
    let mut scene = scene.borrow_mut();
    scene.resize(viewport);
    dom::sync_canvas_backing_size(canvas, scene.pixel_ratio());
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
