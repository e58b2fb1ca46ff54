#![cfg(target_arch = "wasm32")]
use celestial_core::SceneController;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hint;
mod input;
mod render;

use events::SharedScene;
use input::ScenePreset;

fn wire_canvas_resize(scene: SharedScene, canvas: &web::HtmlCanvasElement) {
    frame::apply_resize(&scene, canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        frame::apply_resize(&scene, &canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("celestial-web starting");

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
    let canvas = dom::scene_canvas(&document)?;

    let preset = ScenePreset::from_attr(dom::scene_attr(&canvas).as_deref());
    let mobile = dom::detect_mobile(&window);
    let seed = input::seed_from_unit(js_sys::Math::random());
    let config = preset.config(mobile, seed);
    log::info!("[init] preset={:?} mobile={}", preset, mobile);

    let controller = SceneController::new(config, hint::DomHooks::new(document))?;
    let scene: SharedScene = Rc::new(RefCell::new(controller));

    // Size the canvas before the surface is configured from it.
    wire_canvas_resize(scene.clone(), &canvas);

    let mut gpu = {
        let config = scene.borrow().config().clone();
        frame::init_gpu(&canvas, &config, preset.bloom(mobile)).await
    };
    if let Some(g) = gpu.as_mut() {
        scene.borrow().prime(g);
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_global_keydown(scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
