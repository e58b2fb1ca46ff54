use crate::constants::{HINT_PULSE_CLASS, HINT_SELECTOR};
use crate::input;
use celestial_core::{BlendTarget, SceneEvent, SceneHooks};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scene hooks that keep the page's `.hint` line in sync.
///
/// Pages without a hint element are fine; every lookup is optional.
pub struct DomHooks {
    document: web::Document,
}

impl DomHooks {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn hint(&self) -> Option<web::Element> {
        self.document.query_selector(HINT_SELECTOR).ok().flatten()
    }

    fn show_target(&self, target: BlendTarget) {
        let Some(el) = self.hint() else {
            return;
        };
        el.set_text_content(Some(input::hint_text(target)));
        let cl = el.class_list();
        _ = cl.remove_1(HINT_PULSE_CLASS);
        // Force a style flush so re-adding the class restarts the animation.
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let _ = html.offset_width();
        }
        _ = cl.add_1(HINT_PULSE_CLASS);
    }

    fn end_pulse(&self) {
        if let Some(el) = self.hint() {
            _ = el.class_list().remove_1(HINT_PULSE_CLASS);
        }
    }
}

impl SceneHooks for DomHooks {
    fn notify(&mut self, event: &SceneEvent) {
        match *event {
            SceneEvent::Toggled(target) => self.show_target(target),
            SceneEvent::HintPulse(false) => self.end_pulse(),
            SceneEvent::PhaseChanged(phase) => log::info!("[scene] phase {:?}", phase),
            SceneEvent::AutoRotate(enabled) => log::info!("[keys] auto-rotate {}", enabled),
            SceneEvent::HintPulse(true) | SceneEvent::OrbitChanged { .. } => {}
        }
    }
}
