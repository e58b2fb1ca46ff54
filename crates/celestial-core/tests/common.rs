// Shared test doubles for the integration tests.
#![allow(dead_code)]

use celestial_core::{
    Camera, Layer, LayerAttributes, RenderSink, SceneConfig, SceneEvent, SceneHooks, Uniforms,
};
use glam::{Mat4, Vec3};

#[derive(Default)]
pub struct RecordingSink {
    pub static_counts: Vec<(Layer, usize, usize)>,
    pub last_positions: Vec<Vec3>,
    pub particle_uniforms: Option<Uniforms>,
    pub star_uniforms: Option<Uniforms>,
    pub particle_model: Option<Mat4>,
    pub star_model: Option<Mat4>,
    pub camera: Option<Camera>,
    pub renders: usize,
}

impl RenderSink for RecordingSink {
    fn upload_static(&mut self, layer: Layer, data: LayerAttributes<'_>) {
        self.static_counts
            .push((layer, data.positions.len(), data.attributes.len()));
    }

    fn upload_positions(&mut self, layer: Layer, positions: &[Vec3]) {
        assert_eq!(layer, Layer::Particles);
        self.last_positions = positions.to_vec();
    }

    fn set_uniforms(&mut self, layer: Layer, uniforms: &Uniforms) {
        match layer {
            Layer::Particles => self.particle_uniforms = Some(uniforms.clone()),
            Layer::Stars => self.star_uniforms = Some(uniforms.clone()),
        }
    }

    fn set_transform(&mut self, layer: Layer, model: Mat4) {
        match layer {
            Layer::Particles => self.particle_model = Some(model),
            Layer::Stars => self.star_model = Some(model),
        }
    }

    fn set_camera(&mut self, camera: &Camera) {
        self.camera = Some(camera.clone());
    }

    fn render(&mut self) {
        self.renders += 1;
    }
}

#[derive(Default)]
pub struct RecordingHooks {
    pub events: Vec<SceneEvent>,
}

impl SceneHooks for RecordingHooks {
    fn notify(&mut self, event: &SceneEvent) {
        self.events.push(*event);
    }
}

impl RecordingHooks {
    pub fn toggles(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Toggled(_)))
            .count()
    }
}

/// Heart preset shrunk so tests stay fast.
pub fn small_heart() -> SceneConfig {
    let mut config = SceneConfig::heart();
    config.particle_count = 300;
    config.stars.count = 40;
    config
}

pub fn small_tree() -> SceneConfig {
    let mut config = SceneConfig::christmas();
    config.particle_count = 300;
    config.stars.count = 40;
    config
}

pub const FRAME: f64 = 1.0 / 60.0;
