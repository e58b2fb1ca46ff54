//! Boundary to the rendering layer.
//!
//! The controller only ever writes through [`RenderSink`]; it never reads
//! anything back.

use crate::camera::Camera;
use crate::particles::ParticleAttrib;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Particles,
    Stars,
}

/// Well-known uniform names.
pub mod uniform {
    pub const TIME: &str = "time";
    pub const PIXEL_RATIO: &str = "pixel_ratio";
    pub const GLOW: &str = "glow";
    pub const SIZE: &str = "size";
}

/// Named scalar uniforms for one material.
#[derive(Clone, Debug, Default)]
pub struct Uniforms {
    values: FnvHashMap<&'static str, f32>,
}

impl Uniforms {
    pub fn set(&mut self, name: &'static str, value: f32) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Value or zero; shaders treat a missing uniform as unset.
    pub fn get_or_zero(&self, name: &str) -> f32 {
        self.get(name).unwrap_or(0.0)
    }
}

/// Data uploaded once per layer when the scene is attached.
#[derive(Clone, Copy, Debug)]
pub struct LayerAttributes<'a> {
    pub positions: &'a [Vec3],
    pub attributes: &'a [ParticleAttrib],
}

pub trait RenderSink {
    fn upload_static(&mut self, layer: Layer, data: LayerAttributes<'_>);
    fn upload_positions(&mut self, layer: Layer, positions: &[Vec3]);
    fn set_uniforms(&mut self, layer: Layer, uniforms: &Uniforms);
    fn set_transform(&mut self, layer: Layer, model: Mat4);
    fn set_camera(&mut self, camera: &Camera);
    fn render(&mut self);
}

/// Sink that discards everything, for headless stepping.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn upload_static(&mut self, _layer: Layer, _data: LayerAttributes<'_>) {}
    fn upload_positions(&mut self, _layer: Layer, _positions: &[Vec3]) {}
    fn set_uniforms(&mut self, _layer: Layer, _uniforms: &Uniforms) {}
    fn set_transform(&mut self, _layer: Layer, _model: Mat4) {}
    fn set_camera(&mut self, _camera: &Camera) {}
    fn render(&mut self) {}
}
