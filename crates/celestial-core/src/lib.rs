//! Particle scene controller for the celestial pages.
//!
//! Platform-free: the web front end feeds input events and host time in,
//! and receives positions, uniforms and camera updates through
//! [`render::RenderSink`].

pub mod blend;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod glow;
pub mod hooks;
pub mod intro;
pub mod keys;
pub mod orbit;
pub mod particles;
pub mod pulse;
pub mod render;
pub mod shape;
pub mod stars;
pub mod targets;

pub use blend::{BlendState, BlendTarget};
pub use camera::{Camera, Viewport};
pub use config::*;
pub use controller::SceneController;
pub use error::ConfigError;
pub use gesture::{GestureMove, GestureOutcome, GestureTracker, PointerInput, PointerKind};
pub use hooks::{NoHooks, SceneEvent, SceneHooks};
pub use intro::ScenePhase;
pub use particles::{ParticleAttrib, ParticleSet};
pub use render::{uniform, Layer, LayerAttributes, NullSink, RenderSink, Uniforms};
pub use shape::ShapeKind;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
