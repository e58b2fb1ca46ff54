//! Per-scene state and the per-frame update.
//!
//! One `SceneController` owns everything a page's scene needs. The host
//! forwards input events and calls [`SceneController::frame`] once per
//! display refresh; everything runs on that single thread.

use crate::blend::{BlendState, BlendTarget};
use crate::camera::{Camera, Viewport};
use crate::config::SceneConfig;
use crate::constants::{MAX_FRAME_DT, PARTICLE_FOLLOW};
use crate::error::ConfigError;
use crate::gesture::{
    parallax_from_pointer, GestureMove, GestureOutcome, GestureTracker, PointerInput, PointerKind,
};
use crate::glow::InteractionGlow;
use crate::hooks::{NoHooks, SceneEvent, SceneHooks};
use crate::intro::{HintPulse, IntroTimeline, ScenePhase};
use crate::keys::{key_action, KeyAction};
use crate::orbit::OrbitState;
use crate::particles::ParticleSet;
use crate::pulse;
use crate::render::{uniform, Layer, LayerAttributes, RenderSink, Uniforms};
use crate::stars::StarField;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

pub struct SceneController<H: SceneHooks = NoHooks> {
    config: SceneConfig,
    particles: ParticleSet,
    stars: StarField,
    blend: BlendState,
    orbit: OrbitState,
    gesture: GestureTracker,
    glow: InteractionGlow,
    intro: IntroTimeline,
    hint: HintPulse,
    camera: Camera,
    viewport: Viewport,
    parallax: Vec2,
    pixel_ratio: f32,
    last_elapsed: Option<f64>,
    scale: f32,
    particle_uniforms: Uniforms,
    star_uniforms: Uniforms,
    pending: SmallVec<[SceneEvent; 4]>,
    hooks: H,
}

impl SceneController<NoHooks> {
    pub fn headless(config: SceneConfig) -> Result<Self, ConfigError> {
        Self::new(config, NoHooks)
    }
}

impl<H: SceneHooks> SceneController<H> {
    pub fn new(config: SceneConfig, hooks: H) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[scene] rejected config: {}", e);
            return Err(e);
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleSet::generate(&config, &mut rng);
        let stars = StarField::generate(&config.stars, &mut rng);
        let orbit = OrbitState::new(config.auto_rotate_speed, &config.camera);
        let viewport = Viewport::default();
        let camera = Camera {
            eye: orbit.eye(&config.camera, Vec2::ZERO),
            target: config.camera.look_at,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: config.camera.fov_deg.to_radians(),
            znear: config.camera.znear,
            zfar: config.camera.zfar,
        };
        let intro = IntroTimeline::new(config.intro.as_ref());
        let pixel_ratio = viewport.pixel_ratio(config.max_pixel_ratio);

        let mut particle_uniforms = Uniforms::default();
        particle_uniforms.set(uniform::SIZE, config.point_size);
        let mut star_uniforms = Uniforms::default();
        star_uniforms.set(uniform::SIZE, config.stars.size);

        log::info!(
            "[scene] {:?}: particles={} stars={} intro={}",
            config.shape,
            particles.len(),
            stars.positions().len(),
            config.intro.is_some()
        );

        let mut controller = Self {
            config,
            particles,
            stars,
            blend: BlendState::default(),
            orbit,
            gesture: GestureTracker::default(),
            glow: InteractionGlow::default(),
            intro,
            hint: HintPulse::default(),
            camera,
            viewport,
            parallax: Vec2::ZERO,
            pixel_ratio,
            last_elapsed: None,
            scale: 1.0,
            particle_uniforms,
            star_uniforms,
            pending: SmallVec::new(),
            hooks,
        };
        controller.write_uniforms(0.0);
        Ok(controller)
    }

    /// Upload the per-particle data that never changes.
    pub fn prime<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.upload_static(
            Layer::Particles,
            LayerAttributes {
                positions: self.particles.positions(),
                attributes: self.particles.attributes(),
            },
        );
        sink.upload_static(
            Layer::Stars,
            LayerAttributes {
                positions: self.stars.positions(),
                attributes: self.stars.attributes(),
            },
        );
    }

    /// Advance the scene to host time `elapsed_sec` and push the result to
    /// `sink`.
    pub fn frame<S: RenderSink + ?Sized>(&mut self, elapsed_sec: f64, sink: &mut S) {
        let dt = match self.last_elapsed {
            Some(prev) => ((elapsed_sec - prev) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_elapsed = Some(elapsed_sec);
        let t = elapsed_sec as f32;

        if let Some(phase) = self.intro.advance(dt) {
            log::debug!("[scene] intro finished");
            self.pending.push(SceneEvent::PhaseChanged(phase));
        }

        self.blend
            .step(dt, self.config.converge_speed, self.config.disperse_speed);
        match self.intro.phase() {
            ScenePhase::FlyIn { progress } => {
                self.particles.place_intro(progress, self.blend.value())
            }
            ScenePhase::Settled => self.particles.step(self.blend.value(), PARTICLE_FOLLOW),
        }

        self.scale = pulse::scale_at(&self.config.pulse, t);
        self.glow.decay();
        if self.hint.advance(dt) {
            self.pending.push(SceneEvent::HintPulse(false));
        }

        self.orbit.step(dt, self.gesture.is_active());
        self.update_camera();
        self.write_uniforms(t);

        sink.upload_positions(Layer::Particles, self.particles.positions());
        sink.set_transform(Layer::Particles, self.particle_transform());
        sink.set_transform(Layer::Stars, self.stars.transform_at(t));
        sink.set_uniforms(Layer::Particles, &self.particle_uniforms);
        sink.set_uniforms(Layer::Stars, &self.star_uniforms);
        sink.set_camera(&self.camera);
        sink.render();

        self.flush();
    }

    pub fn pointer_down(&mut self, input: PointerInput) {
        self.orbit.stop();
        self.gesture.press(input.pointer_id, input.position, input.time_ms);
        self.glow.touch();
        self.flush();
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        if input.kind == PointerKind::Mouse && !self.gesture.is_active() {
            self.parallax =
                parallax_from_pointer(input.position, self.viewport.width, self.viewport.height);
        }
        match self.gesture.moved(input.pointer_id, input.position) {
            Some(GestureMove::Drag(delta)) => {
                self.orbit.drag(delta.x, delta.y);
                self.glow.bump(delta.length());
                self.pending.push(SceneEvent::OrbitChanged {
                    angle: self.orbit.angle,
                    tilt: self.orbit.tilt,
                });
            }
            Some(GestureMove::Pinch(factor)) => self.orbit.zoom_by(factor),
            None => {}
        }
        self.flush();
    }

    pub fn pointer_up(&mut self, input: PointerInput) {
        let outcome = self.gesture.release(input.pointer_id, input.time_ms);
        self.end_gesture(outcome);
    }

    pub fn pointer_cancel(&mut self, input: PointerInput) {
        let outcome = self.gesture.cancel(input.pointer_id, input.time_ms);
        self.end_gesture(outcome);
    }

    fn end_gesture(&mut self, outcome: Option<GestureOutcome>) {
        if let Some(GestureOutcome::Tap) = outcome {
            self.toggle();
            // A tap must not leave any drift behind.
            self.orbit.stop();
        }
        self.flush();
    }

    /// Handle a `KeyboardEvent.code`. Returns whether the key was used so the
    /// host can suppress its default action.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(action) = key_action(code) else {
            return false;
        };
        match action {
            KeyAction::Toggle => self.toggle(),
            KeyAction::Nudge { d_angle, d_tilt } => {
                self.orbit.impulse(d_angle, d_tilt);
                self.pending.push(SceneEvent::OrbitChanged {
                    angle: self.orbit.angle,
                    tilt: self.orbit.tilt,
                });
            }
            KeyAction::ToggleAutoRotate => {
                let enabled = self.orbit.toggle_auto_rotate();
                log::debug!("[keys] auto-rotate {}", enabled);
                self.pending.push(SceneEvent::AutoRotate(enabled));
            }
        }
        self.flush();
        true
    }

    /// Wheel zoom; positive deltas move the camera away.
    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        let before = self.orbit.radius;
        self.orbit.zoom(delta_y);
        let (lo, hi) = (self.config.camera.zoom_min, self.config.camera.zoom_max);
        if self.orbit.radius != before && (self.orbit.radius == lo || self.orbit.radius == hi) {
            log::debug!("[orbit] zoom clamped at {}", self.orbit.radius);
        }
    }

    /// Flip between assembled and scattered.
    pub fn toggle(&mut self) {
        let target = self.blend.toggle();
        self.glow.pulse();
        self.hint.restart();
        log::debug!("[scene] blend target -> {:?}", target);
        self.pending.push(SceneEvent::Toggled(target));
        self.pending.push(SceneEvent::HintPulse(true));
        self.flush();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.pixel_ratio = viewport.pixel_ratio(self.config.max_pixel_ratio);
        self.particle_uniforms
            .set(uniform::PIXEL_RATIO, self.pixel_ratio);
        self.star_uniforms.set(uniform::PIXEL_RATIO, self.pixel_ratio);
    }

    fn update_camera(&mut self) {
        self.camera.eye = self.orbit.eye(&self.config.camera, self.parallax);
        self.camera.target = self.config.camera.look_at;
    }

    fn particle_transform(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
    }

    fn write_uniforms(&mut self, t: f32) {
        let pu = &mut self.particle_uniforms;
        pu.set(uniform::TIME, t);
        pu.set(uniform::GLOW, self.glow.level());
        pu.set(uniform::PIXEL_RATIO, self.pixel_ratio);
        let su = &mut self.star_uniforms;
        su.set(uniform::TIME, t);
        su.set(uniform::PIXEL_RATIO, self.pixel_ratio);
    }

    fn flush(&mut self) {
        for event in self.pending.drain(..) {
            self.hooks.notify(&event);
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn blend(&self) -> &BlendState {
        &self.blend
    }

    pub fn blend_target(&self) -> BlendTarget {
        self.blend.target()
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn glow(&self) -> f32 {
        self.glow.level()
    }

    pub fn phase(&self) -> ScenePhase {
        self.intro.phase()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn parallax(&self) -> Vec2 {
        self.parallax
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn uniforms(&self, layer: Layer) -> &Uniforms {
        match layer {
            Layer::Particles => &self.particle_uniforms,
            Layer::Stars => &self.star_uniforms,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }
}
