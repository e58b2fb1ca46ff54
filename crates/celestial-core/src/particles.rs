use crate::config::SceneConfig;
use crate::constants::{INTRO_WAVE_AMPLITUDE, INTRO_WAVE_HALF_PERIODS};
use crate::intro::ease_in_out_cubic;
use crate::targets::{
    generate_intro_origins, generate_scatter_targets, generate_shape_targets, IntroOrigin,
};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Static per-particle shader attributes, uploaded once.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleAttrib {
    /// Size/brightness variation in [0, 1).
    pub random: f32,
    /// Twinkle phase in [0, 1).
    pub phase: f32,
}

/// Fixed-size particle buffers. A particle's identity is its index.
///
/// Live positions are rewritten every frame; the converged and dispersed
/// targets never change after construction.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    converged: Vec<Vec3>,
    dispersed: Vec<Vec3>,
    attributes: Vec<ParticleAttrib>,
    intro: Vec<IntroOrigin>,
}

impl ParticleSet {
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let count = config.particle_count;
        let surface = config.shape.surface();
        let converged = generate_shape_targets(surface.as_ref(), count, rng);
        let dispersed =
            generate_scatter_targets(count, config.scatter_radius, config.scatter_band, rng);
        let attributes = (0..count)
            .map(|_| ParticleAttrib {
                random: rng.gen(),
                phase: rng.gen(),
            })
            .collect();
        let (positions, intro) = if config.intro.is_some() {
            let intro = generate_intro_origins(count, rng);
            (intro.iter().map(|o| o.position).collect(), intro)
        } else {
            (converged.clone(), Vec::new())
        };
        Self {
            positions,
            converged,
            dispersed,
            attributes,
            intro,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn converged(&self) -> &[Vec3] {
        &self.converged
    }

    pub fn dispersed(&self) -> &[Vec3] {
        &self.dispersed
    }

    pub fn attributes(&self) -> &[ParticleAttrib] {
        &self.attributes
    }

    /// Where particle `i` rests for a given blend value.
    #[inline]
    pub fn blended_target(&self, i: usize, blend: f32) -> Vec3 {
        self.converged[i].lerp(self.dispersed[i], blend)
    }

    /// Move every live position `follow` of the remaining distance toward
    /// its blended target.
    pub fn step(&mut self, blend: f32, follow: f32) {
        for ((pos, c), d) in self
            .positions
            .iter_mut()
            .zip(&self.converged)
            .zip(&self.dispersed)
        {
            let target = c.lerp(*d, blend);
            *pos += (target - *pos) * follow;
        }
    }

    /// Place every particle along its fly-in path for intro `progress`.
    ///
    /// No-op when the scene was built without an intro.
    pub fn place_intro(&mut self, progress: f32, blend: f32) {
        for i in 0..self.intro.len() {
            let origin = self.intro[i];
            let local = ((progress - origin.delay) * origin.speed).clamp(0.0, 1.0);
            let eased = ease_in_out_cubic(local);
            let wave = (eased * PI * INTRO_WAVE_HALF_PERIODS).sin()
                * INTRO_WAVE_AMPLITUDE
                * (1.0 - eased)
                * origin.side;
            let mut p = origin.position.lerp(self.blended_target(i, blend), eased);
            p.x += wave;
            self.positions[i] = p;
        }
    }
}
