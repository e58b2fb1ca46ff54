use crate::config::StarConfig;
use crate::particles::ParticleAttrib;
use crate::targets::sample_shell;
use glam::{Mat4, Vec3};
use rand::Rng;

/// Static background shell of twinkling points.
#[derive(Clone, Debug)]
pub struct StarField {
    positions: Vec<Vec3>,
    attributes: Vec<ParticleAttrib>,
    spin_rate: f32,
}

impl StarField {
    pub fn generate<R: Rng + ?Sized>(config: &StarConfig, rng: &mut R) -> Self {
        let positions = (0..config.count)
            .map(|_| sample_shell(rng, config.inner_radius, config.outer_radius))
            .collect();
        let attributes = (0..config.count)
            .map(|_| ParticleAttrib {
                random: rng.gen(),
                phase: rng.gen(),
            })
            .collect();
        Self {
            positions,
            attributes,
            spin_rate: config.spin_rate,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn attributes(&self) -> &[ParticleAttrib] {
        &self.attributes
    }

    /// The whole shell turns slowly about Y.
    pub fn transform_at(&self, t: f32) -> Mat4 {
        Mat4::from_rotation_y(t * self.spin_rate)
    }
}
