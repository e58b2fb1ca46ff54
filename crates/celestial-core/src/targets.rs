//! One-shot generation of per-particle target positions.
//!
//! Everything here runs once at scene construction; the results are
//! immutable for the lifetime of the scene.

use crate::constants::{SHAPE_FILL_EXPONENT, SHAPE_JITTER};
use crate::shape::Surface;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Converged targets: surface samples pulled toward the centroid by a
/// biased fraction so the interior fills in, plus a little per-axis noise.
pub fn generate_shape_targets<R: Rng + ?Sized>(
    surface: &dyn Surface,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    let centroid = surface.centroid();
    (0..count)
        .map(|_| {
            let u: f32 = rng.gen();
            let v: f32 = rng.gen();
            let fill = rng.gen::<f32>().powf(SHAPE_FILL_EXPONENT);
            let p = surface.point(u, v).lerp(centroid, 1.0 - fill);
            p + jitter(rng)
        })
        .collect()
}

/// Dispersed targets: uniform directions on the sphere with the radius drawn
/// from `band` (fractions of `radius`) so the cloud is a thick shell.
pub fn generate_scatter_targets<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    band: (f32, f32),
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| sample_shell(rng, radius * band.0, radius * band.1))
        .collect()
}

/// Uniform direction (inverse-transform sampled polar angle) at a radius
/// drawn uniformly from `inner..=outer`.
pub fn sample_shell<R: Rng + ?Sized>(rng: &mut R, inner: f32, outer: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = inner + rng.gen::<f32>() * (outer - inner);
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * SHAPE_JITTER,
        (rng.gen::<f32>() - 0.5) * SHAPE_JITTER,
        (rng.gen::<f32>() - 0.5) * SHAPE_JITTER,
    )
}

/// Where a particle starts its fly-in and how it travels.
#[derive(Clone, Copy, Debug)]
pub struct IntroOrigin {
    pub position: Vec3,
    /// -1 enters from the left, +1 from the right.
    pub side: f32,
    /// Progress offset before this particle starts moving.
    pub delay: f32,
    pub speed: f32,
}

/// Off-screen starting points on either side of the scene.
pub fn generate_intro_origins<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<IntroOrigin> {
    (0..count)
        .map(|_| {
            let side = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
            let position = Vec3::new(
                side * (30.0 + rng.gen::<f32>() * 20.0),
                -20.0 + rng.gen::<f32>() * 40.0,
                -10.0 + rng.gen::<f32>() * 20.0,
            );
            IntroOrigin {
                position,
                side,
                delay: rng.gen::<f32>() * 0.3,
                speed: 0.8 + rng.gen::<f32>() * 0.4,
            }
        })
        .collect()
}
