//! Closed-form surfaces the converged targets are sampled from.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// A parametric surface over the unit square.
pub trait Surface {
    /// Surface point for `u, v` in [0, 1).
    fn point(&self, u: f32, v: f32) -> Vec3;
    /// Point the density bias pulls samples toward.
    fn centroid(&self) -> Vec3;
    /// Per-axis half extents of the surface about its centroid.
    fn half_extents(&self) -> Vec3;

    /// Radius of a sphere about the centroid enclosing the whole surface.
    fn bound(&self) -> f32 {
        self.half_extents().length()
    }
}

/// Which surface a scene assembles into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Heart { scale: f32 },
    Tree { height: f32, radius: f32 },
}

impl ShapeKind {
    pub fn surface(&self) -> Box<dyn Surface> {
        match *self {
            ShapeKind::Heart { scale } => Box::new(HeartSurface { scale }),
            ShapeKind::Tree { height, radius } => Box::new(TreeSurface { height, radius }),
        }
    }
}

// The classic heart curve spans roughly 32 x 30 units; this brings it to
// scene scale.
const HEART_UNIT: f32 = 0.06;
const HEART_LIFT: f32 = 0.5;

/// Heart curve swept through depth: x = 16 sin^3 t,
/// y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t, z = 8 cos s sin t.
#[derive(Clone, Copy, Debug)]
pub struct HeartSurface {
    pub scale: f32,
}

impl Surface for HeartSurface {
    fn point(&self, u: f32, v: f32) -> Vec3 {
        let t = u * TAU;
        let s = v * PI;
        let k = self.scale * HEART_UNIT;
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        let z = 8.0 * s.cos() * t.sin();
        Vec3::new(x * k, y * k + HEART_LIFT, z * k)
    }

    fn centroid(&self) -> Vec3 {
        Vec3::new(0.0, HEART_LIFT, 0.0)
    }

    fn half_extents(&self) -> Vec3 {
        let k = self.scale * HEART_UNIT;
        // |y| peaks at t = pi where the curve reaches -17.
        Vec3::new(16.0 * k, 17.0 * k, 8.0 * k)
    }
}

const TREE_HEIGHT_BIAS: f32 = 0.8; // pushes samples toward the wide base
const TREE_TURNS: f32 = 50.0 * PI;
const TREE_MIN_RADIUS: f32 = 0.5;

/// Tight cone spiral standing on its base, centred on the origin.
#[derive(Clone, Copy, Debug)]
pub struct TreeSurface {
    pub height: f32,
    pub radius: f32,
}

impl Surface for TreeSurface {
    fn point(&self, u: f32, v: f32) -> Vec3 {
        let h = u.powf(TREE_HEIGHT_BIAS);
        let y = h * self.height - self.height * 0.5;
        let r_max = (self.radius * (1.0 - h)).max(TREE_MIN_RADIUS);
        let angle = h * TREE_TURNS + v * PI;
        let r = r_max * (0.8 + 0.4 * v);
        Vec3::new(angle.cos() * r, y, angle.sin() * r)
    }

    fn centroid(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn half_extents(&self) -> Vec3 {
        let r = self.radius.max(TREE_MIN_RADIUS) * 1.2;
        Vec3::new(r, self.height * 0.5, r)
    }
}
