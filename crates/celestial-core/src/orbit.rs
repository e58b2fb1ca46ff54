//! Camera orbit driven by drags, key impulses and momentum.

use crate::config::CameraConfig;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Horizontal angle, clamped tilt, and coasting angular velocity.
///
/// `angle` is unbounded; it only ever feeds trig functions.
#[derive(Clone, Debug)]
pub struct OrbitState {
    pub angle: f32,
    pub tilt: f32,
    /// Radians per second along (angle, tilt).
    pub momentum: Vec2,
    pub auto_rotate: f32,
    pub auto_rotate_enabled: bool,
    pub radius: f32,
    zoom_range: (f32, f32),
}

impl OrbitState {
    pub fn new(auto_rotate: f32, camera: &CameraConfig) -> Self {
        Self {
            angle: 0.0,
            tilt: 0.0,
            momentum: Vec2::ZERO,
            auto_rotate,
            auto_rotate_enabled: true,
            radius: camera.radius,
            zoom_range: (camera.zoom_min, camera.zoom_max),
        }
    }

    /// Kill any coasting spin so a new grab starts from rest.
    pub fn stop(&mut self) {
        self.momentum = Vec2::ZERO;
    }

    /// Apply one pointer-move delta in pixels. The delta also becomes the
    /// new momentum (scaled to per-second) so a release keeps spinning.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        let d_angle = dx * DRAG_SENSITIVITY;
        let d_tilt = -dy * DRAG_SENSITIVITY * TILT_SENSITIVITY_RATIO;
        self.angle += d_angle;
        self.tilt = (self.tilt + d_tilt).clamp(-TILT_LIMIT, TILT_LIMIT);
        self.momentum = Vec2::new(d_angle, d_tilt) * REFERENCE_FPS;
    }

    /// Add a fixed kick to momentum (arrow keys).
    pub fn impulse(&mut self, d_angle: f32, d_tilt: f32) {
        self.momentum += Vec2::new(d_angle, d_tilt);
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate_enabled = !self.auto_rotate_enabled;
        self.auto_rotate_enabled
    }

    /// Scale the orbit radius by a wheel delta; positive zooms out.
    pub fn zoom(&mut self, wheel_px: f32) {
        self.zoom_by((wheel_px * ZOOM_PER_WHEEL_PX).exp());
    }

    /// Multiply the orbit radius, staying inside the zoom range.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.radius = (self.radius * factor).clamp(self.zoom_range.0, self.zoom_range.1);
    }

    /// Advance one frame. While a drag is active the pointer owns the
    /// orbit, so momentum and auto-rotation are left alone.
    pub fn step(&mut self, dt: f32, dragging: bool) {
        let dt = dt.max(MIN_ORBIT_DT);
        if !dragging {
            self.angle += self.momentum.x * dt;
            self.tilt += self.momentum.y * dt;
            self.momentum *= MOMENTUM_FRICTION;

            if self.auto_rotate_enabled {
                let magnitude = self.momentum.x.abs() + self.momentum.y.abs();
                let factor = (1.0 - magnitude * AUTO_ROTATE_MOMENTUM_DAMP).max(0.0);
                self.angle += self.auto_rotate * dt * factor;
            }
        }
        self.tilt = self.tilt.clamp(-TILT_LIMIT, TILT_LIMIT);
        if !dragging && self.momentum.y.abs() < TILT_RELAX_MOMENTUM {
            self.tilt *= TILT_RELAX;
        }
    }

    /// Eye position for this orbit plus a small pointer parallax offset.
    pub fn eye(&self, camera: &CameraConfig, parallax: Vec2) -> Vec3 {
        Vec3::new(
            self.angle.sin() * self.radius + parallax.x * PARALLAX_X,
            camera.height + self.tilt * TILT_HEIGHT_SCALE + parallax.y * PARALLAX_Y,
            self.angle.cos() * self.radius,
        )
    }
}
