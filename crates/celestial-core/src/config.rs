//! Scene configuration, fixed at construction.

use crate::error::ConfigError;
use crate::shape::ShapeKind;
use glam::Vec3;

/// Orbit camera placement and projection.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// Horizontal distance of the eye from the look-at axis.
    pub radius: f32,
    /// Eye height when the tilt is level.
    pub height: f32,
    pub fov_deg: f32,
    pub look_at: Vec3,
    pub znear: f32,
    pub zfar: f32,
    /// Allowed radius range for wheel zoom.
    pub zoom_min: f32,
    pub zoom_max: f32,
}

/// Global scale oscillators: a slow "breathing" sine plus an optional
/// sharper heartbeat layered on top.
#[derive(Clone, Debug)]
pub struct PulseConfig {
    pub breath_rate: f32,
    pub breath_amount: f32,
    pub beat_rate: f32,
    /// Zero disables the heartbeat term.
    pub beat_amount: f32,
    /// Exponent applied to the positive half of the beat sine.
    pub beat_sharpness: f32,
}

/// Fly-in animation played once when the scene starts.
#[derive(Clone, Debug)]
pub struct IntroConfig {
    pub rate: f32,
    pub end: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            rate: crate::constants::INTRO_RATE,
            end: crate::constants::INTRO_END,
        }
    }
}

/// Background star shell.
#[derive(Clone, Debug)]
pub struct StarConfig {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Rotation about Y in radians per second.
    pub spin_rate: f32,
    pub size: f32,
}

/// Colors handed to the renderer. Not behaviorally relevant.
#[derive(Clone, Debug)]
pub struct Palette {
    pub core: [f32; 3],
    pub mid: [f32; 3],
    pub edge: [f32; 3],
    pub star: [f32; 3],
    pub glow: [f32; 3],
    pub background: [f32; 3],
    /// Distance in the XY plane from the shape centroid at which the
    /// colour has faded fully from `core` to `edge`.
    pub gradient_radius: f32,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub shape: ShapeKind,
    pub scatter_radius: f32,
    /// Fraction of `scatter_radius` the dispersed shell spans.
    pub scatter_band: (f32, f32),
    pub auto_rotate_speed: f32,
    /// Blend speed toward the shape, per 60 Hz frame.
    pub converge_speed: f32,
    /// Blend speed toward the scatter cloud, per 60 Hz frame.
    pub disperse_speed: f32,
    pub point_size: f32,
    pub max_pixel_ratio: f32,
    pub camera: CameraConfig,
    pub pulse: PulseConfig,
    pub intro: Option<IntroConfig>,
    pub stars: StarConfig,
    pub palette: Palette,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::heart()
    }
}

impl SceneConfig {
    /// The celestial heart page.
    pub fn heart() -> Self {
        Self {
            particle_count: 20_000,
            shape: ShapeKind::Heart { scale: 2.4 },
            scatter_radius: 14.0,
            scatter_band: (0.4, 1.0),
            auto_rotate_speed: 0.12,
            converge_speed: 0.04,
            disperse_speed: 0.025,
            point_size: 38.0,
            max_pixel_ratio: 2.0,
            camera: CameraConfig {
                radius: 8.0,
                height: 1.0,
                fov_deg: 50.0,
                look_at: Vec3::new(0.0, 0.5, 0.0),
                znear: 0.1,
                zfar: 200.0,
                zoom_min: 5.0,
                zoom_max: 16.0,
            },
            pulse: PulseConfig {
                breath_rate: 0.8,
                breath_amount: 0.03,
                beat_rate: 1.2 * std::f32::consts::TAU,
                beat_amount: 0.0,
                beat_sharpness: 8.0,
            },
            intro: None,
            stars: StarConfig {
                count: 2_500,
                inner_radius: 30.0,
                outer_radius: 80.0,
                spin_rate: 0.02,
                size: 60.0,
            },
            palette: Palette {
                core: [1.0, 0.9, 0.95],
                mid: [1.0, 0.35, 0.6],
                edge: [0.75, 0.1, 0.4],
                star: [0.9, 0.85, 1.0],
                glow: [1.0, 0.7, 0.85],
                background: [0.02, 0.004, 0.02],
                gradient_radius: 3.0,
            },
            seed: 0x00C0_FFEE,
        }
    }

    /// The christmas tree page: a cone spiral that flies in from the sides.
    pub fn christmas() -> Self {
        Self {
            particle_count: 4_000,
            shape: ShapeKind::Tree {
                height: 24.0,
                radius: 8.0,
            },
            scatter_radius: 20.0,
            scatter_band: (0.4, 1.0),
            auto_rotate_speed: 0.3,
            converge_speed: 0.04,
            disperse_speed: 0.025,
            point_size: 300.0,
            max_pixel_ratio: 1.5,
            camera: CameraConfig {
                radius: 50.0,
                height: 2.0,
                fov_deg: 42.0,
                look_at: Vec3::ZERO,
                znear: 0.1,
                zfar: 1000.0,
                zoom_min: 20.0,
                zoom_max: 100.0,
            },
            pulse: PulseConfig {
                breath_rate: 0.8,
                breath_amount: 0.02,
                beat_rate: 0.0,
                beat_amount: 0.0,
                beat_sharpness: 1.0,
            },
            intro: Some(IntroConfig::default()),
            stars: StarConfig {
                count: 800,
                inner_radius: 100.0,
                outer_radius: 200.0,
                spin_rate: 0.02,
                size: 200.0,
            },
            palette: Palette {
                core: [1.0, 0.85, 0.4],
                mid: [0.2, 0.75, 0.35],
                edge: [1.0, 0.0, 0.2],
                star: [0.9, 0.9, 1.0],
                glow: [0.27, 0.53, 1.0],
                background: [0.04, 0.04, 0.1],
                gradient_radius: 12.0,
            },
            seed: 0x2512_2025,
        }
    }

    /// Scale the scene down for phones and small touch devices.
    pub fn mobile(mut self) -> Self {
        self.particle_count = (self.particle_count * 2 / 5).max(800);
        self.stars.count = (self.stars.count * 2 / 5).max(200);
        self.max_pixel_ratio = self.max_pixel_ratio.min(1.5);
        self.camera.radius *= 1.1;
        self.camera.zoom_max = self.camera.zoom_max.max(self.camera.radius);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        match self.shape {
            ShapeKind::Heart { scale } => positive("shape scale", scale)?,
            ShapeKind::Tree { height, radius } => {
                positive("tree height", height)?;
                positive("tree radius", radius)?;
            }
        }
        positive("scatter radius", self.scatter_radius)?;
        let (lo, hi) = self.scatter_band;
        if !(lo >= 0.0 && lo <= hi && hi <= 1.0) {
            return Err(ConfigError::BadRange {
                name: "scatter band",
                lo,
                hi,
            });
        }
        positive("converge speed", self.converge_speed)?;
        positive("disperse speed", self.disperse_speed)?;
        positive("point size", self.point_size)?;
        positive("max pixel ratio", self.max_pixel_ratio)?;
        positive("gradient radius", self.palette.gradient_radius)?;
        if !self.auto_rotate_speed.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "auto-rotate speed",
                value: self.auto_rotate_speed,
            });
        }

        let cam = &self.camera;
        positive("camera radius", cam.radius)?;
        positive("camera near plane", cam.znear)?;
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 180.0) {
            return Err(ConfigError::FieldOfView(cam.fov_deg));
        }
        if !(cam.znear < cam.zfar) {
            return Err(ConfigError::BadRange {
                name: "depth",
                lo: cam.znear,
                hi: cam.zfar,
            });
        }
        if !(cam.zoom_min > 0.0 && cam.zoom_min <= cam.radius && cam.radius <= cam.zoom_max) {
            return Err(ConfigError::BadRange {
                name: "zoom",
                lo: cam.zoom_min,
                hi: cam.zoom_max,
            });
        }

        if let Some(intro) = &self.intro {
            positive("intro rate", intro.rate)?;
            positive("intro end", intro.end)?;
        }
        let stars = &self.stars;
        if stars.count > 0 && !(stars.inner_radius > 0.0 && stars.inner_radius <= stars.outer_radius)
        {
            return Err(ConfigError::BadRange {
                name: "star shell",
                lo: stars.inner_radius,
                hi: stars.outer_radius,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
