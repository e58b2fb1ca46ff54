use thiserror::Error;

/// Rejected scene configuration.
///
/// Only construction can fail; every per-frame and input operation clamps
/// its state instead of reporting an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be greater than zero")]
    NoParticles,
    #[error("{name} must be finite and greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} range is inverted or out of bounds ({lo}..{hi})")]
    BadRange {
        name: &'static str,
        lo: f32,
        hi: f32,
    },
    #[error("field of view must be within (0, 180) degrees (got {0})")]
    FieldOfView(f32),
}
