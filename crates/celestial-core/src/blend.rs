use crate::constants::{MIN_BLEND_DT, REFERENCE_FPS};

/// Which configuration the blend scalar is heading for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendTarget {
    #[default]
    Converged,
    Dispersed,
}

impl BlendTarget {
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            BlendTarget::Converged => 0.0,
            BlendTarget::Dispersed => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            BlendTarget::Converged => BlendTarget::Dispersed,
            BlendTarget::Dispersed => BlendTarget::Converged,
        }
    }
}

/// Interpolation progress between converged (0) and dispersed (1).
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendState {
    value: f32,
    target: BlendTarget,
}

impl BlendState {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> BlendTarget {
        self.target
    }

    pub fn is_dispersed(&self) -> bool {
        self.target == BlendTarget::Dispersed
    }

    /// Flip the target and return the new one.
    pub fn toggle(&mut self) -> BlendTarget {
        self.target = self.target.flipped();
        self.target
    }

    pub fn set_target(&mut self, target: BlendTarget) {
        self.target = target;
    }

    /// Ease toward the target. The speeds are fractions of the remaining
    /// distance per 60 Hz frame; which one applies depends on direction.
    pub fn step(&mut self, dt: f32, converge_speed: f32, disperse_speed: f32) {
        let speed = match self.target {
            BlendTarget::Converged => converge_speed,
            BlendTarget::Dispersed => disperse_speed,
        };
        let rate = (speed * REFERENCE_FPS * dt.max(MIN_BLEND_DT)).min(1.0);
        self.value += (self.target.value() - self.value) * rate;
        self.value = self.value.clamp(0.0, 1.0);
    }
}
