use crate::constants::{GLOW_DECAY, GLOW_EPSILON, GLOW_SPEED_GAIN, GLOW_TOUCH_FLOOR};

/// Transient visual feedback intensity in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionGlow {
    level: f32,
}

impl InteractionGlow {
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Full flash, used on toggles.
    pub fn pulse(&mut self) {
        self.level = 1.0;
    }

    /// Subtle floor raised when a pointer goes down.
    pub fn touch(&mut self) {
        self.level = self.level.max(GLOW_TOUCH_FLOOR);
    }

    /// Brighten in proportion to gesture speed (pixels per move event).
    pub fn bump(&mut self, speed_px: f32) {
        self.level = (self.level + speed_px.max(0.0) * GLOW_SPEED_GAIN).min(1.0);
    }

    /// One frame of multiplicative decay; snaps to zero below epsilon.
    pub fn decay(&mut self) {
        self.level *= GLOW_DECAY;
        if self.level < GLOW_EPSILON {
            self.level = 0.0;
        }
    }
}
