//! Named-state timers for the scene's one-off animations.

use crate::config::IntroConfig;
use crate::constants::HINT_PULSE_SEC;

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScenePhase {
    /// Particles are flying in; `progress` runs from 0 to the intro end.
    FlyIn { progress: f32 },
    /// Normal interactive scene.
    Settled,
}

#[derive(Clone, Debug)]
pub struct IntroTimeline {
    phase: ScenePhase,
    rate: f32,
    end: f32,
}

impl IntroTimeline {
    /// Scenes without an intro start settled.
    pub fn new(config: Option<&IntroConfig>) -> Self {
        match config {
            Some(c) => Self {
                phase: ScenePhase::FlyIn { progress: 0.0 },
                rate: c.rate,
                end: c.end,
            },
            None => Self {
                phase: ScenePhase::Settled,
                rate: 0.0,
                end: 0.0,
            },
        }
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == ScenePhase::Settled
    }

    /// Advance by `dt` seconds; returns the new phase on a transition.
    pub fn advance(&mut self, dt: f32) -> Option<ScenePhase> {
        let ScenePhase::FlyIn { progress } = self.phase else {
            return None;
        };
        let progress = progress + dt * self.rate;
        if progress >= self.end {
            self.phase = ScenePhase::Settled;
            Some(self.phase)
        } else {
            self.phase = ScenePhase::FlyIn { progress };
            None
        }
    }
}

/// Lifetime of the hint label's pulse highlight.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HintPulse {
    #[default]
    Idle,
    Pulsing { elapsed: f32 },
}

impl HintPulse {
    pub fn restart(&mut self) {
        *self = HintPulse::Pulsing { elapsed: 0.0 };
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HintPulse::Pulsing { .. })
    }

    /// Returns true on the frame the pulse finishes.
    pub fn advance(&mut self, dt: f32) -> bool {
        if let HintPulse::Pulsing { elapsed } = *self {
            let elapsed = elapsed + dt;
            if elapsed >= HINT_PULSE_SEC {
                *self = HintPulse::Idle;
                return true;
            }
            *self = HintPulse::Pulsing { elapsed };
        }
        false
    }
}
