use crate::blend::BlendTarget;
use crate::intro::ScenePhase;

/// Something the host page may want to react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    Toggled(BlendTarget),
    OrbitChanged { angle: f32, tilt: f32 },
    PhaseChanged(ScenePhase),
    HintPulse(bool),
    AutoRotate(bool),
}

/// Host reactions to scene changes (hint text, CSS classes, ...).
///
/// Notifications are delivered after the state change that caused them has
/// completed.
pub trait SceneHooks {
    fn notify(&mut self, event: &SceneEvent);
}

/// Hooks for hosts that do not care.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl SceneHooks for NoHooks {
    fn notify(&mut self, _event: &SceneEvent) {}
}
