use crate::constants::{KEY_IMPULSE, TILT_SENSITIVITY_RATIO};

/// What a key press does to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Toggle,
    /// Momentum kick along (angle, tilt).
    Nudge { d_angle: f32, d_tilt: f32 },
    ToggleAutoRotate,
}

/// Map a DOM `KeyboardEvent.code` to an action.
pub fn key_action(code: &str) -> Option<KeyAction> {
    let tilt = KEY_IMPULSE * TILT_SENSITIVITY_RATIO;
    match code {
        "KeyD" | "Space" => Some(KeyAction::Toggle),
        "KeyR" => Some(KeyAction::ToggleAutoRotate),
        "ArrowLeft" => Some(KeyAction::Nudge {
            d_angle: -KEY_IMPULSE,
            d_tilt: 0.0,
        }),
        "ArrowRight" => Some(KeyAction::Nudge {
            d_angle: KEY_IMPULSE,
            d_tilt: 0.0,
        }),
        "ArrowUp" => Some(KeyAction::Nudge {
            d_angle: 0.0,
            d_tilt: tilt,
        }),
        "ArrowDown" => Some(KeyAction::Nudge {
            d_angle: 0.0,
            d_tilt: -tilt,
        }),
        _ => None,
    }
}
