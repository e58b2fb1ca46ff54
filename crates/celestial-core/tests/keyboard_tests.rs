use celestial_core::keys::{key_action, KeyAction};

#[test]
fn toggle_has_a_fallback_key() {
    assert_eq!(key_action("KeyD"), Some(KeyAction::Toggle));
    assert_eq!(key_action("Space"), Some(KeyAction::Toggle));
    assert_eq!(key_action("KeyX"), None);
}

#[test]
fn vertical_nudges_are_damped() {
    let Some(KeyAction::Nudge { d_tilt, .. }) = key_action("ArrowUp") else {
        panic!("ArrowUp should nudge");
    };
    assert!((d_tilt - 1.2).abs() < 1e-6);
}

#[test]
fn r_toggles_auto_rotate() {
    assert_eq!(key_action("KeyR"), Some(KeyAction::ToggleAutoRotate));
}
