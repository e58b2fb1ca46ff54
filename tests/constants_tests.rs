// Host-side sanity checks for front-end constants.
#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn bloom_settings_are_sane() {
    for b in [HEART_BLOOM, TREE_BLOOM] {
        assert!(b.strength > 0.0);
        assert!((0.0..1.0).contains(&b.threshold));
        assert!(b.exposure > 0.0);
        assert!(b.is_enabled());
        assert!(!b.disabled().is_enabled());
    }
}

#[test]
fn wheel_scales_grow_with_mode() {
    assert!(WHEEL_LINE_PX > 1.0);
    assert!(WHEEL_PAGE_PX > WHEEL_LINE_PX);
    assert!(BLOOM_DOWNSCALE >= 1);
}

#[test]
fn hint_strings_differ() {
    assert_ne!(HINT_DISPERSE, HINT_CONVERGE);
    assert!(HINT_SELECTOR.starts_with('.'));
}
