mod common;

use celestial_core::constants::{DRAG_SENSITIVITY, REFERENCE_FPS, TILT_LIMIT, TILT_SENSITIVITY_RATIO};
use celestial_core::{
    uniform, BlendTarget, ConfigError, Layer, PointerInput, PointerKind, SceneController,
    SceneEvent, ScenePhase, Viewport,
};
use common::*;
use glam::Vec2;

struct Harness {
    scene: SceneController<RecordingHooks>,
    sink: RecordingSink,
    now: f64,
}

impl Harness {
    fn new(config: celestial_core::SceneConfig) -> Self {
        let scene = SceneController::new(config, RecordingHooks::default()).expect("valid config");
        Self {
            scene,
            sink: RecordingSink::default(),
            now: 0.0,
        }
    }

    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            self.scene.frame(self.now, &mut self.sink);
            self.now += FRAME;
        }
    }

    fn ms(&self) -> f64 {
        self.now * 1000.0
    }

    fn touch(&self, x: f32, y: f32, extra_ms: f64) -> PointerInput {
        PointerInput::new(x, y, PointerKind::Touch, self.ms() + extra_ms)
    }

    fn tap(&mut self) {
        let down = self.touch(100.0, 100.0, 0.0);
        let up = self.touch(100.0, 100.0, 80.0);
        self.scene.pointer_down(down);
        self.scene.pointer_up(up);
    }
}

#[test]
fn frame_pushes_everything_to_the_sink() {
    let mut h = Harness::new(small_heart());
    h.scene.prime(&mut h.sink);
    assert_eq!(
        h.sink.static_counts,
        vec![(Layer::Particles, 300, 300), (Layer::Stars, 40, 40)]
    );
    h.frames(3);
    assert_eq!(h.sink.renders, 3);
    assert_eq!(h.sink.last_positions.len(), 300);
    let u = h.sink.particle_uniforms.as_ref().expect("uniforms");
    assert!((u.get(uniform::TIME).unwrap() - (2.0 * FRAME) as f32).abs() < 1e-6);
    assert_eq!(u.get(uniform::SIZE), Some(38.0));
    assert!(u.get(uniform::GLOW).is_some());
    assert!(h.sink.camera.is_some());
    assert!(h.sink.star_model.is_some());
}

#[test]
fn tap_toggles_once_and_leaves_no_momentum() {
    let mut h = Harness::new(small_heart());
    h.frames(2);
    let down = h.touch(200.0, 200.0, 0.0);
    h.scene.pointer_down(down);
    h.scene.pointer_move(h.touch(203.0, 202.0, 40.0));
    h.scene.pointer_up(h.touch(203.0, 202.0, 120.0));

    assert_eq!(h.scene.blend_target(), BlendTarget::Dispersed);
    assert_eq!(h.scene.hooks().toggles(), 1);
    assert_eq!(h.scene.orbit().momentum, Vec2::ZERO);
    assert_eq!(h.scene.glow(), 1.0);
    assert!(!h.scene.is_dragging());
}

#[test]
fn drag_keeps_last_velocity_and_does_not_toggle() {
    let mut h = Harness::new(small_heart());
    h.frames(2);
    h.scene.pointer_down(h.touch(100.0, 100.0, 0.0));
    h.scene.pointer_move(h.touch(110.0, 100.0, 16.0));
    h.scene.pointer_move(h.touch(125.0, 96.0, 32.0));
    h.scene.pointer_up(h.touch(125.0, 96.0, 48.0));

    assert_eq!(h.scene.blend_target(), BlendTarget::Converged);
    assert_eq!(h.scene.hooks().toggles(), 0);
    let expected = Vec2::new(
        15.0 * DRAG_SENSITIVITY * REFERENCE_FPS,
        4.0 * DRAG_SENSITIVITY * TILT_SENSITIVITY_RATIO * REFERENCE_FPS,
    );
    let momentum = h.scene.orbit().momentum;
    assert!((momentum - expected).length() < 1e-5, "{momentum:?}");
    assert_ne!(momentum, Vec2::ZERO);
}

#[test]
fn long_still_press_is_a_drag_release() {
    let mut h = Harness::new(small_heart());
    h.scene.pointer_down(h.touch(10.0, 10.0, 0.0));
    h.scene.pointer_up(h.touch(10.0, 10.0, 450.0));
    assert_eq!(h.scene.blend_target(), BlendTarget::Converged);
}

#[test]
fn pointer_down_kills_momentum() {
    let mut h = Harness::new(small_heart());
    h.scene.key_down("ArrowRight");
    assert!(h.scene.orbit().momentum.x > 0.0);
    h.scene.pointer_down(h.touch(0.0, 0.0, 0.0));
    assert_eq!(h.scene.orbit().momentum, Vec2::ZERO);
}

#[test]
fn tilt_stays_clamped_under_any_drag() {
    let mut h = Harness::new(small_heart());
    h.scene.pointer_down(h.touch(0.0, 0.0, 0.0));
    h.scene.pointer_move(h.touch(0.0, -100_000.0, 10.0));
    assert_eq!(h.scene.orbit().tilt, TILT_LIMIT);
    h.frames(1);
    for i in 0..50 {
        let y = if i % 2 == 0 { 5_000.0 } else { -7_000.0 };
        h.scene.pointer_move(h.touch(i as f32, y, 20.0 + i as f64));
        assert!(h.scene.orbit().tilt.abs() <= TILT_LIMIT);
    }
    h.scene.pointer_up(h.touch(0.0, 0.0, 500.0));
    h.frames(120);
    assert!(h.scene.orbit().tilt.abs() <= TILT_LIMIT);
}

#[test]
fn repeated_taps_alternate_and_converge_without_overshoot() {
    let mut h = Harness::new(small_heart());
    h.frames(1);
    for expected in [1.0_f32, 0.0, 1.0] {
        h.tap();
        assert_eq!(h.scene.blend().target().value(), expected);
        let mut prev_gap = (expected - h.scene.blend().value()).abs();
        for _ in 0..90 {
            h.frames(1);
            let v = h.scene.blend().value();
            assert!((0.0..=1.0).contains(&v));
            let gap = (expected - v).abs();
            assert!(gap <= prev_gap, "moved away from target");
            prev_gap = gap;
        }
    }
    assert_eq!(h.scene.hooks().toggles(), 3);
}

#[test]
fn momentum_decays_monotonically_without_input() {
    let mut h = Harness::new(small_heart());
    h.frames(1);
    h.scene.pointer_down(h.touch(0.0, 300.0, 0.0));
    h.scene.pointer_move(h.touch(40.0, 290.0, 16.0));
    h.scene.pointer_up(h.touch(40.0, 290.0, 400.0));

    let mut prev = h.scene.orbit().momentum.length();
    assert!(prev > 0.0);
    for _ in 0..500 {
        h.frames(1);
        let m = h.scene.orbit().momentum.length();
        assert!(m < prev);
        assert!(m > 0.0);
        prev = m;
    }
}

#[test]
fn idle_orbit_advances_by_auto_rotate_only() {
    let mut h = Harness::new(small_heart());
    let n = 240;
    h.frames(n);
    let auto = h.scene.config().auto_rotate_speed;
    // First frame has no predecessor and integrates the 1 ms floor.
    let expected = auto * (0.001 + (n - 1) as f32 * FRAME as f32);
    assert!((h.scene.orbit().angle - expected).abs() < 1e-4);
    assert_eq!(h.scene.orbit().tilt, 0.0);
}

#[test]
fn blend_round_trip_returns_home() {
    let eps = 1e-3;
    let mut h = Harness::new(small_heart());
    h.frames(1);
    assert_eq!(h.scene.blend().value(), 0.0);

    h.scene.toggle();
    let mut out_frames = 0;
    while h.scene.blend().value() < 1.0 - eps {
        h.frames(1);
        out_frames += 1;
        assert!(out_frames < 10_000);
    }

    h.scene.toggle();
    let mut back_frames = 0;
    while h.scene.blend().value() > eps {
        h.frames(1);
        back_frames += 1;
        assert!(back_frames < 10_000);
    }
    assert!(h.scene.blend().value() <= eps);
    // Converging uses the faster constant.
    assert!(back_frames < out_frames);
}

#[test]
fn stalls_are_clamped() {
    let mut h = Harness::new(small_heart());
    h.scene.frame(0.0, &mut h.sink);
    h.scene.toggle();
    h.scene.frame(10.0, &mut h.sink);
    let speed = h.scene.config().disperse_speed;
    let expected = speed * 60.0 * 0.05;
    assert!((h.scene.blend().value() - expected).abs() < 1e-5);
}

#[test]
fn particles_settle_on_dispersed_targets() {
    let mut h = Harness::new(small_heart());
    h.scene.toggle();
    h.frames(900);
    let set = h.scene.particles();
    for i in 0..set.len() {
        let gap = (set.positions()[i] - set.dispersed()[i]).length();
        assert!(gap < 0.05, "particle {i} still {gap} away");
    }
}

#[test]
fn keyboard_toggle_and_nudges() {
    let mut h = Harness::new(small_heart());
    assert!(h.scene.key_down("Space"));
    assert_eq!(h.scene.blend_target(), BlendTarget::Dispersed);
    assert!(h.scene.key_down("KeyD"));
    assert_eq!(h.scene.blend_target(), BlendTarget::Converged);
    assert!(h.scene.key_down("ArrowLeft"));
    assert!(h.scene.key_down("ArrowDown"));
    assert_eq!(h.scene.orbit().momentum, Vec2::new(-2.0, -1.2));
    assert!(!h.scene.key_down("KeyQ"));
}

#[test]
fn auto_rotate_can_be_switched_off() {
    let mut h = Harness::new(small_heart());
    assert!(h.scene.key_down("KeyR"));
    assert!(h
        .scene
        .hooks()
        .events
        .contains(&SceneEvent::AutoRotate(false)));
    h.frames(60);
    assert_eq!(h.scene.orbit().angle, 0.0);
}

#[test]
fn mouse_hover_sets_parallax_but_touch_does_not() {
    let mut h = Harness::new(small_heart());
    h.scene.resize(Viewport::new(800.0, 600.0, 1.0));
    h.scene
        .pointer_move(PointerInput::new(800.0, 0.0, PointerKind::Touch, 0.0));
    assert_eq!(h.scene.parallax(), Vec2::ZERO);
    h.scene
        .pointer_move(PointerInput::new(800.0, 0.0, PointerKind::Mouse, 0.0));
    assert_eq!(h.scene.parallax(), Vec2::new(1.0, 1.0));

    h.frames(1);
    let eye = h.sink.camera.as_ref().unwrap().eye;
    let base = h.scene.orbit().eye(&h.scene.config().camera, Vec2::ZERO);
    assert!((eye.x - base.x - 0.5).abs() < 1e-5);
    assert!((eye.y - base.y - 0.3).abs() < 1e-5);
}

#[test]
fn resize_updates_aspect_and_capped_pixel_ratio() {
    let mut h = Harness::new(small_heart());
    h.scene.resize(Viewport::new(1200.0, 600.0, 3.0));
    assert!((h.scene.camera().aspect - 2.0).abs() < 1e-6);
    assert_eq!(h.scene.pixel_ratio(), 2.0);
    assert_eq!(
        h.scene.uniforms(Layer::Particles).get(uniform::PIXEL_RATIO),
        Some(2.0)
    );
    assert_eq!(
        h.scene.uniforms(Layer::Stars).get(uniform::PIXEL_RATIO),
        Some(2.0)
    );
}

#[test]
fn wheel_zoom_moves_the_camera() {
    let mut h = Harness::new(small_heart());
    h.scene.wheel(300.0);
    assert!(h.scene.orbit().radius > 8.0);
    h.scene.wheel(f32::NAN);
    assert!(h.scene.orbit().radius.is_finite());
}

#[test]
fn christmas_intro_flies_in_then_settles() {
    let mut h = Harness::new(small_tree());
    h.frames(1);
    assert!(matches!(h.scene.phase(), ScenePhase::FlyIn { .. }));
    h.frames(240);
    assert_eq!(h.scene.phase(), ScenePhase::Settled);
    assert!(h
        .scene
        .hooks()
        .events
        .contains(&SceneEvent::PhaseChanged(ScenePhase::Settled)));
    h.frames(120);
    let set = h.scene.particles();
    for i in 0..set.len() {
        assert!((set.positions()[i] - set.converged()[i]).length() < 0.05);
    }
}

#[test]
fn hint_pulse_starts_and_ends() {
    let mut h = Harness::new(small_heart());
    h.frames(1);
    h.scene.toggle();
    h.frames(60);
    let events = &h.scene.hooks().events;
    let on = events.iter().position(|e| *e == SceneEvent::HintPulse(true));
    let off = events.iter().position(|e| *e == SceneEvent::HintPulse(false));
    assert!(on.is_some() && off.is_some() && on < off);
}

#[test]
fn rejects_empty_scene() {
    let mut config = small_heart();
    config.particle_count = 0;
    let err = SceneController::headless(config).err();
    assert_eq!(err, Some(ConfigError::NoParticles));
}

#[test]
fn cancelled_quick_press_still_toggles() {
    let mut h = Harness::new(small_heart());
    h.scene.pointer_down(h.touch(50.0, 50.0, 0.0));
    h.scene.pointer_cancel(h.touch(50.0, 50.0, 30.0));
    assert_eq!(h.scene.blend_target(), BlendTarget::Dispersed);
    assert!(!h.scene.is_dragging());
}

#[test]
fn second_finger_does_not_swing_the_orbit() {
    let mut h = Harness::new(small_heart());
    h.scene.pointer_down(h.touch(100.0, 300.0, 0.0).with_pointer_id(1));
    h.scene.pointer_down(h.touch(400.0, 300.0, 5.0).with_pointer_id(2));
    h.scene.pointer_move(h.touch(101.0, 300.0, 10.0).with_pointer_id(1));

    assert!(h.scene.orbit().angle.abs() < 0.01);
    assert_eq!(h.scene.orbit().momentum, Vec2::ZERO);

    // Lifting both fingers quickly is not a tap.
    h.scene.pointer_up(h.touch(400.0, 300.0, 40.0).with_pointer_id(2));
    h.scene.pointer_up(h.touch(101.0, 300.0, 50.0).with_pointer_id(1));
    assert_eq!(h.scene.blend_target(), BlendTarget::Converged);
    assert_eq!(h.scene.hooks().toggles(), 0);
    assert!(!h.scene.is_dragging());
}

#[test]
fn pinch_zooms_the_orbit() {
    let mut h = Harness::new(small_heart());
    assert_eq!(h.scene.orbit().radius, 8.0);
    h.scene.pointer_down(h.touch(100.0, 300.0, 0.0).with_pointer_id(1));
    h.scene.pointer_down(h.touch(400.0, 300.0, 5.0).with_pointer_id(2));
    // 300 px apart spreading to 400 px brings the camera in by a quarter.
    h.scene.pointer_move(h.touch(500.0, 300.0, 10.0).with_pointer_id(2));
    assert!((h.scene.orbit().radius - 6.0).abs() < 1e-5);

    // Pinching far past the range stops at the closest zoom.
    h.scene.pointer_move(h.touch(2_000.0, 300.0, 20.0).with_pointer_id(2));
    assert_eq!(h.scene.orbit().radius, h.scene.config().camera.zoom_min);
}
