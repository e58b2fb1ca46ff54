//! Interaction and motion tuning constants.
//!
//! These express intended behavior (tap thresholds, friction per frame,
//! clamp limits) and keep magic numbers out of the controller code.

// Frame timing (seconds)
pub const MAX_FRAME_DT: f32 = 0.05; // stalls longer than this are absorbed
pub const MIN_ORBIT_DT: f32 = 0.001; // floor used when integrating momentum
pub const MIN_BLEND_DT: f32 = 0.016; // blend never advances slower than one 60 Hz frame
pub const REFERENCE_FPS: f32 = 60.0; // speed constants are expressed per 60 Hz frame

// Per-particle smoothing toward the blended target
pub const PARTICLE_FOLLOW: f32 = 0.08;

// Tap vs drag classification
pub const TAP_MAX_TRAVEL_PX: f32 = 12.0;
pub const TAP_MAX_DURATION_MS: f64 = 300.0;

// Drag to orbit mapping
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians per pixel
pub const TILT_SENSITIVITY_RATIO: f32 = 0.6; // vertical drags are damped relative to horizontal

// Momentum
pub const MOMENTUM_FRICTION: f32 = 0.95; // multiplied once per frame
pub const AUTO_ROTATE_MOMENTUM_DAMP: f32 = 0.5; // auto-rotate factor = 1 - |m| * damp
pub const KEY_IMPULSE: f32 = 2.0; // arrow-key momentum kick (horizontal)

// Tilt
pub const TILT_LIMIT: f32 = 1.2;
pub const TILT_RELAX: f32 = 0.995; // ease back toward level when coasting
pub const TILT_RELAX_MOMENTUM: f32 = 0.1; // only relax below this vertical momentum

// Camera placement
pub const TILT_HEIGHT_SCALE: f32 = 2.0;
pub const PARALLAX_X: f32 = 0.5;
pub const PARALLAX_Y: f32 = 0.3;

// Interaction glow
pub const GLOW_DECAY: f32 = 0.96;
pub const GLOW_EPSILON: f32 = 0.001;
pub const GLOW_TOUCH_FLOOR: f32 = 0.3;
pub const GLOW_SPEED_GAIN: f32 = 0.008;

// Target generation
pub const SHAPE_FILL_EXPONENT: f32 = 0.3; // < 1 biases particles toward the core
pub const SHAPE_JITTER: f32 = 0.08; // full width of the per-axis noise

// Intro flight
pub const INTRO_RATE: f32 = 0.5; // progress per second
pub const INTRO_END: f32 = 1.5; // progress at which the scene settles
pub const INTRO_WAVE_AMPLITUDE: f32 = 15.0;
pub const INTRO_WAVE_HALF_PERIODS: f32 = 3.0;

// Hint label pulse
pub const HINT_PULSE_SEC: f32 = 0.6;

// Wheel zoom (log-radius change per wheel pixel)
pub const ZOOM_PER_WHEEL_PX: f32 = 0.001;

// Two-finger pinch
pub const MIN_PINCH_SPREAD_PX: f32 = 1.0; // closer fingers give no usable ratio
