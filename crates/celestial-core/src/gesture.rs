//! Pointer gesture sessions and tap/drag classification.

use crate::constants::{MIN_PINCH_SPREAD_PX, TAP_MAX_DURATION_MS, TAP_MAX_TRAVEL_PX};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Map a DOM `pointerType` string; unknown types count as touch.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }
}

/// One pointer event as delivered by the host, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub position: Vec2,
    pub kind: PointerKind,
    /// DOM `pointerId`; each finger of a multi-touch gets its own.
    pub pointer_id: i32,
    /// Host monotonic timestamp in milliseconds.
    pub time_ms: f64,
}

impl PointerInput {
    pub fn new(x: f32, y: f32, kind: PointerKind, time_ms: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            kind,
            pointer_id: 0,
            time_ms,
        }
    }

    pub fn with_pointer_id(mut self, pointer_id: i32) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// State carried from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub pointer_id: i32,
    pub start: Vec2,
    pub prev: Vec2,
    pub start_ms: f64,
    /// Sum of |dx| + |dy| over every move in the session.
    pub travelled: f32,
    /// Cleared once the session has been part of a pinch.
    pub can_tap: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPointer {
    pub pointer_id: i32,
    pub position: Vec2,
}

/// Two pointers down at once. Only their spread matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    pub first: TrackedPointer,
    pub second: TrackedPointer,
    pub spread: f32,
}

impl PinchSession {
    fn survivor(&self, lifted: i32) -> Option<TrackedPointer> {
        if self.first.pointer_id == lifted {
            Some(self.second)
        } else if self.second.pointer_id == lifted {
            Some(self.first)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active(GestureSession),
    Pinch(PinchSession),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Short and still: toggles the blend target.
    Tap,
    /// Anything else: the last move's velocity keeps coasting.
    DragRelease,
}

/// What a pointer move means for the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureMove {
    /// Frame-to-frame delta of the dragging pointer.
    Drag(Vec2),
    /// Factor for the orbit radius: previous spread over current spread.
    Pinch(f32),
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Begin a session. The same pointer pressing again restarts it, a
    /// second pointer turns it into a pinch and any further pointer is
    /// ignored.
    pub fn press(&mut self, pointer_id: i32, position: Vec2, time_ms: f64) {
        match self.state {
            GestureState::Active(session) if session.pointer_id != pointer_id => {
                let first = TrackedPointer {
                    pointer_id: session.pointer_id,
                    position: session.prev,
                };
                let second = TrackedPointer {
                    pointer_id,
                    position,
                };
                self.state = GestureState::Pinch(PinchSession {
                    first,
                    second,
                    spread: first.position.distance(second.position),
                });
            }
            GestureState::Pinch(_) => {}
            GestureState::Idle | GestureState::Active(_) => {
                self.state = GestureState::Active(GestureSession {
                    pointer_id,
                    start: position,
                    prev: position,
                    start_ms: time_ms,
                    travelled: 0.0,
                    can_tap: true,
                });
            }
        }
    }

    /// Interpret a move. Pointers outside the session report nothing.
    pub fn moved(&mut self, pointer_id: i32, position: Vec2) -> Option<GestureMove> {
        match &mut self.state {
            GestureState::Active(session) if session.pointer_id == pointer_id => {
                let delta = position - session.prev;
                session.travelled += delta.x.abs() + delta.y.abs();
                session.prev = position;
                Some(GestureMove::Drag(delta))
            }
            GestureState::Pinch(pinch) => {
                if pinch.first.pointer_id == pointer_id {
                    pinch.first.position = position;
                } else if pinch.second.pointer_id == pointer_id {
                    pinch.second.position = position;
                } else {
                    return None;
                }
                let spread = pinch.first.position.distance(pinch.second.position);
                if spread < MIN_PINCH_SPREAD_PX || pinch.spread < MIN_PINCH_SPREAD_PX {
                    pinch.spread = spread;
                    return None;
                }
                let factor = pinch.spread / spread;
                pinch.spread = spread;
                Some(GestureMove::Pinch(factor))
            }
            GestureState::Active(_) | GestureState::Idle => None,
        }
    }

    /// A cancelled pointer ends the session exactly like a release.
    pub fn cancel(&mut self, pointer_id: i32, time_ms: f64) -> Option<GestureOutcome> {
        self.release(pointer_id, time_ms)
    }

    /// End the pointer's part in the session and classify it. Returns
    /// `None` for pointers outside the session and when lifting one finger
    /// of a pinch, which hands the session to the other finger.
    pub fn release(&mut self, pointer_id: i32, time_ms: f64) -> Option<GestureOutcome> {
        match self.state {
            GestureState::Active(session) if session.pointer_id == pointer_id => {
                self.state = GestureState::Idle;
                let elapsed = time_ms - session.start_ms;
                if session.can_tap
                    && elapsed < TAP_MAX_DURATION_MS
                    && session.travelled < TAP_MAX_TRAVEL_PX
                {
                    Some(GestureOutcome::Tap)
                } else {
                    Some(GestureOutcome::DragRelease)
                }
            }
            GestureState::Pinch(pinch) => {
                if let Some(rest) = pinch.survivor(pointer_id) {
                    self.state = GestureState::Active(GestureSession {
                        pointer_id: rest.pointer_id,
                        start: rest.position,
                        prev: rest.position,
                        start_ms: time_ms,
                        travelled: 0.0,
                        can_tap: false,
                    });
                }
                None
            }
            GestureState::Active(_) | GestureState::Idle => None,
        }
    }
}

/// Cursor position mapped to [-1, 1] on both axes, +y up.
pub fn parallax_from_pointer(position: Vec2, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = ((position.x / width - 0.5) * 2.0).clamp(-1.0, 1.0);
    let y = (-(position.y / height - 0.5) * 2.0).clamp(-1.0, 1.0);
    Vec2::new(x, y)
}
