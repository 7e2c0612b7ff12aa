use crate::input::{PointerButton, SimInput, SimKey};
use glam::Vec3;
use handproxy_common::HandRole;
use serde::{Deserialize, Serialize};

const LEFT_MOVE_KEYS: [SimKey; 6] = [
    SimKey::KeyW,
    SimKey::KeyA,
    SimKey::KeyS,
    SimKey::KeyD,
    SimKey::KeyQ,
    SimKey::KeyE,
];

const RIGHT_MOVE_KEYS: [SimKey; 6] = [
    SimKey::ArrowUp,
    SimKey::ArrowDown,
    SimKey::ArrowLeft,
    SimKey::ArrowRight,
    SimKey::PageUp,
    SimKey::PageDown,
];

/// Speeds for the simulation fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// World units per second of held movement key.
    pub move_speed: f32,
    /// Degrees per second per unit of pointer delta.
    pub rotate_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            rotate_speed: 60.0,
        }
    }
}

/// The four independent gesture sub-states for one tick.
///
/// Translation and rotation for each hand are driven by distinct gestures,
/// so any combination of the four can be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimGestures {
    pub left_translating: bool,
    pub left_rotating: bool,
    pub right_translating: bool,
    pub right_rotating: bool,
}

impl SimGestures {
    pub fn observe(input: &SimInput) -> Self {
        Self {
            left_translating: input.any_key_held(&LEFT_MOVE_KEYS),
            left_rotating: input.button_held(PointerButton::Primary),
            right_translating: input.any_key_held(&RIGHT_MOVE_KEYS),
            right_rotating: input.button_held(PointerButton::Secondary),
        }
    }
}

/// Simulated motion for one hand over one tick.
///
/// `yaw` is applied about the world Y axis, `pitch` about the object-local X
/// axis. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandDelta {
    pub translation: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl HandDelta {
    pub fn is_zero(&self) -> bool {
        self.translation == Vec3::ZERO && self.yaw == 0.0 && self.pitch == 0.0
    }
}

/// Compute the simulated delta for one hand from this tick's input.
///
/// Held movement keys sum into a single displacement vector scaled by
/// `move_speed * dt`; components are not normalized, so each held axis
/// contributes exactly `move_speed * dt` on its own. Rotation applies only
/// while the hand's pointer button is held.
pub fn hand_delta(role: HandRole, input: &SimInput, config: &SimConfig, dt: f32) -> HandDelta {
    let (fwd, back, left, right, down, up, button) = match role {
        HandRole::Left => (
            SimKey::KeyW,
            SimKey::KeyS,
            SimKey::KeyA,
            SimKey::KeyD,
            SimKey::KeyQ,
            SimKey::KeyE,
            PointerButton::Primary,
        ),
        HandRole::Right => (
            SimKey::ArrowUp,
            SimKey::ArrowDown,
            SimKey::ArrowLeft,
            SimKey::ArrowRight,
            SimKey::PageDown,
            SimKey::PageUp,
            PointerButton::Secondary,
        ),
    };

    let mut direction = Vec3::ZERO;
    if input.key_held(fwd) {
        direction += Vec3::NEG_Z;
    }
    if input.key_held(back) {
        direction += Vec3::Z;
    }
    if input.key_held(left) {
        direction += Vec3::NEG_X;
    }
    if input.key_held(right) {
        direction += Vec3::X;
    }
    if input.key_held(up) {
        direction += Vec3::Y;
    }
    if input.key_held(down) {
        direction += Vec3::NEG_Y;
    }

    let mut delta = HandDelta {
        translation: direction * config.move_speed * dt,
        ..HandDelta::default()
    };

    if input.button_held(button) {
        delta.yaw = (input.pointer_delta.x * config.rotate_speed).to_radians() * dt;
        delta.pitch = (input.pointer_delta.y * config.rotate_speed).to_radians() * dt;
    }

    delta
}
