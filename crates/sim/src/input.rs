use glam::Vec2;
use std::collections::BTreeSet;

/// The keys the simulation fallback is bound to.
///
/// Left hand: W/A/S/D planar, Q down / E up.
/// Right hand: arrow keys planar, PageDown down / PageUp up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimKey {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
}

/// Pointer buttons gating the rotation gestures: primary rotates the left
/// hand, secondary the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// One tick's worth of host input, filled by whatever owns the event loop.
///
/// `pointer_delta` is the pointer displacement accumulated since the previous
/// tick; the host is expected to clear it after each update.
#[derive(Debug, Clone, Default)]
pub struct SimInput {
    keys: BTreeSet<SimKey>,
    pub pointer_delta: Vec2,
    pub primary_held: bool,
    pub secondary_held: bool,
}

impl SimInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: SimKey) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: SimKey) {
        self.keys.remove(&key);
    }

    pub fn set_key(&mut self, key: SimKey, held: bool) {
        if held {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn key_held(&self, key: SimKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn button_held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_held,
            PointerButton::Secondary => self.secondary_held,
        }
    }

    pub fn any_key_held(&self, keys: &[SimKey]) -> bool {
        keys.iter().any(|k| self.key_held(*k))
    }

    /// Consume the accumulated pointer delta for this tick.
    pub fn take_pointer_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pointer_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = SimInput::new();
        input.press(SimKey::KeyW);
        assert!(input.key_held(SimKey::KeyW));
        input.release(SimKey::KeyW);
        assert!(!input.key_held(SimKey::KeyW));
    }

    #[test]
    fn set_key_mirrors_element_state() {
        let mut input = SimInput::new();
        input.set_key(SimKey::ArrowLeft, true);
        assert!(input.key_held(SimKey::ArrowLeft));
        input.set_key(SimKey::ArrowLeft, false);
        assert!(!input.key_held(SimKey::ArrowLeft));
    }

    #[test]
    fn take_pointer_delta_clears() {
        let mut input = SimInput::new();
        input.pointer_delta = Vec2::new(3.0, -1.0);
        assert_eq!(input.take_pointer_delta(), Vec2::new(3.0, -1.0));
        assert_eq!(input.pointer_delta, Vec2::ZERO);
    }
}
