//! Keyboard input with per-frame press/release edges

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical controls the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    /// Restart after a round ends
    Confirm,
    Quit,
}

/// Read-only view of the current control state
pub trait InputSource {
    /// Key is down this frame
    fn is_key_held(&self, key: Key) -> bool;
    /// Key went down this frame
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Key went up this frame
    fn is_key_released(&self, key: Key) -> bool;
}

/// Current and previous frame key sets.
///
/// The platform feeds key transitions with [`KeyboardState::set_key`] and
/// calls [`KeyboardState::end_frame`] once the frame has been simulated.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    current: HashSet<Key>,
    previous: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            self.current.insert(key);
        } else {
            self.current.remove(&key);
        }
    }

    /// Roll this frame's keys into the previous-frame set
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.current);
    }
}

impl InputSource for KeyboardState {
    fn is_key_held(&self, key: Key) -> bool {
        self.current.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }
}

/// Sample held keys and press/release edges into one frame of controls
pub fn sample_tick_input<I: InputSource + ?Sized>(source: &I) -> TickInput {
    TickInput {
        rotate_left: source.is_key_held(Key::RotateLeft),
        rotate_right: source.is_key_held(Key::RotateRight),
        thrust: source.is_key_held(Key::Thrust),
        thrust_released: source.is_key_released(Key::Thrust),
        fire: source.is_key_pressed(Key::Fire),
        confirm: source.is_key_pressed(Key::Confirm),
        quit: source.is_key_pressed(Key::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_an_edge() {
        let mut kb = KeyboardState::new();
        kb.set_key(Key::Fire, true);
        assert!(kb.is_key_pressed(Key::Fire));
        assert!(kb.is_key_held(Key::Fire));

        kb.end_frame();
        assert!(!kb.is_key_pressed(Key::Fire));
        assert!(kb.is_key_held(Key::Fire));
    }

    #[test]
    fn test_release_is_an_edge() {
        let mut kb = KeyboardState::new();
        kb.set_key(Key::Thrust, true);
        kb.end_frame();
        kb.set_key(Key::Thrust, false);
        assert!(kb.is_key_released(Key::Thrust));
        assert!(!kb.is_key_held(Key::Thrust));

        kb.end_frame();
        assert!(!kb.is_key_released(Key::Thrust));
    }

    #[test]
    fn test_sample_uses_edges_for_fire() {
        let mut kb = KeyboardState::new();
        kb.set_key(Key::Fire, true);
        kb.set_key(Key::Thrust, true);
        let first = sample_tick_input(&kb);
        assert!(first.fire && first.thrust);

        kb.end_frame();
        kb.set_key(Key::Thrust, false);
        let second = sample_tick_input(&kb);
        assert!(!second.fire);
        assert!(!second.thrust && second.thrust_released);
    }
}
