// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The latch state machine: held keys, held buttons, last pointer position.
//!
//! ## Minimal example
//!
//! ```
//! use easel_input::{InputEvent, InputState, KeyCode};
//! let mut s = InputState::new();
//! assert!(s.apply(InputEvent::KeyPressed(KeyCode::SPACE)));
//! assert!(!s.apply(InputEvent::KeyPressed(KeyCode::SPACE)));
//! assert!(s.is_key_pressed(KeyCode::SPACE));
//! assert!(s.apply(InputEvent::KeyReleased(KeyCode::SPACE)));
//! assert!(!s.is_key_pressed(KeyCode::SPACE));
//! ```

use std::collections::BTreeSet;

use kurbo::Point;

use crate::keys::{KeyCode, MouseButton, MouseButtons};

/// A decoded event from the presentation host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down (repeats are harmless).
    KeyPressed(KeyCode),
    /// A key went up.
    KeyReleased(KeyCode),
    /// A mouse button went down.
    ButtonPressed(MouseButton),
    /// A mouse button went up.
    ButtonReleased(MouseButton),
    /// The pointer moved to a new position in arena coordinates.
    PointerMoved(Point),
}

/// Currently-true input facts. There is no history: each event overwrites what it touches.
#[derive(Clone, Debug, PartialEq)]
pub struct InputState {
    keys: BTreeSet<KeyCode>,
    buttons: MouseButtons,
    pointer: Point,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Nothing held, pointer at the origin.
    pub fn new() -> Self {
        Self {
            keys: BTreeSet::new(),
            buttons: MouseButtons::empty(),
            pointer: Point::ORIGIN,
        }
    }

    /// Fold one event into the state. Returns whether anything observable changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::KeyPressed(key) => self.keys.insert(key),
            InputEvent::KeyReleased(key) => self.keys.remove(&key),
            InputEvent::ButtonPressed(button) => self.set_button(button, true),
            InputEvent::ButtonReleased(button) => self.set_button(button, false),
            InputEvent::PointerMoved(pos) => {
                let changed = self.pointer != pos;
                self.pointer = pos;
                changed
            }
        }
    }

    fn set_button(&mut self, button: MouseButton, held: bool) -> bool {
        let Some(bit) = button.latch_bit() else {
            return false;
        };
        let before = self.buttons;
        self.buttons.set(bit, held);
        before != self.buttons
    }

    /// Whether `key` is currently held.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Held keys in ascending code order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }

    /// Whether `button` is currently held. Buttons other than left and right are never latched.
    pub fn is_button_held(&self, button: MouseButton) -> bool {
        button
            .latch_bit()
            .is_some_and(|bit| self.buttons.contains(bit))
    }

    /// The latched button set.
    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Last pointer position reported by the host.
    pub fn pointer(&self) -> Point {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_independent() {
        let mut s = InputState::new();
        let _ = s.apply(InputEvent::KeyPressed(KeyCode::LEFT));
        let _ = s.apply(InputEvent::KeyPressed(KeyCode::UP));
        let _ = s.apply(InputEvent::KeyReleased(KeyCode::LEFT));
        assert!(!s.is_key_pressed(KeyCode::LEFT));
        assert!(s.is_key_pressed(KeyCode::UP));
        assert_eq!(s.pressed_keys().collect::<Vec<_>>(), vec![KeyCode::UP]);
    }

    #[test]
    fn releasing_unheld_key_is_not_a_change() {
        let mut s = InputState::new();
        assert!(!s.apply(InputEvent::KeyReleased(KeyCode::ESCAPE)));
    }

    #[test]
    fn buttons_latch_left_and_right_only() {
        let mut s = InputState::new();
        assert!(s.apply(InputEvent::ButtonPressed(MouseButton::Left)));
        assert!(s.apply(InputEvent::ButtonPressed(MouseButton::Right)));
        assert!(!s.apply(InputEvent::ButtonPressed(MouseButton::Middle)));
        assert!(s.is_button_held(MouseButton::Left));
        assert!(s.is_button_held(MouseButton::Right));
        assert!(!s.is_button_held(MouseButton::Middle));

        assert!(s.apply(InputEvent::ButtonReleased(MouseButton::Left)));
        assert_eq!(s.buttons(), MouseButtons::RIGHT);
    }

    #[test]
    fn pointer_overwrites() {
        let mut s = InputState::new();
        assert!(s.apply(InputEvent::PointerMoved(Point::new(3.0, 4.0))));
        assert!(!s.apply(InputEvent::PointerMoved(Point::new(3.0, 4.0))));
        assert!(s.apply(InputEvent::PointerMoved(Point::new(-1.0, 0.5))));
        assert_eq!(s.pointer(), Point::new(-1.0, 0.5));
    }
}
