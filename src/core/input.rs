//! # Input Snapshots
//!
//! Per-tick keyboard and mouse state with edge detection. `collect` is
//! called once per fixed step by the engine; queries then compare the
//! current snapshot against the previous one.

use macroquad::input::{
    get_keys_down, is_mouse_button_down, mouse_position, mouse_wheel, KeyCode, MouseButton,
};
use std::collections::HashSet;

/// Keyboard state snapshot.
#[derive(Debug, Default)]
pub struct Keyboard {
    down: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl Keyboard {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current macroquad key state. Called by the engine at
    /// the start of each fixed step.
    pub fn collect(&mut self) {
        self.apply(get_keys_down());
    }

    // Snapshot injection point; lets the edge logic run without a window.
    pub(crate) fn apply(&mut self, down: HashSet<KeyCode>) {
        self.previous = std::mem::replace(&mut self.down, down);
    }

    /// True while `key` is held.
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// True while both keys are held (chords such as Ctrl+S).
    pub fn pressed_both(&self, a: KeyCode, b: KeyCode) -> bool {
        self.pressed(a) && self.pressed(b)
    }

    /// True only on the step `key` went down.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.down.contains(&key) && !self.previous.contains(&key)
    }

    /// True only on the step `key` went down while `modifier` was held.
    pub fn just_pressed_with(&self, key: KeyCode, modifier: KeyCode) -> bool {
        self.pressed(modifier) && self.just_pressed(key)
    }

    /// True only on the step `key` was released.
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.previous.contains(&key) && !self.down.contains(&key)
    }
}

/// Mouse state snapshot.
#[derive(Debug, Default)]
pub struct Mouse {
    position: (f32, f32),
    previous_position: (f32, f32),
    wheel: (f32, f32),
    down: [bool; 3],
    previous_down: [bool; 3],
}

impl Mouse {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current macroquad mouse state.
    pub fn collect(&mut self) {
        let down = [
            is_mouse_button_down(MouseButton::Left),
            is_mouse_button_down(MouseButton::Right),
            is_mouse_button_down(MouseButton::Middle),
        ];
        self.apply(mouse_position(), mouse_wheel(), down);
    }

    pub(crate) fn apply(&mut self, position: (f32, f32), wheel: (f32, f32), down: [bool; 3]) {
        self.previous_position = self.position;
        self.position = position;
        self.wheel = wheel;
        self.previous_down = self.down;
        self.down = down;
    }

    /// Cursor position in screen pixels.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Cursor movement since the previous step.
    pub fn delta(&self) -> (f32, f32) {
        (
            self.position.0 - self.previous_position.0,
            self.position.1 - self.previous_position.1,
        )
    }

    /// Scroll wheel movement this step.
    pub fn wheel(&self) -> (f32, f32) {
        self.wheel
    }

    /// True while `button` is held.
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.down[Self::index(button)]
    }

    /// True only on the step `button` went down.
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        let i = Self::index(button);
        self.down[i] && !self.previous_down[i]
    }

    /// True only on the step `button` was released.
    pub fn just_released(&self, button: MouseButton) -> bool {
        let i = Self::index(button);
        self.previous_down[i] && !self.down[i]
    }

    fn index(button: MouseButton) -> usize {
        match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[KeyCode]) -> HashSet<KeyCode> {
        list.iter().copied().collect()
    }

    #[test]
    fn keyboard_edges() {
        let mut keyboard = Keyboard::new();
        keyboard.apply(keys(&[KeyCode::A]));
        assert!(keyboard.pressed(KeyCode::A));
        assert!(keyboard.just_pressed(KeyCode::A));
        assert!(!keyboard.just_released(KeyCode::A));

        keyboard.apply(keys(&[KeyCode::A]));
        assert!(keyboard.pressed(KeyCode::A));
        assert!(!keyboard.just_pressed(KeyCode::A));

        keyboard.apply(keys(&[]));
        assert!(!keyboard.pressed(KeyCode::A));
        assert!(keyboard.just_released(KeyCode::A));
    }

    #[test]
    fn keyboard_chords() {
        let mut keyboard = Keyboard::new();
        keyboard.apply(keys(&[KeyCode::LeftControl]));
        keyboard.apply(keys(&[KeyCode::LeftControl, KeyCode::S]));
        assert!(keyboard.pressed_both(KeyCode::LeftControl, KeyCode::S));
        assert!(keyboard.just_pressed_with(KeyCode::S, KeyCode::LeftControl));
        assert!(!keyboard.just_pressed_with(KeyCode::LeftControl, KeyCode::S));
    }

    #[test]
    fn mouse_edges_and_delta() {
        let mut mouse = Mouse::new();
        mouse.apply((10.0, 20.0), (0.0, 0.0), [false, false, false]);
        mouse.apply((13.0, 24.0), (0.0, 1.0), [true, false, false]);
        assert_eq!(mouse.position(), (13.0, 24.0));
        assert_eq!(mouse.delta(), (3.0, 4.0));
        assert_eq!(mouse.wheel(), (0.0, 1.0));
        assert!(mouse.pressed(MouseButton::Left));
        assert!(mouse.just_pressed(MouseButton::Left));

        mouse.apply((13.0, 24.0), (0.0, 0.0), [false, false, false]);
        assert!(mouse.just_released(MouseButton::Left));
        assert!(!mouse.pressed(MouseButton::Left));
    }
}
