//! Keyboard state tracking
//!
//! Browser key events arrive asynchronously between frames. `KeyboardState`
//! folds them into held keys plus latched one-shot presses, and the loop
//! takes one `FrameInput` snapshot per frame.

use std::collections::HashSet;

use crate::sim::FrameInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Down,
    Quit,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a game key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "Right" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "Up" | "w" | "W" | " " | "Spacebar" => Some(Key::Jump),
            "ArrowDown" | "Down" | "s" | "S" => Some(Key::Down),
            "Escape" | "Esc" => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Held keys and latched presses since the last snapshot
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Physical keys currently down, by normalized name
    held: HashSet<String>,
    jump_latched: bool,
    quit_latched: bool,
}

/// Shift changes the case of letter keys; treat both cases as one key
fn normalize(name: &str) -> String {
    if name.chars().count() == 1 {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns the game key if the name is bound.
    ///
    /// Auto-repeat presses of a key that is already down do not latch
    /// another jump.
    pub fn key_down(&mut self, name: &str) -> Option<Key> {
        let key = Key::from_key_name(name)?;
        let fresh = self.held.insert(normalize(name));
        if fresh {
            match key {
                Key::Jump => self.jump_latched = true,
                Key::Quit => self.quit_latched = true,
                _ => {}
            }
        }
        Some(key)
    }

    /// Record a key release
    pub fn key_up(&mut self, name: &str) -> Option<Key> {
        let key = Key::from_key_name(name)?;
        self.held.remove(&normalize(name));
        Some(key)
    }

    /// Forget every held key (focus lost; releases will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// True while any physical key bound to `key` is down
    pub fn is_held(&self, key: Key) -> bool {
        self.held
            .iter()
            .any(|name| Key::from_key_name(name) == Some(key))
    }

    /// Input for the next frame; clears latched presses
    pub fn snapshot(&mut self) -> FrameInput {
        let input = FrameInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            down: self.is_held(Key::Down),
            jump_pressed: self.jump_latched,
            quit: self.quit_latched,
        };
        self.jump_latched = false;
        input
    }
}
