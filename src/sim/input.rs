//! Keyboard input snapshot
//!
//! The host mutates key state asynchronously; the simulation reads a copy
//! once per tick.

use std::collections::HashMap;

/// Key identifiers as reported by the browser (`KeyboardEvent.key`)
pub mod keys {
    pub const THRUST: &str = " ";
    pub const W: &str = "w";
    pub const S: &str = "s";
    pub const A: &str = "a";
    pub const D: &str = "d";
    pub const SHIFT: &str = "Shift";
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
}

/// Pressed/released state for every key the host has seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot with the given keys held down
    pub fn with_pressed<'a>(pressed: impl IntoIterator<Item = &'a str>) -> Self {
        let mut input = Self::new();
        for key in pressed {
            input.set(key, true);
        }
        input
    }

    /// Record a key event
    pub fn set(&mut self, key: &str, pressed: bool) {
        // Letter keys arrive upper-cased while Shift is held
        let key = if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key.to_string()
        };
        self.keys.insert(key, pressed);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Copy of the current state for one tick
    pub fn snapshot(&self) -> InputState {
        self.clone()
    }

    /// -1, 0 or +1 from a pair of opposing keys
    pub fn axis(&self, negative: &str, positive: &str) -> f32 {
        let mut value = 0.0;
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        if self.is_pressed(positive) {
            value += 1.0;
        }
        value
    }
}
