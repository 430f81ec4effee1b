//! Keyboard input tracking
//!
//! Key events arrive asynchronously with respect to the frame loop. They only
//! ever flip held flags or latch the one-shot confirm; the loop samples a
//! [`TickInput`] snapshot once per tick.

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Confirm,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "Enter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Held-key flags plus a latched confirm
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    confirm: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Confirm => self.confirm = true,
        }
    }

    /// Releasing confirm does nothing; it stays latched until consumed
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Confirm => {}
        }
    }

    /// Convenience for raw DOM key names. Returns false for unmapped keys.
    pub fn key_down_named(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        self.key_down(key);
        true
    }

    pub fn key_up_named(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        self.key_up(key);
        true
    }

    /// Input for the next tick without consuming the confirm latch
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            confirm: self.confirm,
        }
    }

    /// Input for the next tick; the confirm latch is cleared
    pub fn take(&mut self) -> TickInput {
        let input = self.snapshot();
        self.confirm = false;
        input
    }
}
