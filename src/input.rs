//! Keyboard bindings
//!
//! Maps DOM-style key names onto unit vectors and sums whatever is held into
//! a single velocity request for `MotionEngine::set_velocity`.

use std::collections::BTreeSet;

use glam::Vec2;

use crate::sim::Direction;

/// A recognized steering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
}

impl Key {
    /// Parse a `KeyboardEvent.key` value; unbound keys yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Key::W | Key::ArrowUp => Direction::Up,
            Key::A | Key::ArrowLeft => Direction::Left,
            Key::S | Key::ArrowDown => Direction::Down,
            Key::D | Key::ArrowRight => Direction::Right,
        }
    }

    /// Unit vector this key contributes
    pub fn vector(self) -> Vec2 {
        self.direction().unit()
    }
}

/// Set of currently held steering keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: BTreeSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true if the held set changed
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    /// Record a key release; returns true if the held set changed
    pub fn release(&mut self, key: Key) -> bool {
        self.held.remove(&key)
    }

    /// Drop everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Sum of the held keys' unit vectors (not normalized)
    pub fn velocity(&self) -> Vec2 {
        self.held.iter().map(|key| key.vector()).sum()
    }
}
