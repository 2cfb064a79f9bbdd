//! Keyboard and mouse key-state table
//!
//! Keys are identified by their lower-cased physical key name ("keyw",
//! "space", "shiftleft"). Mouse buttons use a small fixed set of names so
//! they can share the same table and be bound like keys.

use std::collections::HashMap;
use tracing::{debug, warn};

/// Mouse button names indexed by host button number (0=left, 1=middle, 2=right)
pub const MOUSE_BUTTON_NAMES: [&str; 3] = ["mouseleft", "mousemiddle", "mouseright"];

// Modifier pseudo-names and the physical keys they stand for
const MODIFIERS: [(&str, [&str; 2]); 3] = [
    ("shift", ["shiftleft", "shiftright"]),
    ("alt", ["altleft", "altright"]),
    ("control", ["controlleft", "controlright"]),
];

/// Canonical form of a physical key name
pub fn canonical_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Canonical names a trigger key expands to
///
/// The modifier pseudo-names match both physical sides.
pub fn expand_key(name: &str) -> Vec<String> {
    let key = canonical_key(name);
    match MODIFIERS.iter().find(|(modifier, _)| *modifier == key) {
        Some((_, sides)) => sides.iter().map(|side| side.to_string()).collect(),
        None => vec![key],
    }
}

/// Name of a mouse button, None for indices outside the fixed set
pub fn mouse_button_name(index: usize) -> Option<&'static str> {
    MOUSE_BUTTON_NAMES.get(index).copied()
}

/// "Is this input currently down" for every key and mouse button seen so far
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    down: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, pressed: bool) {
        let key = canonical_key(key);
        debug!("Key {} {}", key, if pressed { "down" } else { "up" });
        self.down.insert(key, pressed);
    }

    /// Record a mouse button transition, unknown buttons are ignored
    pub fn set_mouse(&mut self, index: usize, pressed: bool) {
        match mouse_button_name(index) {
            Some(name) => self.set(name, pressed),
            None => warn!("Ignoring unknown mouse button {}", index),
        }
    }

    /// Expects a canonical name
    pub fn is_down(&self, key: &str) -> bool {
        self.down.get(key).copied().unwrap_or(false)
    }

    pub fn any_down<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        keys.into_iter().any(|key| self.is_down(key))
    }

    /// Mark everything as released (e.g. after the window loses focus)
    pub fn clear(&mut self) {
        if !self.down.is_empty() {
            debug!("Releasing {} tracked keys", self.down.len());
        }
        self.down.clear();
    }
}
