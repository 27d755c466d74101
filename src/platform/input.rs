//! Keyboard state and bindings

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical game inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// Key names (as reported by `KeyboardEvent.key`) bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub fire: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        fn keys(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }

        Self {
            left: keys(&["ArrowLeft", "a"]),
            right: keys(&["ArrowRight", "d"]),
            up: keys(&["ArrowUp", "w"]),
            down: keys(&["ArrowDown", "s"]),
            // Old browsers report the space bar as "Spacebar"
            fire: keys(&[" ", "Spacebar"]),
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[String] {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Fire => &self.fire,
        }
    }

    /// Reverse lookup, used to decide whether a key event belongs to the game
    pub fn action_for(&self, key: &str) -> Option<Action> {
        [
            Action::Left,
            Action::Right,
            Action::Up,
            Action::Down,
            Action::Fire,
        ]
        .into_iter()
        .find(|&action| self.keys_for(action).iter().any(|k| k == key))
    }
}

/// Pressed/released state of every key seen so far.
///
/// Written by key listeners between frames, read once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_string(), pressed);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release everything (window lost focus, level restarted)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Names of the keys currently held
    pub fn pressed_keys(&self) -> HashSet<&str> {
        self.keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn is_action_held(&self, bindings: &KeyBindings, action: Action) -> bool {
        bindings.keys_for(action).iter().any(|k| self.is_pressed(k))
    }

    /// Snapshot for one simulation tick
    pub fn tick_input(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            left: self.is_action_held(bindings, Action::Left),
            right: self.is_action_held(bindings, Action::Right),
            up: self.is_action_held(bindings, Action::Up),
            down: self.is_action_held(bindings, Action::Down),
            fire: self.is_action_held(bindings, Action::Fire),
        }
    }
}
