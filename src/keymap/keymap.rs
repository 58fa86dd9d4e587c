//! Keymap: a flat table from keystroke to command
//!
//! Lookup is a single hash probe; later insertions for the same keystroke
//! override earlier ones, which is how user bindings shadow defaults.

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    table: HashMap<Keystroke, Command>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap from bindings, later entries overriding earlier ones
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding, overriding any existing one for the same keystroke
    pub fn add_binding(&mut self, binding: Keybinding) {
        self.table.insert(binding.keystroke, binding.command);
    }

    /// Look up the command bound to a keystroke
    pub fn lookup(&self, keystroke: Keystroke) -> Option<Command> {
        self.table.get(&keystroke).copied()
    }

    /// Number of bound keystrokes
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The keystroke currently bound to a command, if any (for UI display)
    pub fn keystroke_for(&self, command: Command) -> Option<Keystroke> {
        self.table
            .iter()
            .find(|(_, c)| **c == command)
            .map(|(k, _)| *k)
    }
}
