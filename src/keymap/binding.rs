//! Keybinding: one keystroke mapped to one command

use super::command::Command;
use super::types::Keystroke;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Display string like "Cmd+Shift+K" for menus and the keybinding sheet
    pub fn display_string(&self) -> String {
        self.keystroke.to_string()
    }
}
