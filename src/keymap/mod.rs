//! Configurable keyboard mapping
//!
//! A data-driven keybinding table that:
//! - Maps keystrokes to editor commands
//! - Supports platform-specific modifier handling (Cmd on macOS, Ctrl elsewhere)
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup() → Command → edit::apply_command
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::{Command, Marker, Snippet};
pub use config::{load_keymap_file, parse_keymap_yaml, KeymapError};
pub use defaults::{default_bindings, load_default_keymap};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
