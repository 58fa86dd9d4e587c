//! Default keybindings
//!
//! The standard bindings ship as an embedded keymap.yaml; a user file can
//! be merged on top, overriding per keystroke.

use std::path::Path;

use super::binding::Keybinding;
use super::command::{Command, Marker, Snippet};
use super::config::load_keymap_file;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Load the default keymap, optionally merging a user keymap file on top.
///
/// Falls back to the hardcoded table if the embedded YAML fails to parse;
/// a broken user file is logged and ignored.
pub fn load_default_keymap(user_path: Option<&Path>) -> Vec<Keybinding> {
    let mut bindings = match super::config::parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(path) = user_path {
        match load_keymap_file(path) {
            Ok(user_bindings) => {
                tracing::info!(
                    "Merging user keymap from {} ({} bindings)",
                    path.display(),
                    user_bindings.len()
                );
                bindings.extend(user_bindings);
            }
            Err(e) => {
                tracing::warn!("Failed to load user keymap from {}: {}", path.display(), e);
            }
        }
    }

    bindings
}

/// Hardcoded default bindings, the fallback when no YAML is usable.
///
/// The `cmd` slot resolves to the platform primary modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let alt = Modifiers::ALT;

    vec![
        // Buffer mutations
        Keybinding::new(Keystroke::char_with_mods('z', cmd), Command::Undo),
        Keybinding::new(Keystroke::char_with_mods('z', cmd_shift), Command::Redo),
        Keybinding::new(Keystroke::char_with_mods('k', cmd_shift), Command::DeleteLine),
        Keybinding::new(Keystroke::char_with_mods('d', cmd), Command::DuplicateLine),
        Keybinding::new(Keystroke::new(KeyCode::Up, alt), Command::MoveLineUp),
        Keybinding::new(Keystroke::new(KeyCode::Down, alt), Command::MoveLineDown),
        Keybinding::new(Keystroke::new(KeyCode::Tab, cmd), Command::IndentLines),
        Keybinding::new(
            Keystroke::new(KeyCode::Tab, cmd | Modifiers::SHIFT),
            Command::OutdentLines,
        ),
        Keybinding::new(
            Keystroke::char_with_mods('b', cmd),
            Command::Wrap(Marker::Bold),
        ),
        Keybinding::new(
            Keystroke::char_with_mods('i', cmd),
            Command::Wrap(Marker::Italic),
        ),
        Keybinding::new(
            Keystroke::char_with_mods('e', cmd),
            Command::Wrap(Marker::Code),
        ),
        Keybinding::new(
            Keystroke::char_with_mods('x', cmd_shift),
            Command::Wrap(Marker::Strikethrough),
        ),
        Keybinding::new(
            Keystroke::char_with_mods('h', cmd_shift),
            Command::Insert(Snippet::HorizontalRule),
        ),
        Keybinding::new(
            Keystroke::char_with_mods('c', cmd_shift),
            Command::Insert(Snippet::CodeFence),
        ),
        // UI toggles
        Keybinding::new(Keystroke::char_with_mods('f', cmd), Command::OpenSearch),
        Keybinding::new(Keystroke::char_with_mods('g', cmd), Command::OpenGotoLine),
        Keybinding::new(Keystroke::char_with_mods('a', cmd), Command::SelectAll),
        // Derived side effects
        Keybinding::new(
            Keystroke::char_with_mods('w', cmd_shift),
            Command::ShowDocumentStats,
        ),
    ]
}
