//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let current_platform = get_current_platform();
    let mut bindings = Vec::new();

    for entry in config.bindings {
        // Skip if platform-specific and doesn't match current platform
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "cmd+shift+k" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let parts: Vec<&str> = key_str.split('+').collect();

    if parts.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in parts {
        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            "cmd" => {
                // Platform primary modifier slot
                mods = mods | Modifiers::cmd();
            }
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            "meta" | "super" | "win" => {
                mods = mods | Modifiers::META;
            }
            _ => {
                // This should be the key itself
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    // Single character
    if key.chars().count() == 1 {
        let c = key.chars().next().unwrap();
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    // Named keys
    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),

        "f1" => Ok(KeyCode::F(1)),
        "f2" => Ok(KeyCode::F(2)),
        "f3" => Ok(KeyCode::F(3)),
        "f4" => Ok(KeyCode::F(4)),
        "f5" => Ok(KeyCode::F(5)),
        "f6" => Ok(KeyCode::F(6)),
        "f7" => Ok(KeyCode::F(7)),
        "f8" => Ok(KeyCode::F(8)),
        "f9" => Ok(KeyCode::F(9)),
        "f10" => Ok(KeyCode::F(10)),
        "f11" => Ok(KeyCode::F(11)),
        "f12" => Ok(KeyCode::F(12)),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}
