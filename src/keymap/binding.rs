//! KeyBinding struct for mapping keys to actions
//!
//! Key strings look like "j", "down", "ctrl+c", "shift+tab".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event
    ///
    /// Shift is ignored for printable characters since terminals report
    /// `?` as `Shift+?` on some layouts.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = parse_key_string(&self.key) else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        if matches!(code, KeyCode::Char(_)) {
            parsed.modifiers == (modifiers - KeyModifiers::SHIFT)
        } else {
            parsed.modifiers == modifiers
        }
    }

    /// Display string for this binding (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    // "+" on its own is a key, not a separator
    let (modifier_part, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.trim() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key.trim() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(format!("Unknown key: {}", other)),
                }
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+c" -> "Ctrl+C")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "pageup" | "pgup" => "PgUp".to_string(),
                "pagedown" | "pgdn" => "PgDn".to_string(),
                _ if part.len() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
