//! Preset keymaps: Standard and Vim
//!
//! Each preset binds every action at least once.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrow keys, Enter, Esc
    #[default]
    Standard,
    /// hjkl navigation on top of the arrows
    Vim,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

/// Bindings both presets share
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("space", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("r", Action::Retry),
        KeyBinding::new("v", Action::Review),
        KeyBinding::new("t", Action::ToggleTheme),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("pageup", Action::ScrollUp),
        KeyBinding::new("pagedown", Action::ScrollDown),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::Previous),
        KeyBinding::new("p", Action::Previous),
        KeyBinding::new("right", Action::Next),
        KeyBinding::new("n", Action::Next),
    ];
    bindings.extend(common_bindings());
    bindings
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::Previous),
        KeyBinding::new("left", Action::Previous),
        KeyBinding::new("l", Action::Next),
        KeyBinding::new("right", Action::Next),
        KeyBinding::new("ctrl+u", Action::ScrollUp),
        KeyBinding::new("ctrl+d", Action::ScrollDown),
    ];
    bindings.extend(common_bindings());
    bindings
}
