//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow every preset binding for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action`
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// All keys bound to `action`, joined with "/"
    pub fn keys_display_for_action(&self, action: Action) -> String {
        let keys: Vec<String> = self
            .all_bindings()
            .into_iter()
            .filter(|b| b.action == action)
            .map(|b| b.display())
            .collect();
        if keys.is_empty() {
            format!("{:?}", action)
        } else {
            keys.join("/")
        }
    }

    /// Get the display string for option navigation keys (up/down)
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }
}
