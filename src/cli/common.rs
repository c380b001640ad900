//! Common CLI utilities shared across all CLI commands.
//!
//! This module provides:
//! - `PreferenceContext`: the persisted theme preference, loaded without a TUI
//! - Output helpers: `print_success`, `print_error`, `print_warning`, `print_info`

use crate::preference::{FileStore, ThemePreference};
use crate::styles::Theme;
use std::path::PathBuf;

/// Theme preference opened from the preferences file.
///
/// The palette is only a placeholder target here; the CLI has nothing to
/// repaint, but the preference applies every change it persists.
pub struct PreferenceContext {
    pub preference: ThemePreference<FileStore>,
    pub theme: Theme,
    /// Path to the preferences file
    pub path: PathBuf,
}

impl PreferenceContext {
    pub fn load() -> Self {
        let path = crate::utils::get_preferences_path();
        let mut theme = Theme::default();
        let preference = ThemePreference::init(FileStore::new(&path), &mut theme);
        Self {
            preference,
            theme,
            path,
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix.
pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}
