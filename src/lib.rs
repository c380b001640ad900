//! quizdeck - multiple-choice quizzes in the terminal
//!
//! The quiz core (`quiz`) and the theme preference (`preference`) have no
//! terminal dependency; the remaining modules render them with ratatui.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod preference;
pub mod quiz;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use preference::{
    FileStore, MemoryStore, PreferenceStore, ThemeMode, ThemePreference, ThemeTarget,
};
pub use quiz::{Grade, Question, QuestionSet, QuizController, QuizEvent, QuizView, Stage};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
