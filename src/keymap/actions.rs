//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Option cursor ============
    /// Highlight the option above
    MoveUp,
    /// Highlight the option below
    MoveDown,
    /// Choose the highlighted option, or press the visible forward button
    Confirm,

    // ============ Quiz navigation ============
    /// Previous question
    Previous,
    /// Next question / see result
    Next,
    /// Restart the quiz from the result view
    Retry,
    /// Open the answer review from the result view
    Review,
    /// Leave the review, or close the help overlay
    Cancel,

    // ============ Review list ============
    ScrollUp,
    ScrollDown,

    // ============ Global ============
    /// Switch between light and dark theme
    ToggleTheme,
    /// Show help overlay
    Help,
    /// Quit the application
    Quit,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Highlight previous option",
            Action::MoveDown => "Highlight next option",
            Action::Confirm => "Choose option / continue",
            Action::Previous => "Previous question",
            Action::Next => "Next question",
            Action::Retry => "Retry quiz",
            Action::Review => "Review answers",
            Action::Cancel => "Back",
            Action::ScrollUp => "Scroll up",
            Action::ScrollDown => "Scroll down",
            Action::ToggleTheme => "Toggle light/dark theme",
            Action::Help => "Show help",
            Action::Quit => "Quit",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::Confirm => "Answering",
            Action::Previous | Action::Next | Action::Retry | Action::Review | Action::Cancel => {
                "Quiz"
            }
            Action::ScrollUp | Action::ScrollDown => "Review",
            Action::ToggleTheme | Action::Help | Action::Quit => "Global",
        }
    }

    /// Categories in the order the help overlay lists them
    pub fn categories() -> &'static [&'static str] {
        &["Answering", "Quiz", "Review", "Global"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::Retry.description(), "Retry quiz");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Answering");
        assert_eq!(Action::Review.category(), "Quiz");
        assert_eq!(Action::ToggleTheme.category(), "Global");
        assert!(Action::categories().contains(&Action::ScrollDown.category()));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::ToggleTheme).unwrap();
        assert_eq!(json, "\"toggle_theme\"");
        let action: Action = serde_json::from_str("\"scroll_down\"").unwrap();
        assert_eq!(action, Action::ScrollDown);
    }
}
