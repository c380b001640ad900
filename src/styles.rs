//! Theme and style system for quizdeck
//!
//! Provides the colour palette the screens draw with. The palette is owned by
//! the app and passed down to renderers; switching between light and dark goes
//! through [`crate::preference::ThemePreference`], which applies the mode here.

use crate::preference::{ThemeMode, ThemeTarget};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// List selection indicator shown next to the highlighted option
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Palette selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl From<ThemeMode> for ThemeType {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemeType::Light,
            ThemeMode::Dark => ThemeType::Dark,
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub theme_type: ThemeType,

    // === Primary Colors ===
    /// Main accent color (borders, titles, progress bar)
    pub primary: Color,
    /// Secondary accent (letter labels)
    pub secondary: Color,

    // === Semantic Colors ===
    /// Correct answers
    pub success: Color,
    /// Unanswered questions in the review
    pub warning: Color,
    /// Wrong answers
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: Color::Cyan,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            // Darker variants for light backgrounds
            primary: Color::Blue,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,

            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::White,
        }
    }

    /// No-color theme - style helpers fall back to modifiers only
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,

            primary: Color::Reset,
            secondary: Color::Reset,

            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,

            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,

            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    pub fn is_no_color(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn emphasis_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Letter labels in front of options
    pub fn label_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.warning)
    }

    /// Wrong answers; crossed out so the mark survives without colour
    pub fn error_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::CROSSED_OUT);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    pub fn border_type(&self, focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    /// Style for the highlighted option row
    pub fn highlight_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().bg(self.background).fg(self.text)
    }

    /// Filled part of the progress gauge
    pub fn gauge_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        Style::default().fg(self.primary).bg(self.background)
    }
}

impl ThemeTarget for Theme {
    /// Swap to the palette for `mode`; a no-color palette stays colourless
    fn apply(&mut self, mode: ThemeMode) {
        if self.is_no_color() {
            return;
        }
        *self = Theme::new(mode.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_switches_palette() {
        let mut theme = Theme::light();
        theme.apply(ThemeMode::Dark);
        assert_eq!(theme.theme_type, ThemeType::Dark);
        assert_eq!(theme, Theme::dark());
        theme.apply(ThemeMode::Light);
        assert_eq!(theme, Theme::light());
    }

    #[test]
    fn test_no_color_ignores_apply() {
        let mut theme = Theme::no_color();
        theme.apply(ThemeMode::Dark);
        assert_eq!(theme.theme_type, ThemeType::NoColor);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        let s = t.highlight_style();
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
        assert!(t.error_style().fg.is_none());
    }

    #[test]
    fn test_light_and_dark_backgrounds_differ() {
        assert_ne!(Theme::light().background, Theme::dark().background);
    }
}
