//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Action, Keymap};
use crate::styles::Theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        keymap: &Keymap,
        config_path: &str,
        theme: &Theme,
    ) -> Result<()> {
        let popup_area = center_popup(area, 70, 85);
        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(theme.border_focused_style())
            .style(theme.background_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(inner_area);

        frame.render_widget(
            Paragraph::new(binding_lines(keymap, theme)).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        ))
        .style(theme.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }
}

/// One section per category, one line per action with every key bound to it
fn binding_lines<'a>(keymap: &Keymap, theme: &Theme) -> Vec<Line<'a>> {
    let bindings = keymap.all_bindings();
    let mut lines = vec![Line::from("")];

    for category in Action::categories() {
        let mut actions: Vec<Action> = Vec::new();
        for binding in bindings.iter().filter(|b| b.action.category() == *category) {
            if !actions.contains(&binding.action) {
                actions.push(binding.action);
            }
        }
        if actions.is_empty() {
            continue;
        }

        lines.push(Line::from(Span::styled(
            format!("  {} ", category),
            theme.label_style(),
        )));
        if *category == "Answering" {
            lines.push(key_line("1-9".to_string(), "Choose option by number", theme));
        }
        for action in actions {
            lines.push(key_line(
                keymap.keys_display_for_action(action),
                action.description(),
                theme,
            ));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn key_line<'a>(keys: String, description: &'static str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("    {:16}", keys),
            theme.emphasis_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, theme.text_style()),
    ])
}
