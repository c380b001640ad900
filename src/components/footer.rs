use crate::styles::Theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of key hints
    ///
    /// `text` is a list of `label: keys` pairs separated by `" | "`; labels
    /// and keys get different styles.
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) -> Result<u16> {
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", theme.muted_style()));
            }

            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", label),
                    theme.title_style(),
                ));
                spans.push(Span::styled(
                    keys.to_string(),
                    theme.emphasis_style().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(part.to_string(), theme.text_style()));
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style())
            .border_type(theme.border_type(false));

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }
}
