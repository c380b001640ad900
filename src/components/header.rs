use crate::styles::Theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Common header component for all quiz views
pub struct Header;

impl Header {
    /// Render a header with title and a one-line status on the right
    ///
    /// # Arguments
    /// * `title` - The quiz title
    /// * `status` - Right-aligned status text (e.g. "Question 2 of 8")
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        status: &str,
        theme: &Theme,
    ) -> Result<u16> {
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused_style())
            .border_type(theme.border_type(false))
            .title(format!(" {} ", title))
            .title_style(theme.title_style())
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let status_para = Paragraph::new(status.to_string())
            .style(theme.text_style())
            .alignment(Alignment::Right);
        frame.render_widget(status_para, inner_area);

        Ok(area.height)
    }
}
