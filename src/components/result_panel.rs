use crate::quiz::grade::Grade;
use crate::quiz::view::ResultView;
use crate::styles::Theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Draws the score summary shown once the quiz is finished
pub struct ResultPanel;

impl ResultPanel {
    pub fn render(frame: &mut Frame, area: Rect, view: &ResultView, theme: &Theme) -> Result<()> {
        let grade_style = match view.grade {
            Grade::A | Grade::B => theme.success_style(),
            Grade::C | Grade::D => theme.warning_style(),
            Grade::E => theme.error_style(),
        };

        let lines = vec![
            Line::from(""),
            Line::styled("Quiz complete!", theme.title_style()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    view.score.to_string(),
                    theme.emphasis_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" / ", theme.muted_style()),
                Span::styled(view.total.to_string(), theme.text_style()),
            ]),
            Line::styled(format!("{}%", view.result_percent), theme.text_style()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Grade: ", theme.text_style()),
                Span::styled(
                    view.grade.to_string(),
                    grade_style.add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::styled(view.message, theme.text_style()),
        ];

        let block = Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(theme.border_focused_style())
            .border_type(theme.border_type(false));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
