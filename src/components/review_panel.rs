use crate::quiz::controller::Verdict;
use crate::quiz::view::{ReviewView, NOT_ANSWERED_LABEL};
use crate::styles::Theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};

/// Draws the per-question review list
pub struct ReviewPanel;

impl ReviewPanel {
    /// `scroll` is the first row shown; it is clamped to the content.
    ///
    /// Returns the largest useful scroll offset for this area, counted in
    /// wrapped rows.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &ReviewView,
        scroll: u16,
        theme: &Theme,
    ) -> Result<u16> {
        let lines: Vec<Line> = view
            .verdicts
            .iter()
            .flat_map(|verdict| verdict_lines(verdict, theme))
            .collect();

        let correct = view.verdicts.iter().filter(|v| v.is_correct).count();
        let block = Block::default()
            .title(format!(
                " Answer review ({}/{} correct) ",
                correct,
                view.verdicts.len()
            ))
            .borders(Borders::ALL)
            .border_style(theme.border_focused_style())
            .border_type(theme.border_type(false))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let row_count = paragraph.line_count(inner.width);
        let max_scroll = u16::try_from(row_count.saturating_sub(usize::from(inner.height)))
            .unwrap_or(u16::MAX);
        let scroll = scroll.min(max_scroll);

        frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);

        if max_scroll > 0 {
            let mut scrollbar_state =
                ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll));
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }
        Ok(max_scroll)
    }
}

fn verdict_lines<'a>(verdict: &Verdict, theme: &Theme) -> Vec<Line<'a>> {
    let (status, status_style) = if verdict.is_correct {
        ("Correct", theme.success_style())
    } else if verdict.chosen.is_none() {
        (NOT_ANSWERED_LABEL, theme.warning_style())
    } else {
        ("Wrong", theme.error_style())
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {}", verdict.number),
                theme.title_style(),
            ),
            Span::raw("  "),
            Span::styled(status, status_style.add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(verdict.prompt.clone(), theme.text_style()),
        Line::from(vec![
            Span::styled("Your answer: ", theme.muted_style()),
            Span::styled(
                verdict
                    .chosen
                    .clone()
                    .unwrap_or_else(|| NOT_ANSWERED_LABEL.to_string()),
                status_style,
            ),
        ]),
        Line::from(vec![
            Span::styled("Correct answer: ", theme.muted_style()),
            Span::styled(verdict.correct.clone(), theme.success_style()),
        ]),
    ];

    if let Some(explanation) = &verdict.explanation {
        lines.push(Line::from(vec![
            Span::styled("Explanation: ", theme.muted_style()),
            Span::styled(explanation.clone(), theme.text_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines
}
