use crate::quiz::view::{OptionMark, OptionView, QuestionView};
use crate::styles::{Theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap};

/// Draws the current question: progress bar, prompt, options and the
/// previous/next controls
pub struct QuestionPanel;

impl QuestionPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &QuestionView,
        highlighted: usize,
        theme: &Theme,
    ) -> Result<()> {
        let prompt_height = prompt_height(&view.prompt, area.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // progress
                Constraint::Length(1),             // spacing
                Constraint::Length(prompt_height), // prompt
                Constraint::Min(3),                // options
                Constraint::Length(1),             // navigation
            ])
            .split(area);

        let gauge = Gauge::default()
            .gauge_style(theme.gauge_style())
            .percent(view.progress_percent.min(100) as u16)
            .label(format!("{}%", view.progress_percent));
        frame.render_widget(gauge, chunks[0]);

        let prompt = Paragraph::new(view.prompt.clone())
            .style(theme.text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .border_type(theme.border_type(false))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(prompt, chunks[2]);

        let items: Vec<ListItem> = view
            .options
            .iter()
            .map(|option| option_item(option, theme))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Options ")
                    .borders(Borders::ALL)
                    .border_style(if view.locked {
                        theme.border_style()
                    } else {
                        theme.border_focused_style()
                    })
                    .border_type(theme.border_type(!view.locked)),
            )
            .highlight_style(theme.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        if !view.locked {
            list_state.select(Some(highlighted.min(view.options.len().saturating_sub(1))));
        }
        frame.render_stateful_widget(list, chunks[3], &mut list_state);

        frame.render_widget(navigation_line(view, theme), chunks[4]);
        Ok(())
    }
}

/// Rows needed for the wrapped prompt plus its border
fn prompt_height(prompt: &str, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(4)).max(1);
    let lines: usize = prompt
        .lines()
        .map(|line| line.chars().count().div_ceil(inner).max(1))
        .sum();
    (lines.max(1) as u16).saturating_add(2)
}

fn option_item<'a>(option: &OptionView, theme: &Theme) -> ListItem<'a> {
    let (text_style, suffix) = match option.mark {
        OptionMark::Correct => (theme.success_style(), "  ✔"),
        OptionMark::Wrong => (theme.error_style(), "  ✘"),
        OptionMark::Plain => (theme.text_style(), ""),
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", option.letter), theme.label_style()),
        Span::raw(" "),
        Span::styled(option.text.clone(), text_style),
        Span::styled(suffix, text_style.add_modifier(Modifier::BOLD)),
    ]))
}

fn navigation_line<'a>(view: &QuestionView, theme: &Theme) -> Paragraph<'a> {
    let prev_style = if view.prev_disabled {
        theme.disabled_style()
    } else {
        theme.emphasis_style()
    };

    let mut spans = vec![Span::styled("◀ previous", prev_style)];
    if view.next_visible {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            format!("{} ▶", view.next_label),
            theme.title_style(),
        ));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
