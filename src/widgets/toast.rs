//! Toast notification widget.
//!
//! A short-lived notification drawn in the bottom-right corner, above the
//! footer. Used to confirm a theme switch or report a preference that could
//! not be saved.

use crate::styles::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Info => "\u{2139}",  // ℹ
            ToastVariant::Error => "\u{2718}", // ✘
        }
    }

    fn color(&self, theme: &Theme) -> Color {
        match self {
            ToastVariant::Info => theme.primary,
            ToastVariant::Error => theme.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    /// Errors stay up a little longer
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error).with_duration(Duration::from_secs(5))
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Renders one toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }

    fn calculate_area(area: Rect) -> Rect {
        let toast_width = 40u16.min(area.width.saturating_sub(4));
        let toast_height = 3u16.min(area.height);

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 3); // Above footer

        Rect::new(x, y, toast_width, toast_height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::calculate_area(area);
        if toast_area.is_empty() {
            return;
        }

        Widget::render(Clear, toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let border_style = if self.theme.is_no_color() {
            Style::default()
        } else {
            Style::default().fg(self.toast.variant.color(self.theme))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.theme.background_style());

        let paragraph = Paragraph::new(message)
            .block(block)
            .style(self.theme.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}

/// Holds at most one toast at a time
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, replacing any existing toast
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::info(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::error(message));
    }

    /// Remove an expired toast and return whether one is still active
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast, theme), area);
        }
    }
}
