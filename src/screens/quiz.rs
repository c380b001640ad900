//! Quiz screen controller.
//!
//! Wraps a [`QuizController`] and is the one place where the terminal meets
//! the quiz core: every frame is drawn from a freshly built [`QuizView`], and
//! every key is turned into a [`QuizEvent`] checked against the view that is
//! currently on screen before it reaches the controller.

use crate::components::{Footer, Header, QuestionPanel, ResultPanel, ReviewPanel};
use crate::keymap::{Action, Keymap};
use crate::quiz::{QuizController, QuizEvent, QuizView, Stage};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;
use tracing::debug;

/// Lines moved per scroll step in the review list
const SCROLL_STEP: u16 = 3;

pub struct QuizScreen {
    title: String,
    quiz: QuizController,
    /// Option under the cursor while the question is unanswered
    highlighted: usize,
    review_scroll: u16,
    /// Scroll limit measured by the last review render; `None` until drawn
    review_max_scroll: Option<u16>,
}

impl QuizScreen {
    pub fn new(title: impl Into<String>, quiz: QuizController) -> Self {
        Self {
            title: title.into(),
            quiz,
            highlighted: 0,
            review_scroll: 0,
            review_max_scroll: None,
        }
    }

    pub fn quiz(&self) -> &QuizController {
        &self.quiz
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn review_scroll(&self) -> u16 {
        self.review_scroll
    }

    /// The view currently on screen
    pub fn view(&self) -> QuizView {
        QuizView::from_controller(&self.quiz)
    }

    fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let view = self.view();

        if let KeyCode::Char(c @ '1'..='9') = key.code {
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                let index = c as usize - '1' as usize;
                return self.apply(QuizEvent::Choose(index), &view);
            }
        }

        let Some(action) = keymap.get_action(key.code, key.modifiers) else {
            return ScreenAction::None;
        };

        match action {
            Action::ToggleTheme => ScreenAction::ToggleTheme,
            Action::Help => ScreenAction::ShowHelp,
            Action::Quit => ScreenAction::Quit,
            Action::MoveUp | Action::MoveDown => self.move_cursor(action == Action::MoveUp, &view),
            Action::ScrollUp | Action::ScrollDown => {
                self.scroll_review(action == Action::ScrollUp, &view)
            }
            _ => match self.event_for(action, &view) {
                Some(event) => self.apply(event, &view),
                None => ScreenAction::None,
            },
        }
    }

    /// Translate a navigation action into the quiz event the visible view offers
    fn event_for(&self, action: Action, view: &QuizView) -> Option<QuizEvent> {
        match (action, view) {
            (Action::Confirm, QuizView::Question(q)) if !q.locked => {
                Some(QuizEvent::Choose(self.highlighted))
            }
            (Action::Confirm | Action::Next, QuizView::Question(_)) => Some(QuizEvent::Next),
            (Action::Previous, QuizView::Question(_)) => Some(QuizEvent::Previous),
            (Action::Confirm | Action::Review, QuizView::Result(_)) => Some(QuizEvent::OpenReview),
            (Action::Retry, QuizView::Result(_)) => Some(QuizEvent::Retry),
            (Action::Confirm | Action::Cancel | Action::Review, QuizView::Review(_)) => {
                Some(QuizEvent::CloseReview)
            }
            _ => None,
        }
    }

    fn apply(&mut self, event: QuizEvent, view: &QuizView) -> ScreenAction {
        if !view.accepts(event) {
            debug!("Dropping {:?}: not offered by the current view", event);
            return ScreenAction::None;
        }
        let stage_before = self.quiz.stage();
        if !self.quiz.dispatch(event) {
            return ScreenAction::None;
        }

        // Park the cursor on the recorded answer, if any, so revisits show it
        self.highlighted = self.quiz.answer(self.quiz.position()).unwrap_or(0);
        if self.quiz.stage() == Stage::Review && stage_before != Stage::Review {
            self.review_scroll = 0;
            self.review_max_scroll = None;
        }
        ScreenAction::Update
    }

    fn move_cursor(&mut self, up: bool, view: &QuizView) -> ScreenAction {
        match view {
            QuizView::Question(q) if !q.locked => {
                let count = q.options.len();
                self.highlighted = if up {
                    (self.highlighted + count - 1) % count
                } else {
                    (self.highlighted + 1) % count
                };
                ScreenAction::Update
            }
            QuizView::Review(_) => self.scroll_review(up, view),
            _ => ScreenAction::None,
        }
    }

    fn scroll_review(&mut self, up: bool, view: &QuizView) -> ScreenAction {
        if !matches!(view, QuizView::Review(_)) {
            return ScreenAction::None;
        }
        self.review_scroll = if up {
            self.review_scroll.saturating_sub(SCROLL_STEP)
        } else {
            self.review_scroll
                .saturating_add(SCROLL_STEP)
                .min(self.review_max_scroll.unwrap_or(u16::MAX))
        };
        ScreenAction::Update
    }

    fn footer_text(view: &QuizView, keymap: &Keymap) -> String {
        let keys = |action| keymap.get_key_display_for_action(action);
        let tail = format!(
            "Theme: {} | Help: {} | Quit: {}",
            keys(Action::ToggleTheme),
            keys(Action::Help),
            keys(Action::Quit)
        );
        match view {
            QuizView::Question(q) if !q.locked => format!(
                "Choose: 1-{} | Move: {} | Select: {} | Back: {} | {}",
                q.options.len().min(9),
                keymap.navigation_display(),
                keys(Action::Confirm),
                keys(Action::Previous),
                tail
            ),
            QuizView::Question(q) => format!(
                "{}: {} | Back: {} | {}",
                capitalize(q.next_label),
                keys(Action::Next),
                keys(Action::Previous),
                tail
            ),
            QuizView::Result(_) => format!(
                "Review: {} | Retry: {} | {}",
                keys(Action::Review),
                keys(Action::Retry),
                tail
            ),
            QuizView::Review(_) => format!(
                "Scroll: {} | Back to result: {} | {}",
                keymap.navigation_display(),
                keys(Action::Cancel),
                tail
            ),
        }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Screen for QuizScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        let theme = ctx.theme;

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(theme.background_style()), area);

        let view = self.view();
        let (header_area, content_area, footer_area) = create_standard_layout(area, 3, 2);

        let status = match &view {
            QuizView::Question(q) => format!(
                "Question {} of {}  ·  Score: {}",
                q.position_display, q.total, q.score
            ),
            QuizView::Result(_) => "Finished".to_string(),
            QuizView::Review(_) => "Review".to_string(),
        };
        Header::render(frame, header_area, &self.title, &status, theme)?;

        match &view {
            QuizView::Question(q) => {
                QuestionPanel::render(frame, content_area, q, self.highlighted, theme)?;
            }
            QuizView::Result(r) => ResultPanel::render(frame, content_area, r, theme)?,
            QuizView::Review(r) => {
                let max_scroll =
                    ReviewPanel::render(frame, content_area, r, self.review_scroll, theme)?;
                self.review_max_scroll = Some(max_scroll);
                self.review_scroll = self.review_scroll.min(max_scroll);
            }
        }

        Footer::render(
            frame,
            footer_area,
            &Self::footer_text(&view, ctx.keymap),
            theme,
        )?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, keymap: &Keymap) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, keymap)),
            Event::Resize(_, _) => Ok(ScreenAction::Update),
            _ => Ok(ScreenAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;
    use crate::styles::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen() -> QuizScreen {
        let quiz = QuizController::new(vec![
            Question::new("What is 1 + 1?", &["1", "2", "3"], 1),
            Question::new("What is 2 * 3?", &["5", "6"], 1).with_explanation("Six."),
        ])
        .unwrap();
        QuizScreen::new("Arithmetic", quiz)
    }

    fn press(screen: &mut QuizScreen, code: KeyCode) -> ScreenAction {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        screen.handle_event(event, &Keymap::default()).unwrap()
    }

    fn rendered(screen: &mut QuizScreen) -> String {
        rendered_at(screen, 100, 30)
    }

    fn rendered_at(screen: &mut QuizScreen, width: u16, height: u16) -> String {
        let theme = Theme::light();
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&theme, &keymap);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_digit_chooses_option() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Char('2')), ScreenAction::Update);
        assert_eq!(s.quiz().answer(0), Some(1));
        assert_eq!(s.quiz().score(), 1);
    }

    #[test]
    fn test_digit_out_of_range_is_dropped() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Char('9')), ScreenAction::None);
        assert_eq!(s.quiz().answer(0), None);
    }

    #[test]
    fn test_cursor_and_confirm() {
        let mut s = screen();
        press(&mut s, KeyCode::Up);
        assert_eq!(s.highlighted(), 2);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        assert_eq!(s.highlighted(), 1);
        press(&mut s, KeyCode::Enter);
        assert!(s.quiz().is_answered());
        assert_eq!(s.quiz().score(), 1);

        // Enter now acts as "next"
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz().position(), 1);
        assert_eq!(s.highlighted(), 0);
    }

    #[test]
    fn test_next_hidden_until_answered() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Right), ScreenAction::None);
        assert_eq!(s.quiz().position(), 0);
    }

    #[test]
    fn test_going_back_parks_cursor_on_answer() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('3'));
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Left);
        assert_eq!(s.quiz().position(), 0);
        assert_eq!(s.highlighted(), 2);
        assert!(s.quiz().is_answered());
    }

    #[test]
    fn test_retry_only_from_result() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('2'));
        assert_eq!(press(&mut s, KeyCode::Char('r')), ScreenAction::None);
        assert_eq!(s.quiz().score(), 1);

        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Right);
        assert_eq!(s.quiz().stage(), Stage::Result);
        assert_eq!(press(&mut s, KeyCode::Char('r')), ScreenAction::Update);
        assert_eq!(s.quiz().stage(), Stage::Question);
        assert_eq!(s.quiz().score(), 0);
    }

    #[test]
    fn test_review_open_scroll_close() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('1'));
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('v'));
        assert_eq!(s.quiz().stage(), Stage::Review);

        press(&mut s, KeyCode::Down);
        assert_eq!(s.review_scroll(), SCROLL_STEP);
        press(&mut s, KeyCode::Esc);
        assert_eq!(s.quiz().stage(), Stage::Result);
    }

    #[test]
    fn test_global_actions_pass_through() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Char('t')), ScreenAction::ToggleTheme);
        assert_eq!(press(&mut s, KeyCode::Char('?')), ScreenAction::ShowHelp);
        assert_eq!(press(&mut s, KeyCode::Char('q')), ScreenAction::Quit);
    }

    #[test]
    fn test_renders_question_view() {
        let mut s = screen();
        let text = rendered(&mut s);
        assert!(text.contains("Arithmetic"));
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("What is 1 + 1?"));
        assert!(text.contains(" A "));
        assert!(text.contains(" C "));
        assert!(!text.contains("next ▶"));
    }

    #[test]
    fn test_renders_see_result_on_last_question() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('2'));
        assert!(rendered(&mut s).contains("next ▶"));
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('1'));
        assert!(rendered(&mut s).contains("see result ▶"));
    }

    #[test]
    fn test_renders_result_and_review() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('1'));
        press(&mut s, KeyCode::Enter);

        let text = rendered(&mut s);
        assert!(text.contains("Quiz complete!"));
        assert!(text.contains("50%"));
        assert!(text.contains("Grade: E"));

        press(&mut s, KeyCode::Char('v'));
        let text = rendered(&mut s);
        assert!(text.contains("Answer review (1/2 correct)"));
        assert!(text.contains("Explanation: Six."));
    }

    #[test]
    fn test_review_scrolls_to_last_wrapped_verdict() {
        let questions = (0..3)
            .map(|i| {
                let explanation = format!("{}ENDMARK{}", "lorem ipsum ".repeat(25), i);
                Question::new(&format!("Question number {}?", i + 1), &["a", "b"], 1)
                    .with_explanation(&explanation)
            })
            .collect();
        let mut s = QuizScreen::new("Long", QuizController::new(questions).unwrap());
        for _ in 0..3 {
            press(&mut s, KeyCode::Char('1'));
            press(&mut s, KeyCode::Enter);
        }
        press(&mut s, KeyCode::Char('v'));
        assert_eq!(s.quiz().stage(), Stage::Review);

        let first = rendered_at(&mut s, 40, 20);
        assert!(!first.contains("ENDMARK2"));

        for _ in 0..200 {
            press(&mut s, KeyCode::Down);
        }
        let last = rendered_at(&mut s, 40, 20);
        assert!(last.contains("ENDMARK2"), "last explanation not reachable:\n{}", last);

        // Scrolling is bounded, so one step up moves the view right away
        let bottom = s.review_scroll();
        assert!(bottom > 0 && bottom < 600);
        press(&mut s, KeyCode::Up);
        assert_eq!(s.review_scroll(), bottom.saturating_sub(SCROLL_STEP));
    }

    #[test]
    fn test_zero_area_render_is_noop() {
        let mut s = screen();
        let theme = Theme::light();
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(10, 10)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&theme, &keymap);
                s.render(frame, Rect::new(0, 0, 0, 0), &ctx).unwrap();
            })
            .unwrap();
    }
}
