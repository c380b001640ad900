//! View models handed to the rendering surface.
//!
//! Every draw builds a fresh [`QuizView`] from the controller, so the surface
//! never holds state across transitions. The surface is expected to replace
//! whatever it showed before with the new view.

use crate::quiz::controller::{QuizController, QuizEvent, Stage, Verdict};
use crate::quiz::grade::Grade;
use serde::Serialize;

/// Label of the forward button on the last question
pub const SEE_RESULT_LABEL: &str = "see result";
/// Label of the forward button on every other question
pub const NEXT_LABEL: &str = "next";
/// Shown in the review list for a question that was never answered
pub const NOT_ANSWERED_LABEL: &str = "Not answered";

/// How an option should be drawn once the question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionMark {
    /// Not revealed yet, or neither correct nor chosen
    Plain,
    Correct,
    /// Chosen, but not the correct option
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    /// Letter label: A, B, C, ...
    pub letter: char,
    pub text: String,
    pub mark: OptionMark,
    pub chosen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub progress_percent: u32,
    /// One-based position
    pub position_display: usize,
    pub total: usize,
    pub score: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    /// Options no longer accept a choice
    pub locked: bool,
    pub prev_disabled: bool,
    pub next_visible: bool,
    pub next_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub result_percent: u32,
    pub grade: Grade,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub verdicts: Vec<Verdict>,
}

/// Everything the surface needs for one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum QuizView {
    Question(QuestionView),
    Result(ResultView),
    Review(ReviewView),
}

/// Letter label for a zero-based option index
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

impl QuizView {
    pub fn from_controller(quiz: &QuizController) -> Self {
        match quiz.stage() {
            Stage::Question => QuizView::Question(QuestionView::from_controller(quiz)),
            Stage::Result => QuizView::Result(ResultView::from_controller(quiz)),
            Stage::Review => QuizView::Review(ReviewView {
                verdicts: quiz.review(),
            }),
        }
    }

    /// Whether this view offers a control that produces `event`
    ///
    /// Events the current view does not show are dropped at the boundary,
    /// so a key meant for an earlier view can never reach the controller.
    pub fn accepts(&self, event: QuizEvent) -> bool {
        match (self, event) {
            (QuizView::Question(q), QuizEvent::Choose(i)) => !q.locked && i < q.options.len(),
            (QuizView::Question(q), QuizEvent::Previous) => !q.prev_disabled,
            (QuizView::Question(q), QuizEvent::Next) => q.next_visible,
            (QuizView::Result(_), QuizEvent::Retry | QuizEvent::OpenReview) => true,
            (QuizView::Review(_), QuizEvent::CloseReview) => true,
            _ => false,
        }
    }
}

impl QuestionView {
    fn from_controller(quiz: &QuizController) -> Self {
        let question = quiz.current_question();
        let chosen = quiz.answer(quiz.position());
        let revealed = quiz.is_answered();

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let is_chosen = chosen == Some(idx);
                let mark = if !revealed {
                    OptionMark::Plain
                } else if idx == question.correct {
                    OptionMark::Correct
                } else if is_chosen {
                    OptionMark::Wrong
                } else {
                    OptionMark::Plain
                };
                OptionView {
                    letter: option_letter(idx),
                    text: text.clone(),
                    mark,
                    chosen: is_chosen,
                }
            })
            .collect();

        Self {
            progress_percent: quiz.progress_percent(),
            position_display: quiz.position() + 1,
            total: quiz.len(),
            score: quiz.score(),
            prompt: question.prompt.clone(),
            options,
            locked: revealed,
            prev_disabled: quiz.position() == 0,
            next_visible: revealed,
            next_label: if quiz.is_last() {
                SEE_RESULT_LABEL
            } else {
                NEXT_LABEL
            },
        }
    }
}

impl ResultView {
    fn from_controller(quiz: &QuizController) -> Self {
        let grade = quiz.grade();
        Self {
            score: quiz.score(),
            total: quiz.len(),
            result_percent: quiz.result_percent(),
            grade,
            message: grade.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Question;

    fn quiz() -> QuizController {
        QuizController::new(vec![
            Question::new("first", &["a", "b"], 1),
            Question::new("second", &["a", "b", "c"], 0),
        ])
        .unwrap()
    }

    fn question_view(quiz: &QuizController) -> QuestionView {
        match QuizView::from_controller(quiz) {
            QuizView::Question(q) => q,
            other => panic!("expected question view, got {:?}", other),
        }
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
        assert_eq!(option_letter(26), '?');
    }

    #[test]
    fn test_unanswered_question_view() {
        let q = question_view(&quiz());
        assert_eq!(q.position_display, 1);
        assert_eq!(q.total, 2);
        assert_eq!(q.progress_percent, 50);
        assert!(q.prev_disabled);
        assert!(!q.next_visible);
        assert_eq!(q.next_label, NEXT_LABEL);
        assert!(q.options.iter().all(|o| o.mark == OptionMark::Plain));
        assert_eq!(q.options[1].letter, 'B');
    }

    #[test]
    fn test_wrong_answer_reveals_correct_option() {
        let mut quiz = quiz();
        quiz.select_answer(0);
        let q = question_view(&quiz);
        assert!(q.locked);
        assert!(q.next_visible);
        assert_eq!(q.options[0].mark, OptionMark::Wrong);
        assert!(q.options[0].chosen);
        assert_eq!(q.options[1].mark, OptionMark::Correct);
    }

    #[test]
    fn test_last_question_label() {
        let mut quiz = quiz();
        quiz.select_answer(1);
        quiz.advance();
        let q = question_view(&quiz);
        assert_eq!(q.next_label, SEE_RESULT_LABEL);
        assert!(!q.prev_disabled);
        assert_eq!(q.progress_percent, 100);
        assert_eq!(q.score, 1);
    }

    #[test]
    fn test_result_view() {
        let mut quiz = quiz();
        quiz.select_answer(1);
        quiz.advance();
        quiz.select_answer(2);
        quiz.advance();
        match QuizView::from_controller(&quiz) {
            QuizView::Result(r) => {
                assert_eq!(r.score, 1);
                assert_eq!(r.result_percent, 50);
                assert_eq!(r.grade, Grade::E);
                assert_eq!(r.message, Grade::E.message());
            }
            other => panic!("expected result view, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_only_visible_controls() {
        let mut quiz = quiz();
        let view = QuizView::from_controller(&quiz);
        assert!(view.accepts(QuizEvent::Choose(1)));
        assert!(!view.accepts(QuizEvent::Choose(2)));
        assert!(!view.accepts(QuizEvent::Next));
        assert!(!view.accepts(QuizEvent::Previous));
        assert!(!view.accepts(QuizEvent::Retry));

        quiz.select_answer(1);
        let view = QuizView::from_controller(&quiz);
        assert!(!view.accepts(QuizEvent::Choose(0)));
        assert!(view.accepts(QuizEvent::Next));
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let json = serde_json::to_value(QuizView::from_controller(&quiz())).unwrap();
        assert_eq!(json["view"], "question");
        assert_eq!(json["next_label"], "next");
    }
}
