//! Quiz state machine.
//!
//! `QuizController` owns the position, score and recorded answers of one
//! quiz session. It performs no I/O; the rendering side asks it for a view
//! (see [`crate::quiz::view`]) and feeds user events back in through
//! [`QuizController::dispatch`].
//!
//! ```text
//!   Question(unanswered) --select--> Question(answered) --advance--> next Question
//!          ^     |                          |
//!          |   go_back               advance on last
//!          |                                v
//!          +----------- retry ---------- Result <--close_review-- Review
//!                                           +-----open_review------>^
//! ```
//!
//! Calls made in the wrong state or with an out-of-range option are ignored
//! and return `false`.

use crate::quiz::grade::{rounded_percent, Grade};
use crate::quiz::question::Question;
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Which view the session is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Question,
    Result,
    Review,
}

/// Discrete events the rendering surface can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Option chosen by zero-based index
    Choose(usize),
    Previous,
    /// "next" / "see result"
    Next,
    Retry,
    OpenReview,
    CloseReview,
}

/// Per-question review entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    /// One-based question number
    pub number: usize,
    pub prompt: String,
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// State of one quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizController {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    answers: BTreeMap<usize, usize>,
    answered: bool,
    stage: Stage,
}

impl QuizController {
    /// Start a session over a non-empty question list
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            bail!("a quiz needs at least one question");
        }
        Ok(Self {
            questions,
            position: 0,
            score: 0,
            answers: BTreeMap::new(),
            answered: false,
            stage: Stage::Question,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// True once the last question has been answered and advanced past
    pub fn is_finished(&self) -> bool {
        self.stage != Stage::Question
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Recorded option for a question, if any
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.position]
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questions.len()
    }

    pub fn progress_percent(&self) -> u32 {
        rounded_percent(self.position + 1, self.questions.len())
    }

    pub fn result_percent(&self) -> u32 {
        rounded_percent(self.score, self.questions.len())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percent(self.result_percent())
    }

    /// Lock in an option for the current question
    pub fn select_answer(&mut self, index: usize) -> bool {
        if self.stage != Stage::Question {
            debug!("Ignoring selection {}: no question is shown", index);
            return false;
        }
        if self.answered {
            debug!(
                "Ignoring selection {}: question {} already answered",
                index,
                self.position + 1
            );
            return false;
        }
        let question = &self.questions[self.position];
        if index >= question.options.len() {
            debug!(
                "Ignoring selection {}: question {} has {} options",
                index,
                self.position + 1,
                question.options.len()
            );
            return false;
        }

        let correct = index == question.correct;
        self.answers.insert(self.position, index);
        if correct {
            self.score += 1;
        }
        self.answered = true;
        debug!(
            "Question {} answered with option {} (correct: {})",
            self.position + 1,
            index,
            correct
        );
        true
    }

    /// Move to the next question, or to the result view from the last one
    pub fn advance(&mut self) -> bool {
        if self.stage != Stage::Question || !self.answered {
            debug!("Ignoring advance: current question not answered");
            return false;
        }
        if self.is_last() {
            self.stage = Stage::Result;
            debug!("Quiz finished with score {}/{}", self.score, self.len());
        } else {
            self.position += 1;
            self.answered = self.answers.contains_key(&self.position);
        }
        true
    }

    /// Return to the previous question, keeping its recorded answer
    pub fn go_back(&mut self) -> bool {
        if self.stage != Stage::Question || self.position == 0 {
            debug!("Ignoring go_back at position {}", self.position);
            return false;
        }
        self.position -= 1;
        self.answered = self.answers.contains_key(&self.position);
        true
    }

    pub fn open_review(&mut self) -> bool {
        if self.stage != Stage::Result {
            return false;
        }
        self.stage = Stage::Review;
        true
    }

    pub fn close_review(&mut self) -> bool {
        if self.stage != Stage::Review {
            return false;
        }
        self.stage = Stage::Result;
        true
    }

    /// Reset to the state the session was constructed with
    pub fn retry(&mut self) -> bool {
        self.position = 0;
        self.score = 0;
        self.answers.clear();
        self.answered = false;
        self.stage = Stage::Question;
        debug!("Quiz restarted");
        true
    }

    /// One verdict per question, in question order
    pub fn review(&self) -> Vec<Verdict> {
        self.questions
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                let chosen = self.answer(idx);
                Verdict {
                    number: idx + 1,
                    prompt: question.prompt.clone(),
                    chosen: chosen.and_then(|c| question.options.get(c).cloned()),
                    correct: question.correct_option().to_string(),
                    is_correct: chosen == Some(question.correct),
                    explanation: question.explanation.clone(),
                }
            })
            .collect()
    }

    /// Apply a surface event; returns whether anything changed
    pub fn dispatch(&mut self, event: QuizEvent) -> bool {
        match event {
            QuizEvent::Choose(index) => self.select_answer(index),
            QuizEvent::Previous => self.go_back(),
            QuizEvent::Next => self.advance(),
            QuizEvent::Retry => self.retry(),
            QuizEvent::OpenReview => self.open_review(),
            QuizEvent::CloseReview => self.close_review(),
        }
    }
}
