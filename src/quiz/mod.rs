//! Quiz core: questions, the session state machine, grading and view models.

pub mod controller;
pub mod grade;
pub mod question;
pub mod view;

pub use controller::{QuizController, QuizEvent, Stage, Verdict};
pub use grade::Grade;
pub use question::{Question, QuestionSet};
pub use view::{OptionMark, OptionView, QuestionView, QuizView, ResultView, ReviewView};
