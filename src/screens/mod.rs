//! Screen controllers for the application.
//!
//! A screen owns its state and handles both rendering and events. quizdeck has
//! a single screen, the quiz itself, which switches between its question,
//! result and review views internally.

pub mod quiz;
pub mod screen_trait;

pub use quiz::QuizScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction};
