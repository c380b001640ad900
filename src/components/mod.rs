// Stateless renderers used by the quiz screen

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod question_panel;
pub mod result_panel;
pub mod review_panel;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use question_panel::QuestionPanel;
pub use result_panel::ResultPanel;
pub use review_panel::ReviewPanel;
