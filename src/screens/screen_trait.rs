//! Screen trait and associated types.
//!
//! A screen owns its state, draws itself from that state on every frame and
//! turns input events into a [`ScreenAction`] for the app to act on.

use crate::keymap::Keymap;
use crate::styles::Theme;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources needed for rendering
pub struct RenderContext<'a> {
    /// Active palette
    pub theme: &'a Theme,
    /// Key bindings, for footer hints
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, keymap: &'a Keymap) -> Self {
        Self { theme, keymap }
    }
}

/// What the app should do after a screen handled an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Nothing changed.
    #[default]
    None,
    /// Screen state changed, redraw.
    Update,
    /// Switch between light and dark theme.
    ToggleTheme,
    /// Open help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

pub trait Screen {
    /// Draw the screen into `area`, replacing whatever was there.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, keymap: &Keymap) -> Result<ScreenAction>;
}
