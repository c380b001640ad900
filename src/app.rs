use crate::components::HelpOverlay;
use crate::config::Config;
use crate::keymap::Action;
use crate::preference::{FileStore, PreferenceStore, ThemePreference};
use crate::quiz::{QuestionSet, QuizController};
use crate::screens::{QuizScreen, RenderContext, Screen, ScreenAction};
use crate::styles::Theme;
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::{bail, Context, Result};
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// Everything the TUI shows and reacts to, minus the terminal itself
pub struct AppState<S: PreferenceStore> {
    config: Config,
    config_path: PathBuf,
    theme: Theme,
    preference: ThemePreference<S>,
    screen: QuizScreen,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl<S: PreferenceStore> AppState<S> {
    pub fn new(
        set: QuestionSet,
        config: Config,
        config_path: PathBuf,
        store: S,
        no_colors: bool,
    ) -> Result<Self> {
        let mut theme = if no_colors {
            Theme::no_color()
        } else {
            Theme::default()
        };
        let preference = ThemePreference::init(store, &mut theme);

        let quiz = QuizController::new(set.questions)?;
        Ok(Self {
            config,
            config_path,
            theme,
            preference,
            screen: QuizScreen::new(set.title, quiz),
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn preference(&self) -> &ThemePreference<S> {
        &self.preference
    }

    pub fn screen(&self) -> &QuizScreen {
        &self.screen
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drop an expired toast; true while one is still showing
    pub fn tick(&mut self) -> bool {
        self.toasts.tick()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let ctx = RenderContext::new(&self.theme, &self.config.keymap);
        if let Err(e) = self.screen.render(frame, area, &ctx) {
            error!("Failed to render quiz screen: {}", e);
        }

        if self.show_help {
            let config_path = self.config_path.display().to_string();
            if let Err(e) =
                HelpOverlay::render(frame, area, &self.config.keymap, &config_path, &self.theme)
            {
                error!("Failed to render help overlay: {}", e);
            }
        }

        self.toasts.render(frame, area, &self.theme);
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            // Any key closes the overlay; quit keys still quit
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.show_help = false;
                    if self.config.keymap.get_action(key.code, key.modifiers) == Some(Action::Quit) {
                        self.should_quit = true;
                    }
                }
            }
            return Ok(());
        }

        match self.screen.handle_event(event, &self.config.keymap)? {
            ScreenAction::None | ScreenAction::Update => {}
            ScreenAction::ToggleTheme => self.toggle_theme(),
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn toggle_theme(&mut self) {
        match self.preference.toggle(&mut self.theme) {
            Ok(mode) if self.theme.is_no_color() => {
                self.toasts.info(format!("Theme: {} (colors disabled)", mode));
            }
            Ok(mode) => self.toasts.info(format!("Theme: {}", mode)),
            Err(e) => {
                error!("Failed to save theme preference: {:#}", e);
                self.toasts.error(format!("Could not save theme: {}", e));
            }
        }
    }
}

/// Main application: the state plus the terminal it is drawn to
pub struct App {
    tui: Tui,
    state: AppState<FileStore>,
}

impl App {
    /// Load config and questions and prepare the terminal.
    ///
    /// The question file comes from `quiz_file`, then the config's
    /// `default_quiz`, then the bundled sample.
    pub fn new(quiz_file: Option<&Path>, no_colors: bool) -> Result<Self> {
        if !std::io::stdout().is_terminal() {
            bail!("quizdeck needs an interactive terminal (try `quizdeck check` instead)");
        }

        let config_path = crate::utils::get_config_path();
        let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;

        let set = match quiz_file.or(config.default_quiz.as_deref()) {
            Some(path) => QuestionSet::load(path)?,
            None => {
                info!("No question file given, using the bundled sample");
                QuestionSet::sample()?
            }
        };

        let no_colors = no_colors || config.colors_disabled();
        let store = FileStore::new(crate::utils::get_preferences_path());
        let state = AppState::new(set, config, config_path, store, no_colors)?;
        let tui = Tui::new()?;
        Ok(Self { tui, state })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Entered TUI");

        let result = self.event_loop();

        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            let state = &mut self.state;
            self.tui.terminal_mut().draw(|frame| state.render(frame))?;

            if self.state.should_quit() {
                break;
            }

            self.state.tick();

            // Poll for events with 250ms timeout so toasts expire on time
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.state.handle_event(event)?;
            }
        }
        Ok(())
    }
}
