//! Theme preference persisted to the preferences file and applied to the
//! palette, through the same paths the TUI and the `theme` command use.

mod common;

use anyhow::Result;
use common::{TestEnv, THREE_QUESTIONS_TOML};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use quizdeck::app::AppState;
use quizdeck::cli::PreferenceContext;
use quizdeck::config::Config;
use quizdeck::preference::{FileStore, PreferenceStore, ThemeMode, ThemePreference, THEME_KEY};
use quizdeck::quiz::QuestionSet;
use quizdeck::styles::{Theme, ThemeType};

#[test]
fn test_absent_file_resolves_to_light_and_is_written() -> Result<()> {
    let env = TestEnv::new().build()?;
    let mut theme = Theme::dark();

    let pref = ThemePreference::init(FileStore::new(env.preferences_path()), &mut theme);

    assert_eq!(pref.mode(), ThemeMode::Light);
    assert_eq!(theme.theme_type, ThemeType::Light);
    assert_eq!(
        FileStore::new(env.preferences_path()).get(THEME_KEY)?.as_deref(),
        Some("light")
    );
    Ok(())
}

#[test]
fn test_corrupted_value_resolves_to_light() -> Result<()> {
    let env = TestEnv::new()
        .with_preferences("theme = \"sepia\"\n")
        .build()?;
    let mut theme = Theme::dark();

    let pref = ThemePreference::init(FileStore::new(env.preferences_path()), &mut theme);

    assert_eq!(pref.mode(), ThemeMode::Light);
    assert_eq!(theme.theme_type, ThemeType::Light);
    Ok(())
}

#[test]
fn test_unparsable_file_resolves_to_light() -> Result<()> {
    let env = TestEnv::new()
        .with_preferences("this is { not toml")
        .build()?;
    let mut theme = Theme::light();

    let pref = ThemePreference::init(FileStore::new(env.preferences_path()), &mut theme);

    assert_eq!(pref.mode(), ThemeMode::Light);
    Ok(())
}

#[test]
fn test_toggle_twice_round_trips_through_disk() -> Result<()> {
    let env = TestEnv::new().with_preferences("theme = \"dark\"\n").build()?;
    let mut theme = Theme::light();
    let mut pref = ThemePreference::init(FileStore::new(env.preferences_path()), &mut theme);
    assert_eq!(theme.theme_type, ThemeType::Dark);

    assert_eq!(pref.toggle(&mut theme)?, ThemeMode::Light);
    assert_eq!(pref.toggle(&mut theme)?, ThemeMode::Dark);
    assert_eq!(theme.theme_type, ThemeType::Dark);

    // A fresh session sees the last persisted value
    let mut reloaded = Theme::light();
    let pref = ThemePreference::init(FileStore::new(env.preferences_path()), &mut reloaded);
    assert_eq!(pref.mode(), ThemeMode::Dark);
    assert_eq!(reloaded.theme_type, ThemeType::Dark);
    Ok(())
}

#[test]
fn test_tui_toggle_is_saved_for_the_cli() -> Result<()> {
    let env = TestEnv::new().with_env_override().build()?;
    let store = FileStore::new(env.preferences_path());
    let mut app = AppState::new(
        QuestionSet::from_toml(THREE_QUESTIONS_TOML)?,
        Config::default(),
        env.config_path(),
        store,
        false,
    )?;

    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('t'),
        KeyModifiers::NONE,
    )))?;
    assert_eq!(app.theme().theme_type, ThemeType::Dark);

    let ctx = PreferenceContext::load();
    assert_eq!(ctx.path, env.preferences_path());
    assert_eq!(ctx.preference.mode(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_cli_set_is_seen_by_the_tui() -> Result<()> {
    let env = TestEnv::new().with_env_override().build()?;

    let mut ctx = PreferenceContext::load();
    ctx.preference.set(ThemeMode::Dark, &mut ctx.theme)?;

    let app = AppState::new(
        QuestionSet::from_toml(THREE_QUESTIONS_TOML)?,
        Config::default(),
        env.config_path(),
        FileStore::new(env.preferences_path()),
        false,
    )?;
    assert_eq!(app.theme().theme_type, ThemeType::Dark);
    Ok(())
}
