//! Shared test utilities for quizdeck integration tests.
//!
//! Provides `TestEnv` - an isolated config directory plus question files,
//! with automatic cleanup via `TempDir`.
//!
//! Tests that call code reading `get_config_dir()` (the CLI preference
//! context, `Config` paths) use `.with_env_override()`, which points
//! `QUIZDECK_CONFIG_DIR` at the temp directory while the env is alive.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

use quizdeck::config::Config;
use quizdeck::utils::path::CONFIG_DIR_ENV;

/// Global mutex to ensure only one test uses env overrides at a time.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Guard that restores the config dir variable when dropped.
struct EnvGuard {
    old_config: Option<String>,
    #[allow(dead_code)]
    lock: std::sync::MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_config {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}

/// Question file used by most workflow tests: correct answers are [1, 0, 2]
pub const THREE_QUESTIONS_TOML: &str = r#"
title = "Three"

[[questions]]
prompt = "First?"
options = ["a", "b", "c"]
correct = 1
explanation = "b is right"

[[questions]]
prompt = "Second?"
options = ["a", "b", "c"]
correct = 0

[[questions]]
prompt = "Third?"
options = ["a", "b", "c"]
correct = 2
"#;

/// An isolated quizdeck environment.
///
/// - `config/` - config directory (~/.config/quizdeck equivalent)
/// - `quizzes/` - question files written by the test
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
    pub quiz_dir: PathBuf,
    env_guard: Option<EnvGuard>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join("preferences.toml")
    }

    pub fn quiz_path(&self, name: &str) -> PathBuf {
        self.quiz_dir.join(name)
    }

    /// Write a question file and return its path.
    pub fn write_quiz(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.quiz_path(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(path)
    }

    pub fn load_config(&self) -> Result<Config> {
        let content = fs::read_to_string(self.config_path()).context("Failed to read config")?;
        toml::from_str(&content).context("Failed to parse config")
    }

    pub fn file_content(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}

/// Builder for TestEnv with fluent configuration.
#[derive(Default)]
#[allow(dead_code)]
pub struct TestEnvBuilder {
    quizzes: Vec<(String, String)>, // (file name, content)
    preferences: Option<String>,
    env_override: bool,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    /// Add a question file under `quizzes/`.
    pub fn with_quiz(mut self, name: &str, content: &str) -> Self {
        self.quizzes.push((name.to_string(), content.to_string()));
        self
    }

    /// Seed the preferences file with raw content.
    pub fn with_preferences(mut self, content: &str) -> Self {
        self.preferences = Some(content.to_string());
        self
    }

    /// Point `QUIZDECK_CONFIG_DIR` at this environment until it is dropped.
    pub fn with_env_override(mut self) -> Self {
        self.env_override = true;
        self
    }

    pub fn build(self) -> Result<TestEnv> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let config_dir = temp_dir.path().join("config");
        let quiz_dir = temp_dir.path().join("quizzes");
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&quiz_dir)?;

        for (name, content) in &self.quizzes {
            fs::write(quiz_dir.join(name), content)?;
        }
        if let Some(content) = &self.preferences {
            fs::write(config_dir.join("preferences.toml"), content)?;
        }

        let env_guard = if self.env_override {
            // A panicking test poisons the lock; the guarded data is unit
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let old_config = std::env::var(CONFIG_DIR_ENV).ok();
            std::env::set_var(CONFIG_DIR_ENV, &config_dir);
            Some(EnvGuard { old_config, lock })
        } else {
            None
        };

        Ok(TestEnv {
            temp_dir,
            config_dir,
            quiz_dir,
            env_guard,
        })
    }
}
