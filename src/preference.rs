//! Persisted light/dark theme preference.
//!
//! `ThemePreference` is built explicitly and handed the two collaborators it
//! needs: a [`PreferenceStore`] holding the `theme` key and a [`ThemeTarget`]
//! that the active mode is applied to. A mode change is persisted first and
//! only applied once the write succeeded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Store key holding the theme mode
pub const THEME_KEY: &str = "theme";

/// Two-valued theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    /// Only the exact stored literals are recognised
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Key-value storage for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Whatever displays the active theme
pub trait ThemeTarget {
    fn apply(&mut self, mode: ThemeMode);
}

/// In-memory store, used by tests and as a fallback when no file is wanted
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat TOML table of strings
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file: {:?}", self.path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", self.path))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let content = toml::to_string(&values).context("Failed to serialize preferences")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory: {:?}", parent))?;
        }
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", self.path))?;
        Ok(())
    }
}

/// The active theme mode plus the store it is echoed to
#[derive(Debug)]
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Read the stored mode (light when absent or unrecognised) and apply it
    pub fn init(mut store: S, target: &mut impl ThemeTarget) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not read theme preference, using light: {:#}", e);
                None
            }
        };

        let mode = stored
            .as_deref()
            .and_then(|v| v.parse::<ThemeMode>().ok())
            .unwrap_or_default();

        if stored.as_deref() != Some(mode.as_str()) {
            if let Err(e) = store.set(THEME_KEY, mode.as_str()) {
                tracing::warn!("Could not normalize stored theme preference: {:#}", e);
            }
        }

        target.apply(mode);
        tracing::info!("Theme initialized: {}", mode);
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip between light and dark
    pub fn toggle(&mut self, target: &mut impl ThemeTarget) -> Result<ThemeMode> {
        self.set(self.mode.toggled(), target)
    }

    /// Persist `mode`, then apply it; nothing is applied if the write fails
    pub fn set(&mut self, mode: ThemeMode, target: &mut impl ThemeTarget) -> Result<ThemeMode> {
        self.store
            .set(THEME_KEY, mode.as_str())
            .context("Failed to persist theme preference")?;
        self.mode = mode;
        target.apply(mode);
        tracing::info!("Theme set to {}", mode);
        Ok(mode)
    }
}
