//! Question records and question-set loading.
//!
//! A question set is read from a TOML or JSON file (picked by extension) or
//! taken from the sample set bundled into the binary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample question set shipped with the binary
const SAMPLE_QUIZ: &str = include_str!("../../assets/sample_quiz.toml");

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown above the options
    pub prompt: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Zero-based index of the correct option
    pub correct: usize,
    /// Explanation shown in the review list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_string());
        self
    }

    /// Text of the correct option
    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Check the record against the shape the controller relies on
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            bail!("question has an empty prompt");
        }
        if self.options.len() < 2 {
            bail!(
                "question {:?} needs at least 2 options, found {}",
                self.prompt,
                self.options.len()
            );
        }
        if self.correct >= self.options.len() {
            bail!(
                "question {:?} marks option {} as correct but only has {} options",
                self.prompt,
                self.correct,
                self.options.len()
            );
        }
        Ok(())
    }
}

/// A titled question set as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default = "default_title")]
    pub title: String,
    pub questions: Vec<Question>,
}

fn default_title() -> String {
    "Quiz".to_string()
}

impl QuestionSet {
    /// Load a question set from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question file: {:?}", path))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let set = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .with_context(|| format!("Invalid question file: {:?}", path))?;

        tracing::info!(
            "Loaded {} questions from {:?}",
            set.questions.len(),
            path
        );
        Ok(set)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let set: Self = toml::from_str(content).context("Failed to parse TOML question set")?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let set: Self =
            serde_json::from_str(content).context("Failed to parse JSON question set")?;
        set.validate()?;
        Ok(set)
    }

    /// The question set bundled into the binary
    pub fn sample() -> Result<Self> {
        Self::from_toml(SAMPLE_QUIZ).context("Bundled sample quiz is invalid")
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            bail!("question set {:?} has no questions", self.title);
        }
        for (idx, question) in self.questions.iter().enumerate() {
            question
                .validate()
                .with_context(|| format!("question {} is invalid", idx + 1))?;
        }
        Ok(())
    }
}
