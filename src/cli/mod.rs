//! CLI module for the quizdeck command-line interface.
//!
//! Without a subcommand (or with `run`) quizdeck opens the TUI; the other
//! subcommands work without a terminal.

mod common;
pub mod completions;

pub use common::*;

use crate::preference::ThemeMode;
use crate::quiz::view::option_letter;
use crate::quiz::QuestionSet;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Multiple-choice quizzes in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "quizdeck",
    version,
    about = "Multiple-choice quizzes in the terminal",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Question file (TOML or JSON). Defaults to the configured or bundled quiz
    pub quiz: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take a quiz in the TUI (the default)
    Run {
        /// Question file (TOML or JSON)
        quiz: Option<PathBuf>,
    },
    /// Validate a question file and print a summary
    Check {
        /// Question file (TOML or JSON)
        quiz: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the saved light/dark theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the saved theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Save a specific theme
    Set {
        /// `light` or `dark`
        mode: ThemeMode,
    },
}

/// Result of `quizdeck check`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckSummary {
    pub file: String,
    pub title: String,
    pub questions: usize,
    pub options: usize,
    pub with_explanation: usize,
}

impl CheckSummary {
    pub fn new(path: &Path, set: &QuestionSet) -> Self {
        Self {
            file: path.display().to_string(),
            title: set.title.clone(),
            questions: set.questions.len(),
            options: set.questions.iter().map(|q| q.options.len()).sum(),
            with_explanation: set
                .questions
                .iter()
                .filter(|q| q.explanation.is_some())
                .count(),
        }
    }
}

impl Cli {
    /// Whether this invocation opens the TUI
    pub fn launches_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run { .. }))
    }

    /// Question file requested for the TUI, if any
    pub fn quiz_file(&self) -> Option<&Path> {
        match &self.command {
            Some(Commands::Run { quiz }) => quiz.as_deref(),
            _ => self.quiz.as_deref(),
        }
    }

    /// Execute a non-interactive command. TUI invocations are left to the caller.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Check { quiz, json }) => Self::cmd_check(&quiz, json),
            Some(Commands::Theme { command }) => Self::cmd_theme(command),
            Some(Commands::Completions { shell }) => completions::generate(shell),
            Some(Commands::Run { .. }) | None => Ok(()),
        }
    }

    fn cmd_check(path: &Path, json: bool) -> Result<()> {
        info!("CLI: check {:?}", path);
        let set = QuestionSet::load(path)?;
        let summary = CheckSummary::new(path, &set);

        if json {
            let out =
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{}", out);
            return Ok(());
        }

        print_success(&format!(
            "{}: {} questions in {}",
            summary.title, summary.questions, summary.file
        ));
        for (idx, question) in set.questions.iter().enumerate() {
            println!(
                "  {}. {} [{} options, answer {}]",
                idx + 1,
                question.prompt,
                question.options.len(),
                option_letter(question.correct)
            );
        }
        let missing = summary.questions - summary.with_explanation;
        if missing > 0 {
            print_warning(&format!("{} questions have no explanation", missing));
        }
        Ok(())
    }

    fn cmd_theme(command: ThemeCommand) -> Result<()> {
        let mut ctx = PreferenceContext::load();
        match command {
            ThemeCommand::Show => {
                print_info(&format!(
                    "Theme: {} ({})",
                    ctx.preference.mode(),
                    ctx.path.display()
                ));
            }
            ThemeCommand::Toggle => {
                let mode = ctx.preference.toggle(&mut ctx.theme)?;
                info!("CLI: theme toggled to {}", mode);
                print_success(&format!("Theme set to {}", mode));
            }
            ThemeCommand::Set { mode } => {
                let mode = ctx.preference.set(mode, &mut ctx.theme)?;
                info!("CLI: theme set to {}", mode);
                print_success(&format!("Theme set to {}", mode));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_launches_tui() {
        let cli = Cli::try_parse_from(["quizdeck"]).unwrap();
        assert!(cli.launches_tui());
        assert!(cli.quiz_file().is_none());

        let cli = Cli::try_parse_from(["quizdeck", "maths.toml"]).unwrap();
        assert!(cli.launches_tui());
        assert_eq!(cli.quiz_file(), Some(Path::new("maths.toml")));
    }

    #[test]
    fn test_run_subcommand() {
        let cli = Cli::try_parse_from(["quizdeck", "run", "q.json", "--no-colors"]).unwrap();
        assert!(cli.launches_tui());
        assert!(cli.no_colors);
        assert_eq!(cli.quiz_file(), Some(Path::new("q.json")));
    }

    #[test]
    fn test_theme_set_parses_mode() {
        let cli = Cli::try_parse_from(["quizdeck", "theme", "set", "dark"]).unwrap();
        assert!(!cli.launches_tui());
        match cli.command {
            Some(Commands::Theme {
                command: ThemeCommand::Set { mode },
            }) => assert_eq!(mode, ThemeMode::Dark),
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["quizdeck", "theme", "set", "Dark"]).is_err());
    }

    #[test]
    fn test_check_summary() {
        let set = QuestionSet {
            title: "Sample".to_string(),
            questions: vec![
                Question::new("a?", &["x", "y"], 0).with_explanation("because"),
                Question::new("b?", &["x", "y", "z"], 2),
            ],
        };
        let summary = CheckSummary::new(Path::new("sample.toml"), &set);
        assert_eq!(
            summary,
            CheckSummary {
                file: "sample.toml".to_string(),
                title: "Sample".to_string(),
                questions: 2,
                options: 5,
                with_explanation: 1,
            }
        );
    }
}
