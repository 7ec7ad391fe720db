//! Console layer: output rendering and interactive prompting
//!
//! Commands and requirements never touch stdin/stdout directly; they go
//! through [`Output`] and the [`Interaction`] trait so that the whole
//! resolution machinery can run against scripted answers in tests.

mod input;
mod prompt;

pub use input::CommandInput;
pub use prompt::TerminalPrompt;

use colored::Colorize;

use crate::error::Result;

/// User-facing output helpers
///
/// Follows the glyph conventions used across the CLI: ✓ for completed
/// steps, ⚠ for warnings, ✗ for failures.
#[derive(Debug, Default, Clone)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn blank(&self) {
        println!();
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    pub fn note(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    pub fn step(&self, message: &str) {
        println!("{}", message.blue());
    }

    pub fn success(&self, message: &str) {
        println!("{}", format!("✓ {}", message).green());
    }

    pub fn warn(&self, message: &str) {
        println!("{}", format!("⚠ {}", message).yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", format!("✗ {}", message).red());
    }
}

/// Interactive prompting, implemented over the terminal in production
/// and over scripted answers in tests
pub trait Interaction: Send + Sync {
    /// Whether prompting is possible at all. When this is false every
    /// prompt falls back to its default or fails at the call site.
    fn is_interactive(&self) -> bool;

    /// Free-text question. An empty answer yields the default when one
    /// is given, otherwise the empty string.
    fn ask(&self, question: &str, default: Option<&str>) -> Result<String>;

    /// Free-text question without echoing the answer (secrets)
    fn ask_hidden(&self, question: &str) -> Result<String>;

    /// Yes/no confirmation. Non-interactive sessions answer with the
    /// default, which keeps paid-consent gates conservative.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Single choice out of `options`; returns the selected index
    fn choice(&self, question: &str, options: &[String]) -> Result<usize>;

    /// Multiple choice out of `options`; returns the selected indices
    fn multichoice(&self, question: &str, options: &[String]) -> Result<Vec<usize>>;
}

#[cfg(test)]
pub(crate) mod scripted {
    //! Scripted prompt answers for tests

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::Interaction;
    use crate::error::{CoreError, Result};

    /// One canned answer
    #[derive(Debug, Clone)]
    pub enum Answer {
        Text(String),
        Bool(bool),
        Pick(usize),
        PickMany(Vec<usize>),
    }

    /// An [`Interaction`] that replays canned answers in order and
    /// fails loudly when a test prompts more than it scripted.
    pub struct ScriptedPrompt {
        interactive: bool,
        answers: Mutex<VecDeque<Answer>>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                interactive: true,
                answers: Mutex::new(answers.into()),
            }
        }

        /// A prompt that refuses everything, for non-interactive tests
        pub fn non_interactive() -> Self {
            Self {
                interactive: false,
                answers: Mutex::new(VecDeque::new()),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.lock().unwrap().len()
        }

        fn next(&self, question: &str) -> Result<Answer> {
            self.answers.lock().unwrap().pop_front().ok_or_else(|| {
                CoreError::InvalidInput(format!("unscripted prompt: {}", question))
            })
        }
    }

    impl Interaction for ScriptedPrompt {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
            match self.next(question)? {
                Answer::Text(text) if text.is_empty() => {
                    Ok(default.unwrap_or_default().to_string())
                }
                Answer::Text(text) => Ok(text),
                other => Err(CoreError::InvalidInput(format!(
                    "expected text answer for \"{}\", got {:?}",
                    question, other
                ))),
            }
        }

        fn ask_hidden(&self, question: &str) -> Result<String> {
            match self.next(question)? {
                Answer::Text(text) => Ok(text),
                other => Err(CoreError::InvalidInput(format!(
                    "expected text answer for \"{}\", got {:?}",
                    question, other
                ))),
            }
        }

        fn confirm(&self, question: &str, default: bool) -> Result<bool> {
            if !self.interactive {
                return Ok(default);
            }
            match self.next(question)? {
                Answer::Bool(answer) => Ok(answer),
                other => Err(CoreError::InvalidInput(format!(
                    "expected yes/no answer for \"{}\", got {:?}",
                    question, other
                ))),
            }
        }

        fn choice(&self, question: &str, options: &[String]) -> Result<usize> {
            match self.next(question)? {
                Answer::Pick(index) if index < options.len() => Ok(index),
                other => Err(CoreError::InvalidInput(format!(
                    "expected a choice for \"{}\", got {:?}",
                    question, other
                ))),
            }
        }

        fn multichoice(&self, question: &str, options: &[String]) -> Result<Vec<usize>> {
            match self.next(question)? {
                Answer::PickMany(indices) if indices.iter().all(|i| *i < options.len()) => {
                    Ok(indices)
                }
                other => Err(CoreError::InvalidInput(format!(
                    "expected a multi-choice for \"{}\", got {:?}",
                    question, other
                ))),
            }
        }
    }
}
