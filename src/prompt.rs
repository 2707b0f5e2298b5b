//! User input and interaction handling.
//!
//! The interactive flow is kept behind the [`Prompter`] trait so the planner
//! and generator logic can be driven by a scripted implementation in tests.

use crate::error::{Error, Result};
use dialoguer::{Confirm, FuzzySelect, Input, Select};

/// Trait abstracting the interactive question/answer surface.
pub trait Prompter {
    /// Asks the user to pick one item from a short fixed list.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks the user to pick one item from a list that may grow with the
    /// project, with fuzzy matching on typed input.
    fn fuzzy_select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Asks the user for a line of text. When `default` is given, an empty
    /// submission yields the default.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks the user a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn fuzzy_select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        FuzzySelect::new()
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
