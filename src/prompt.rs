//! User interaction handling.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Asks `prompt` and returns the answer, `default` when the user just presses enter.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
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
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
