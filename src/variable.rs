//! Placeholder variables and their validators.
//!
//! A [`Variable`] pairs a literal placeholder found in the reference project
//! with the name of the template variable that replaces it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{VARIABLE_END, VARIABLE_START};
use crate::error::{Error, Result};

/// A predicate over the literal placeholder text.
pub type Validator = fn(&str) -> bool;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid"));

/// A literal placeholder and the template variable it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    text: String,
    name: String,
}

impl Variable {
    /// Creates a variable, running every validator against `text` once.
    ///
    /// # Errors
    /// * `Error::ValidationError` if any validator rejects `text`
    pub fn new(
        text: impl Into<String>,
        name: impl Into<String>,
        validators: &[Validator],
    ) -> Result<Self> {
        let text = text.into();
        let name = name.into();

        if validators.iter().any(|validate| !validate(text.as_str())) {
            return Err(Error::ValidationError { variable: name, text });
        }

        Ok(Self { text, name })
    }

    /// The literal placeholder text searched for in the reference project.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The template variable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{VARIABLE_START}{}{VARIABLE_END}", self.name)
    }
}

/// Accepts names usable as identifiers: a letter or `_` followed by letters,
/// digits or `_`.
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// The placeholders replaced by default, in replacement order.
///
/// # Errors
/// * `Error::ValidationError` if a built-in placeholder fails its own validator
pub fn default_variables() -> Result<Vec<Variable>> {
    Ok(vec![
        Variable::new("PackageName", "package_name", &[is_identifier])?,
        Variable::new("package_module", "package_module", &[])?,
        Variable::new("short description", "package_description", &[])?,
        Variable::new("your name", "package_author_name", &[is_not_blank])?,
        Variable::new("your.name@example.com", "package_author_email", &[is_email])?,
        Variable::new("my-github-org", "package_github_org", &[])?,
    ])
}
