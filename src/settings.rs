//! Centralized application settings.
//!
//! Settings come from environment variables layered over a local `.env` file,
//! with variable names matched case-insensitively. They control debug mode and
//! the logging defaults used by [`crate::logger`].

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use crate::constants::ENV_FILE;
use crate::error::{Error, Result};
use crate::logger::Level;

const DEBUG_VAR: &str = "DEBUG";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

static SETTINGS: OnceLock<Settings> = OnceLock::new();
static ENV_FILE_ERROR: OnceLock<String> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub log_level: Option<String>,
}

impl Settings {
    /// Builds settings from key/value pairs. Later pairs win.
    ///
    /// Unknown keys are ignored. A debug value that is not a recognised
    /// boolean counts as `false`, an empty log level as absent.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Settings::default();
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key.eq_ignore_ascii_case(DEBUG_VAR) {
                settings.debug = parse_bool(value).unwrap_or(false);
            } else if key.eq_ignore_ascii_case(LOG_LEVEL_VAR) {
                let value = value.trim();
                settings.log_level = (!value.is_empty()).then(|| value.to_string());
            }
        }
        settings
    }

    /// Loads settings from `path` (if it exists) and then the process environment.
    ///
    /// # Errors
    /// * `Error::IoError` if the env file exists but cannot be read
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut vars = match fs::read_to_string(path.as_ref()) {
            Ok(content) => parse_env_file(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        vars.extend(std::env::vars());
        Ok(Self::from_vars(vars))
    }

    /// Loads settings from `.env` in the working directory and the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(ENV_FILE)
    }

    /// Severity used when no explicit log level resolves.
    pub fn default_log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Like [`Settings::load_from`], but falls back to the process environment
    /// alone when the env file cannot be read, handing back the read error.
    pub fn load_from_or_environment<P: AsRef<Path>>(path: P) -> (Self, Option<Error>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::from_vars(std::env::vars()), Some(e)),
        }
    }
}

/// Process-wide settings, loaded on first use.
///
/// An unreadable env file does not fail the load. The error is kept for
/// [`env_file_error`] and reported as a warning once logging is configured.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let (settings, error) = Settings::load_from_or_environment(ENV_FILE);
        if let Some(error) = error {
            let error = ENV_FILE_ERROR.get_or_init(|| error.to_string());
            if crate::logger::is_configured() {
                log::warn!("Ignored {ENV_FILE}: {error}");
            }
        }
        settings
    })
}

/// Why the process-wide settings could not read the env file, if they could not.
pub fn env_file_error() -> Option<&'static str> {
    ENV_FILE_ERROR.get().map(String::as_str)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "t" | "true" | "y" | "yes" => Some(true),
        "0" | "off" | "f" | "false" | "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parses `KEY=VALUE` lines of an env file.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Keys may carry
/// an `export ` prefix. Quoted values lose their quotes; unquoted values lose
/// a trailing ` #` comment.
pub fn parse_env_file(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unquote(value.trim())))
        })
        .collect()
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }
    match value.find(" #") {
        Some(comment) => value[..comment].trim_end().to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" yes "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parse_env_file() {
        let content = r#"
# comment
DEBUG=true
export LOG_LEVEL = "trace"
NAME='your name'
PLAIN=value # trailing
BROKEN
"#;
        let vars = parse_env_file(content);
        assert_eq!(
            vars,
            vec![
                ("DEBUG".to_string(), "true".to_string()),
                ("LOG_LEVEL".to_string(), "trace".to_string()),
                ("NAME".to_string(), "your name".to_string()),
                ("PLAIN".to_string(), "value".to_string()),
            ]
        );
    }
}
