//! Numeric log severities.
//!
//! Severities form an open scale: the built-in table (with `TRACE` below
//! `DEBUG`) can be extended at runtime through [`add_log_level`]. Records are
//! forwarded to the `log` facade in the lowest `log::Level` bucket at or above
//! their severity, so a threshold between two built-in levels never lets the
//! lower one through.

use std::fmt;
use std::sync::{OnceLock, RwLock};

use indexmap::IndexMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    pub const NOTSET: Level = Level(0);
    pub const TRACE: Level = Level(5);
    pub const DEBUG: Level = Level(10);
    pub const INFO: Level = Level(20);
    pub const WARNING: Level = Level(30);
    pub const ERROR: Level = Level(40);
    pub const CRITICAL: Level = Level(50);

    pub const fn new(value: u32) -> Self {
        Level(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Looks a level up by registered name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Level> {
        let key = name.trim().to_ascii_uppercase();
        read_registry(|levels| levels.get(&key).copied())
    }

    /// The `log` bucket records of this severity are emitted at.
    pub fn as_log_level(self) -> log::Level {
        match self.0 {
            0..=5 => log::Level::Trace,
            6..=10 => log::Level::Debug,
            11..=20 => log::Level::Info,
            21..=30 => log::Level::Warn,
            _ => log::Level::Error,
        }
    }

    /// The `log` filter letting through this severity and everything above it.
    pub fn as_level_filter(self) -> log::LevelFilter {
        self.as_log_level().to_level_filter()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = read_registry(|levels| {
            levels.iter().find(|(_, level)| **level == *self).map(|(name, _)| name.clone())
        });
        match name {
            Some(name) => f.write_str(&name),
            None => write!(f, "Level {}", self.0),
        }
    }
}

/// Label of a `log` bucket, using this crate's level names.
pub fn log_level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Trace => "TRACE",
        log::Level::Debug => "DEBUG",
        log::Level::Info => "INFO",
        log::Level::Warn => "WARNING",
        log::Level::Error => "ERROR",
    }
}

/// Registers a new severity under `name`.
///
/// # Errors
/// * `Error::InvalidLevelName` if the trimmed name contains whitespace
/// * `Error::LevelExists` if a level with that name is already registered
pub fn add_log_level(name: &str, value: u32) -> Result<Level> {
    let name = name.trim().to_ascii_uppercase();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(Error::InvalidLevelName(name));
    }

    let level = Level(value);
    let mut levels = registry().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if levels.contains_key(&name) {
        return Err(Error::LevelExists(name));
    }
    levels.insert(name, level);
    Ok(level)
}

fn registry() -> &'static RwLock<IndexMap<String, Level>> {
    static LEVELS: OnceLock<RwLock<IndexMap<String, Level>>> = OnceLock::new();
    LEVELS.get_or_init(|| {
        let builtin = [
            ("CRITICAL", Level::CRITICAL),
            ("FATAL", Level::CRITICAL),
            ("ERROR", Level::ERROR),
            ("WARNING", Level::WARNING),
            ("WARN", Level::WARNING),
            ("INFO", Level::INFO),
            ("DEBUG", Level::DEBUG),
            ("TRACE", Level::TRACE),
            ("NOTSET", Level::NOTSET),
        ];
        RwLock::new(builtin.into_iter().map(|(name, level)| (name.to_string(), level)).collect())
    })
}

fn read_registry<T>(f: impl FnOnce(&IndexMap<String, Level>) -> T) -> T {
    let levels = registry().read().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(Level::from_name("trace"), Some(Level::TRACE));
        assert_eq!(Level::from_name(" Warn "), Some(Level::WARNING));
        assert_eq!(Level::from_name("verbose"), None);
        assert_eq!(Level::TRACE.value(), 5);
    }

    #[test]
    fn test_display_uses_first_registered_name() {
        assert_eq!(Level::CRITICAL.to_string(), "CRITICAL");
        assert_eq!(Level::WARNING.to_string(), "WARNING");
        assert_eq!(Level::new(7).to_string(), "Level 7");
    }

    #[test]
    fn test_log_buckets() {
        assert_eq!(Level::TRACE.as_log_level(), log::Level::Trace);
        assert_eq!(Level::DEBUG.as_log_level(), log::Level::Debug);
        assert_eq!(Level::new(15).as_log_level(), log::Level::Info);
        assert_eq!(Level::WARNING.as_log_level(), log::Level::Warn);
        assert_eq!(Level::CRITICAL.as_log_level(), log::Level::Error);
        assert_eq!(Level::INFO.as_level_filter(), log::LevelFilter::Info);
        assert_eq!(Level::new(25).as_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_add_log_level() {
        let level = add_log_level(" notice ", 25).unwrap();
        assert_eq!(Level::from_name("NOTICE"), Some(level));
        assert_eq!(level.to_string(), "NOTICE");
        assert_eq!(level.as_log_level(), log::Level::Warn);
    }

    #[test]
    fn test_add_existing_level_fails() {
        assert!(matches!(add_log_level("trace", 5), Err(Error::LevelExists(name)) if name == "TRACE"));
        assert!(matches!(add_log_level("debug", 3), Err(Error::LevelExists(_))));
    }

    #[test]
    fn test_level_name_with_spaces_fails() {
        assert!(matches!(add_log_level("very verbose", 3), Err(Error::InvalidLevelName(_))));
        assert!(matches!(add_log_level("  ", 3), Err(Error::InvalidLevelName(_))));
    }
}
