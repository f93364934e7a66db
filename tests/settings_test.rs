use std::fs;

use stencil::error::Error;
use stencil::logger::{resolve_level, Level};
use stencil::settings::{parse_env_file, Settings};
use tempfile::TempDir;

const NO_VARS: [(&str, &str); 0] = [];

#[test]
fn test_default_level_info() {
    let settings = Settings::from_vars(NO_VARS);

    assert!(!settings.debug);
    assert_eq!(settings.log_level, None);
    assert_eq!(settings.default_log_level(), Level::INFO);
}

#[test]
fn test_debug_env_sets_debug() {
    let settings = Settings::from_vars([("DEBUG", "true")]);
    assert_eq!(settings.default_log_level(), Level::DEBUG);
}

#[test]
fn test_names_are_case_insensitive() {
    let settings = Settings::from_vars([("debug", "Yes"), ("Log_Level", "warning")]);

    assert!(settings.debug);
    assert_eq!(settings.log_level.as_deref(), Some("warning"));
}

#[test]
fn test_unparseable_debug_is_false() {
    let settings = Settings::from_vars([("DEBUG", "sometimes")]);
    assert!(!settings.debug);
}

#[test]
fn test_empty_log_level_is_absent() {
    let settings = Settings::from_vars([("LOG_LEVEL", "")]);
    assert_eq!(settings.log_level, None);
}

#[test]
fn test_loglevel_env_override() {
    let settings = Settings::from_vars([("DEBUG", "false"), ("LOG_LEVEL", "TRACE")]);

    assert_eq!(settings.default_log_level(), Level::INFO);
    assert_eq!(resolve_level(&settings).value(), 5);
}

#[test]
fn test_later_values_win() {
    let mut vars = parse_env_file("DEBUG=true\nLOG_LEVEL=error\n");
    vars.push(("LOG_LEVEL".to_string(), "trace".to_string()));

    let settings = Settings::from_vars(vars);

    assert!(settings.debug);
    assert_eq!(resolve_level(&settings), Level::TRACE);
}

#[test]
fn test_unreadable_env_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_file = temp_dir.path().join(".env");
    fs::create_dir(&not_a_file).unwrap();

    assert!(Settings::load_from(&not_a_file).is_err());
}

#[test]
fn test_missing_env_file_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    assert!(Settings::load_from(temp_dir.path().join(".env")).is_ok());
}

#[test]
fn test_unreadable_env_file_falls_back_to_environment() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_file = temp_dir.path().join(".env");
    fs::create_dir(&not_a_file).unwrap();

    let (settings, error) = Settings::load_from_or_environment(&not_a_file);

    assert!(matches!(error, Some(Error::IoError(_))));
    assert_eq!(settings, Settings::from_vars(std::env::vars()));
}
