//! stencil turns a reference project into a project template.
//! It replaces placeholder values (package name, author, email, ...) with
//! Jinja variables, renames files whose names contain placeholders and marks
//! every changed file with the `.jinja` extension. It also provides the
//! settings and logging bootstrap used by the command-line tool.

/// Top-level build orchestration: source validation, destination reset, conversion
pub mod build;

/// Command-line interface module for the stencil application
pub mod cli;

/// Build configuration: ordered placeholders and destination root
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the stencil application
pub mod error;

/// Exclusion patterns for source paths
pub mod ignore;

/// Severity levels and one-time logging setup
pub mod logger;

/// Destination paths carrying the template marker
pub mod path;

/// Substitution engine and source tree conversion
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Environment-driven settings
pub mod settings;

/// Placeholder variables and validators
pub mod variable;
