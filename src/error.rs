//! Error handling for stencil.
//! Defines the crate error type and the result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a template or bootstrapping logging.
///
/// Implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while traversing the source tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// A placeholder value was rejected by one of its validators
    #[error("Validation failed for {variable}: {text}")]
    ValidationError { variable: String, text: String },

    /// The requested source directory does not exist
    #[error("The directory {} does not exist.", .0.display())]
    SourceNotFound(PathBuf),

    /// The requested path exists but is not a directory
    #[error("The path {} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    /// The user declined to overwrite an existing destination
    #[error("Operation cancelled by user.")]
    Cancelled,

    /// Represents failures of the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A path could not be represented as UTF-8 for substitution
    #[error("Invalid path: {}.", .0.display())]
    InvalidPath(PathBuf),

    /// An exclusion glob could not be compiled
    #[error("Exclude pattern error: {0}.")]
    ExcludePatternError(String),

    /// A log level with this name is already registered
    #[error("Logging already has a '{0}' level.")]
    LevelExists(String),

    /// A log level name contained whitespace
    #[error("Log level name must not contain spaces: '{0}'.")]
    InvalidLevelName(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr in red and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", console::style(format!("Error: {err}")).red());
    std::process::exit(1);
}
