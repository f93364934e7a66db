//! Application-wide logging setup.
//!
//! Logging is configured at most once per process. The first call to
//! [`setup_logging`], [`setup_logging_with`], [`setup_logging_to`] or
//! [`get_logger`] resolves the
//! level from [`Settings`] and installs a single `env_logger` handler. Every
//! later call returns the same [`LoggingState`] without touching the handler.

mod level;

pub use level::{add_log_level, log_level_label, Level};

use std::fmt;
use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use env_logger::{Builder, Target, WriteStyle};

use crate::constants::ENV_FILE;
use crate::settings::{env_file_error, settings, Settings};

static STATE: OnceLock<LoggingState> = OnceLock::new();
static INSTALLS: AtomicUsize = AtomicUsize::new(0);

/// The handler chosen during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// Colored output on stderr, panics logged with a backtrace
    Console,
    /// Timestamped `|`-separated lines on stdout, or on the writer given to
    /// [`setup_logging_to`]
    Plain,
}

#[derive(Debug)]
pub struct LoggingState {
    level: Level,
    handler: HandlerKind,
    installed: bool,
}

impl LoggingState {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn handler(&self) -> HandlerKind {
        self.handler
    }

    /// Whether the handler became the process logger. False when another
    /// `log` implementation was registered first.
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

/// Resolves the effective level: an explicit, registered level name wins,
/// anything else falls back to the debug-derived default.
pub fn resolve_level(settings: &Settings) -> Level {
    settings
        .log_level
        .as_deref()
        .and_then(Level::from_name)
        .unwrap_or_else(|| settings.default_log_level())
}

/// Sets up logging from the process-wide settings.
pub fn setup_logging() -> &'static LoggingState {
    setup_logging_with(settings())
}

/// Sets up logging from `settings` unless logging is already configured.
pub fn setup_logging_with(settings: &Settings) -> &'static LoggingState {
    STATE.get_or_init(|| install(settings, None))
}

/// Sets up logging from `settings` with the plain handler writing to `writer`,
/// unless logging is already configured.
pub fn setup_logging_to(
    settings: &Settings,
    writer: Box<dyn Write + Send>,
) -> &'static LoggingState {
    STATE.get_or_init(|| install(settings, Some(writer)))
}

pub fn is_configured() -> bool {
    STATE.get().is_some()
}

/// Number of handlers built in this process.
pub fn install_count() -> usize {
    INSTALLS.load(Ordering::SeqCst)
}

/// Returns a logger named `name`, setting up logging first if needed.
pub fn get_logger(name: &str) -> Logger {
    setup_logging();
    Logger { name: name.to_string() }
}

fn install(settings: &Settings, writer: Option<Box<dyn Write + Send>>) -> LoggingState {
    INSTALLS.fetch_add(1, Ordering::SeqCst);

    let level = resolve_level(settings);
    let (handler, logger) = match writer {
        Some(writer) => (HandlerKind::Plain, plain_builder(level, Target::Pipe(writer)).build()),
        None if console_available() => (HandlerKind::Console, console_builder(level).build()),
        None => (HandlerKind::Plain, plain_builder(level, Target::Stdout).build()),
    };

    let installed = log::set_boxed_logger(Box::new(logger)).is_ok();
    if installed {
        log::set_max_level(level.as_level_filter());
        if handler == HandlerKind::Console {
            install_panic_hook();
        }
    }

    log::debug!("Logging configured at {level} ({handler:?})");
    if let Some(error) = env_file_error() {
        log::warn!("Ignored {ENV_FILE}: {error}");
    }
    LoggingState { level, handler, installed }
}

fn console_available() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn console_builder(level: Level) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level.as_level_filter())
        .target(Target::Stderr)
        .write_style(WriteStyle::Always)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let timestamp = buf.timestamp_seconds();
            writeln!(
                buf,
                "{timestamp} {style}{:<8}{style:#} {}",
                log_level_label(record.level()),
                record.args()
            )
        });
    builder
}

fn plain_builder(level: Level, target: Target) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level.as_level_filter())
        .target(target)
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            let timestamp = buf.timestamp_seconds();
            writeln!(
                buf,
                "{timestamp} | {:<8} | {} | {}",
                log_level_label(record.level()),
                record.target(),
                record.args()
            )
        });
    builder
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!(target: "panic", "{info}\n{backtrace}");
    }));
}

/// A named logging handle with numeric level filtering.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        STATE.get().is_some_and(|state| level >= state.level)
            && log::log_enabled!(target: self.name.as_str(), level.as_log_level())
    }

    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if self.is_enabled_for(level) {
            log::log!(target: self.name.as_str(), level.as_log_level(), "{message}");
        }
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::TRACE, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::INFO, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::WARNING, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::ERROR, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::CRITICAL, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(debug: bool, log_level: Option<&str>) -> Settings {
        Settings { debug, log_level: log_level.map(str::to_string) }
    }

    #[test]
    fn test_resolve_level_defaults() {
        assert_eq!(resolve_level(&settings(false, None)), Level::INFO);
        assert_eq!(resolve_level(&settings(true, None)), Level::DEBUG);
    }

    #[test]
    fn test_explicit_level_overrides_default() {
        assert_eq!(resolve_level(&settings(false, Some("TRACE"))).value(), 5);
        assert_eq!(resolve_level(&settings(true, Some("error"))), Level::ERROR);
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        assert_eq!(resolve_level(&settings(true, Some("LOUD"))), Level::DEBUG);
        assert_eq!(resolve_level(&settings(false, Some("LOUD"))), Level::INFO);
    }
}
