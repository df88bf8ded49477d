//! Logging infrastructure for the pathtidy library.
//!
//! This module provides a stderr-based logging sink with configurable log
//! levels. Lines carry a local timestamp, a level tag and optional
//! `key=value` fields.

use std::env;
use std::fmt;

use chrono::Local;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PATHTIDY_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathtidy::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only errors are printed.
    Quiet,
    /// Errors, warnings and informational notices.
    Normal,
    /// Everything, including debug enumeration of raw path entries.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtidy::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger.
///
/// # Examples
///
/// ```
/// use pathtidy::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn_with("no longer exists", &[("path", r"C:\Old\bin")]);
/// logger.debug("not printed below Verbose");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message. Printed at every level.
    pub fn error(&self, message: &str) {
        self.error_with(message, &[]);
    }

    /// Logs an error message with structured fields.
    pub fn error_with(&self, message: &str, fields: &[(&str, &str)]) {
        Self::emit("ERR", message, fields);
    }

    /// Logs a warning message. Printed at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        self.warn_with(message, &[]);
    }

    /// Logs a warning message with structured fields.
    pub fn warn_with(&self, message: &str, fields: &[(&str, &str)]) {
        if self.level >= LogLevel::Normal {
            Self::emit("WRN", message, fields);
        }
    }

    /// Logs an informational message. Printed at Normal and Verbose levels.
    pub fn info(&self, message: &str) {
        self.info_with(message, &[]);
    }

    /// Logs an informational message with structured fields.
    pub fn info_with(&self, message: &str, fields: &[(&str, &str)]) {
        if self.level >= LogLevel::Normal {
            Self::emit("INF", message, fields);
        }
    }

    /// Logs a debug message. Printed at Verbose level only.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            Self::emit("DBG", message, &[]);
        }
    }

    fn emit(tag: &str, message: &str, fields: &[(&str, &str)]) {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        eprintln!("{}", format_line(&timestamp, tag, message, fields));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Render one log line.
///
/// Field values containing spaces are quoted so lines stay splittable.
fn format_line(timestamp: &str, tag: &str, message: &str, fields: &[(&str, &str)]) -> String {
    let mut line = format!("{timestamp} {tag} {message}");
    for (key, value) in fields {
        if value.is_empty() || value.contains(' ') {
            line.push_str(&format!(" {key}={value:?}"));
        } else {
            line.push_str(&format!(" {key}={value}"));
        }
    }
    line
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `PATHTIDY_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use pathtidy::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
