//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pathtidy::{Error as LibError, Scope};
use std::fmt;

/// Exit code for arguments clap rejects.
pub const INVALID_ARGUMENTS_EXIT_CODE: i32 = 6;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Processing one scope's `PATH` failed.
    Scope {
        /// The scope being processed.
        scope: Scope,
        /// What went wrong.
        source: LibError,
    },

    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Malformed or cyclic placeholder
    /// - 3: Environment store lookup failed
    /// - 4: Filesystem query failed
    /// - 5: I/O error
    /// - 6: Invalid arguments
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scope { source, .. } | CliError::Library(source) => {
                library_exit_code(source)
            }
            CliError::InvalidArguments(_) => INVALID_ARGUMENTS_EXIT_CODE,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

fn library_exit_code(err: &LibError) -> i32 {
    match err {
        LibError::MalformedPlaceholder { .. } | LibError::CyclicPlaceholder { .. } => 2,
        LibError::EnvironmentLookup { .. } => 3,
        LibError::FilesystemQuery { .. } => 4,
        LibError::FileRead { .. } | LibError::Io(_) => 5,
        LibError::Configuration(_) | LibError::Validation { .. } => 7,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Scope { scope, source } => {
                write!(f, "unable to process {scope} path: {source}")
            }
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Scope { source, .. } | CliError::Library(source) => Some(source),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::InvalidArguments(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
