//! Error types for the pathtidy library.
//!
//! Every variant here aborts processing of the environment-store location it
//! was raised in. A path that simply no longer exists is *not* an error; the
//! processor records it as a skipped entry instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::Scope;

/// Result type alias for operations that may fail with a pathtidy error.
///
/// # Examples
///
/// ```
/// use pathtidy::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from(r"C:\Windows"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathtidy library.
#[derive(Debug, Error)]
pub enum Error {
    /// A `%` placeholder reference was opened but never closed.
    #[error("malformed placeholder in path {path:?}: unterminated '%' reference")]
    MalformedPlaceholder {
        /// The path string containing the unterminated reference.
        path: String,
    },

    /// A placeholder expanded back into itself, or nesting ran too deep.
    #[error("cyclic placeholder '%{name}%' (expansion chain: {})", chain.join(" -> "))]
    CyclicPlaceholder {
        /// The name that re-entered its own expansion chain.
        name: String,
        /// The chain of names being expanded when the cycle was detected.
        chain: Vec<String>,
    },

    /// Reading a value from the environment store or the process environment failed.
    #[error("cannot read '{name}' from {}: {reason}", scope_label(scope))]
    EnvironmentLookup {
        /// The scope that was read, or `None` for the process environment.
        scope: Option<Scope>,
        /// The name of the value that could not be read.
        name: String,
        /// Why the read failed.
        reason: String,
    },

    /// A filesystem status query failed with something other than "not found".
    #[error("cannot query {true_path:?} (from {path:?}): {source}")]
    FilesystemQuery {
        /// The `PATH` entry as written.
        path: String,
        /// The expanded path that was queried.
        true_path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration or snapshot file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration or snapshot file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn scope_label(scope: &Option<Scope>) -> String {
    match scope {
        Some(scope) => format!("{scope} environment"),
        None => "process environment".to_string(),
    }
}

impl Error {
    /// Check if the error came from placeholder expansion.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtidy::Error;
    ///
    /// let err = Error::MalformedPlaceholder { path: "%FOO".into() };
    /// assert!(err.is_expansion_error());
    /// ```
    #[must_use]
    pub fn is_expansion_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPlaceholder { .. } | Self::CyclicPlaceholder { .. }
        )
    }

    /// Check if the error came from the environment store.
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::EnvironmentLookup { .. })
    }

    /// Check if the error came from a filesystem status query.
    #[must_use]
    pub fn is_filesystem_error(&self) -> bool {
        matches!(self, Self::FilesystemQuery { .. })
    }

    /// Check if the error came from loading configuration or snapshot files.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::FileRead { .. }
        )
    }
}
