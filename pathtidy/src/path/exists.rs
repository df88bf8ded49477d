//! Existence checks for expanded paths.

use std::fs;
use std::io::ErrorKind;

#[cfg(test)]
use mockall::automock;

use crate::error::{Error, Result};

/// Filesystem status queries.
#[cfg_attr(test, automock)]
pub trait FileSystem {
    /// Report whether an entry exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilesystemQuery`] for any failure other than
    /// "not found".
    fn exists(&self, path: &str) -> Result<bool>;
}

/// Queries the real filesystem.
///
/// # Examples
///
/// ```
/// use pathtidy::path::exists::{FileSystem, RealFileSystem};
///
/// let fs = RealFileSystem;
/// assert!(fs.exists(env!("CARGO_MANIFEST_DIR")).unwrap());
/// assert!(!fs.exists("/definitely/not/here/pathtidy").unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &str) -> Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(Error::FilesystemQuery {
                path: path.to_string(),
                true_path: path.to_string(),
                source,
            }),
        }
    }
}
