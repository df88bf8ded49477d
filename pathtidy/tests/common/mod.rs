//! Common test utilities for integration tests.
//!
//! Entries are built from real temporary directories. Directory names may
//! contain a backslash, which keeps `prefix\rest` style entries valid on
//! every platform: on Windows `tools\bin` is two components, elsewhere it is
//! one directory whose name contains `\`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A temporary directory tree for building `PATH` entries.
pub struct PathFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl PathFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// Root of the fixture as a string.
    pub fn root(&self) -> String {
        self.temp.path().to_str().unwrap().to_string()
    }

    /// Path of `relative` under the root, without creating it.
    pub fn path(&self, relative: &str) -> String {
        self.temp.path().join(relative).to_str().unwrap().to_string()
    }

    /// Creates `relative` under the root and returns its path.
    pub fn mkdir(&self, relative: &str) -> String {
        let dir = self.temp.path().join(relative);
        fs::create_dir_all(&dir).unwrap();
        dir.to_str().unwrap().to_string()
    }

    /// Writes `contents` to `name` under the root and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> String {
        let file = self.temp.path().join(name);
        fs::write(&file, contents).unwrap();
        file.to_str().unwrap().to_string()
    }

    /// The fixture root.
    pub fn dir(&self) -> &Path {
        self.temp.path()
    }
}
