//! Environment store loaded from a YAML snapshot.
//!
//! A snapshot lets an exported environment be inspected on any machine:
//!
//! ```yaml
//! user:
//!   PATH: '%LOCALAPPDATA%\Programs\Tool;C:\Tools'
//! machine:
//!   PATH: 'C:\Windows\system32;C:\Windows'
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{EnvironmentStore, MemoryStore, Scope};
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotFile {
    #[serde(default)]
    user: BTreeMap<String, String>,
    #[serde(default)]
    machine: BTreeMap<String, String>,
}

/// Environment values read from a snapshot file.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    inner: MemoryStore,
}

impl SnapshotStore {
    /// Parse a snapshot from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or contains
    /// keys other than `user` and `machine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtidy::store::{EnvironmentStore, Scope, SnapshotStore};
    ///
    /// let store = SnapshotStore::from_yaml("user:\n  PATH: 'C:\\Tools'\n").unwrap();
    /// assert_eq!(store.read_path(Scope::User).unwrap(), r"C:\Tools");
    /// ```
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let file: SnapshotFile = serde_yaml::from_str(contents)?;
        let mut inner = MemoryStore::new();
        for (name, value) in &file.user {
            inner.insert(Scope::User, name, value);
        }
        for (name, value) in &file.machine {
            inner.insert(Scope::Machine, name, value);
        }
        Ok(Self { inner })
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read, or
    /// [`Error::Configuration`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }
}

impl EnvironmentStore for SnapshotStore {
    fn read_value(&self, scope: Scope, name: &str) -> Result<String> {
        self.inner.read_value(scope, name)
    }
}
