//! Environment-store access.
//!
//! An environment store holds the `PATH` value (and any other named value)
//! for one of two scopes: the current user or the whole machine. On Windows
//! these live in the registry; [`SnapshotStore`] and [`MemoryStore`] provide
//! the same contract from a YAML file or from memory.
//!
//! # Examples
//!
//! ```
//! use pathtidy::store::{EnvironmentStore, MemoryStore, Scope};
//!
//! let store = MemoryStore::new().with_value(Scope::User, "PATH", r"C:\Tools;C:\Bin");
//! assert_eq!(store.read_value(Scope::User, "PATH").unwrap(), r"C:\Tools;C:\Bin");
//! assert!(store.read_value(Scope::Machine, "PATH").is_err());
//! ```

pub mod registry;
pub mod snapshot;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use registry::RegistryStore;
pub use snapshot::SnapshotStore;

/// Name of the value holding the directory search list.
pub const PATH_VALUE: &str = "PATH";

/// One of the two environment-store locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Per-user environment (`HKEY_CURRENT_USER\Environment`).
    User,
    /// Machine-wide environment.
    Machine,
}

impl Scope {
    /// Both scopes, in processing order.
    pub const ALL: [Scope; 2] = [Scope::User, Scope::Machine];

    /// Registry sub-key holding this scope's environment, relative to its hive.
    #[must_use]
    pub const fn key_path(self) -> &'static str {
        match self {
            Self::User => "Environment",
            Self::Machine => r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment",
        }
    }

    /// Name of the registry hive the key lives under.
    #[must_use]
    pub const fn hive_name(self) -> &'static str {
        match self {
            Self::User => "HKEY_CURRENT_USER",
            Self::Machine => "HKEY_LOCAL_MACHINE",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Machine => write!(f, "machine"),
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "machine" | "system" => Ok(Self::Machine),
            _ => Err(Error::Validation {
                field: "scope".into(),
                message: format!("unknown scope '{s}' (expected user or machine)"),
            }),
        }
    }
}

/// Reads named values from an environment store.
pub trait EnvironmentStore {
    /// Read the value called `name` from `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnvironmentLookup`] when the key or value does not
    /// exist or cannot be read.
    fn read_value(&self, scope: Scope, name: &str) -> Result<String>;

    /// Read the `PATH` value of `scope`.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentStore::read_value`].
    fn read_path(&self, scope: Scope) -> Result<String> {
        self.read_value(scope, PATH_VALUE)
    }
}

/// In-memory environment store.
///
/// Value names are matched case-insensitively, like the registry does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<(Scope, String), String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_value(mut self, scope: Scope, name: &str, value: &str) -> Self {
        self.insert(scope, name, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, scope: Scope, name: &str, value: &str) {
        self.values
            .insert((scope, name.to_uppercase()), value.to_string());
    }
}

impl EnvironmentStore for MemoryStore {
    fn read_value(&self, scope: Scope, name: &str) -> Result<String> {
        self.values
            .get(&(scope, name.to_uppercase()))
            .cloned()
            .ok_or_else(|| Error::EnvironmentLookup {
                scope: Some(scope),
                name: name.to_string(),
                reason: "value not found".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display_and_parse() {
        assert_eq!(Scope::User.to_string(), "user");
        assert_eq!(Scope::Machine.to_string(), "machine");
        assert_eq!("USER".parse::<Scope>().unwrap(), Scope::User);
        assert_eq!("system".parse::<Scope>().unwrap(), Scope::Machine);
        assert!("global".parse::<Scope>().is_err());
    }

    #[test]
    fn test_scope_key_paths() {
        assert_eq!(Scope::User.key_path(), "Environment");
        assert!(Scope::Machine.key_path().ends_with(r"Session Manager\Environment"));
        assert_eq!(Scope::Machine.hive_name(), "HKEY_LOCAL_MACHINE");
    }

    #[test]
    fn test_memory_store_case_insensitive_names() {
        let store = MemoryStore::new().with_value(Scope::Machine, "Path", r"C:\Windows");
        assert_eq!(store.read_path(Scope::Machine).unwrap(), r"C:\Windows");
    }

    #[test]
    fn test_memory_store_scopes_are_separate() {
        let store = MemoryStore::new().with_value(Scope::User, "PATH", "a");
        let err = store.read_path(Scope::Machine).unwrap_err();
        assert!(err.is_lookup_error());
        assert!(err.to_string().contains("machine"));
    }
}
