//! Utility functions for CLI operations.
//!
//! This module provides configuration loading and environment store
//! selection shared by the CLI entry point and its command.

use crate::error::CliError;
use pathtidy::{Config, ConfigBuilder, EnvironmentStore, RegistryStore, SnapshotStore};
use std::path::{Path, PathBuf};

/// Global CLI options.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Only print errors.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load configuration.
///
/// Sources are merged with precedence:
/// 1. Environment variables (`PATHTIDY_*`)
/// 2. The `--config` file, or `~/.pathtidy/config.yaml` if present
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open the environment store to read `PATH` values from.
///
/// A snapshot file takes the place of the registry when given.
pub fn open_store(snapshot: Option<&Path>) -> Result<Box<dyn EnvironmentStore>, CliError> {
    match snapshot {
        Some(path) => Ok(Box::new(SnapshotStore::load(path)?)),
        None => Ok(Box::new(RegistryStore::new())),
    }
}
