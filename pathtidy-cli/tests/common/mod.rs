//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated home directory so no user configuration leaks in
//! - Snapshot and configuration file writers
//! - Directory helpers for building `PATH` entries
//!
//! Directory names may contain a backslash. On Windows `tools\bin` is two
//! components; elsewhere it is one directory whose name contains `\`. Either
//! way `%TOOLS%\bin` expands to an existing path.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would change the behaviour under test.
const PATHTIDY_ENV_VARS: [&str; 4] = [
    "PATHTIDY_CONFIG",
    "PATHTIDY_VARIABLES",
    "PATHTIDY_MAX_EXPANSION_DEPTH",
    "PATHTIDY_LOG_MODE",
];

/// Test environment with an isolated home directory and snapshot file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the snapshot file written by `write_snapshot`
    pub snapshot: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let snapshot = temp_path.join("snapshot.yaml");

        Self {
            temp_dir,
            temp_path,
            snapshot,
        }
    }

    /// Get a command builder without `--snapshot`.
    ///
    /// The home directory points into the temp dir and `PATHTIDY_*`
    /// variables are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathtidy").expect("Failed to find pathtidy binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path);
        for var in PATHTIDY_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder reading from this environment's snapshot.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--snapshot").arg(&self.snapshot);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of `name` under the temp dir as a string, without creating it.
    pub fn path_of(&self, name: &str) -> String {
        self.temp_path.join(name).to_str().unwrap().to_string()
    }

    /// Create a subdirectory and return its path as a string.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_str().unwrap().to_string()
    }

    /// Write the snapshot file with the given user and machine `PATH` values.
    pub fn write_snapshot(&self, user_path: &str, machine_path: &str) {
        self.write_snapshot_values(&[
            ("user", "PATH", user_path),
            ("machine", "PATH", machine_path),
        ]);
    }

    /// Write the snapshot file from `(scope, name, value)` triples.
    pub fn write_snapshot_values(&self, values: &[(&str, &str, &str)]) {
        let mut scopes: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
        for (scope, name, value) in values {
            scopes.entry(*scope).or_default().insert(*name, *value);
        }
        let contents = serde_yaml::to_string(&scopes).expect("Failed to serialize snapshot");
        self.write_snapshot_raw(&contents);
    }

    /// Write raw snapshot contents.
    pub fn write_snapshot_raw(&self, contents: &str) {
        std::fs::write(&self.snapshot, contents).expect("Failed to write snapshot");
    }

    /// Write a configuration file and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.temp_path.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Render a configuration with no default variables and one placeholder.
    pub fn placeholder_config(prefix: &str, token: &str) -> String {
        let mut seed = BTreeMap::new();
        seed.insert("prefix", prefix);
        seed.insert("token", token);

        let mut config = serde_yaml::Mapping::new();
        config.insert("variables".into(), serde_yaml::Value::Sequence(Vec::new()));
        config.insert(
            "placeholders".into(),
            serde_yaml::to_value(vec![seed]).expect("Failed to serialize placeholder"),
        );
        serde_yaml::to_string(&config).expect("Failed to serialize config")
    }
}
