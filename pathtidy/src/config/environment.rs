//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHTIDY_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Comma-separated list of variables to derive placeholders from.
pub const VARIABLES_ENV: &str = "PATHTIDY_VARIABLES";

/// Positive integer ceiling on nested expansion.
pub const MAX_DEPTH_ENV: &str = "PATHTIDY_MAX_EXPANSION_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathtidy::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(names) = env::var(VARIABLES_ENV) {
            config.variables = Some(Self::parse_names(&names));
        }

        if let Ok(depth) = env::var(MAX_DEPTH_ENV) {
            config.max_expansion_depth = Some(Self::parse_depth(&depth)?);
        }

        Ok(())
    }

    /// Split a comma-separated list, dropping blanks.
    fn parse_names(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    fn parse_depth(s: &str) -> Result<usize> {
        s.trim()
            .parse::<usize>()
            .ok()
            .filter(|depth| *depth > 0)
            .ok_or_else(|| Error::Validation {
                field: MAX_DEPTH_ENV.into(),
                message: format!("Must be a positive integer, got '{s}'"),
            })
    }
}
