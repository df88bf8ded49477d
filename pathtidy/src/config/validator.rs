//! Configuration validation.

use crate::config::schema::{Config, PlaceholderSeed};
use crate::error::{Error, Result};
use crate::placeholder::{SENTINEL, SEPARATOR};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathtidy::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_expansion_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref variables) = config.variables {
            for name in variables {
                Self::validate_variable_name(name)?;
            }
        }

        for seed in config.placeholder_seeds() {
            Self::validate_seed(seed)?;
        }

        if config.max_expansion_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_expansion_depth".into(),
                message: "must be at least 1".into(),
            });
        }

        Ok(())
    }

    fn validate_variable_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                field: "variables".into(),
                message: "variable names must not be empty".into(),
            });
        }
        if name.contains([SENTINEL, ';', '=']) {
            return Err(Error::Validation {
                field: "variables".into(),
                message: format!("'{name}' contains a reserved character"),
            });
        }
        Ok(())
    }

    fn validate_seed(seed: &PlaceholderSeed) -> Result<()> {
        if seed.prefix.trim().is_empty() {
            return Err(Error::Validation {
                field: "placeholders.prefix".into(),
                message: "prefix must not be empty".into(),
            });
        }
        if seed.prefix.contains(SENTINEL) {
            return Err(Error::Validation {
                field: "placeholders.prefix".into(),
                message: format!("'{}' must be a concrete path", seed.prefix),
            });
        }

        let name = seed
            .token
            .strip_suffix(SEPARATOR)
            .and_then(|t| t.strip_prefix(SENTINEL))
            .and_then(|t| t.strip_suffix(SENTINEL));
        match name {
            Some(name) if !name.is_empty() && !name.contains(SENTINEL) => Ok(()),
            _ => Err(Error::Validation {
                field: "placeholders.token".into(),
                message: format!("'{}' must look like %NAME%\\", seed.token),
            }),
        }
    }
}
