//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::path::expand::DEFAULT_MAX_DEPTH;
use crate::placeholder::DEFAULT_VARIABLES;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults via
/// the accessor methods.
///
/// # Examples
///
/// ```
/// use pathtidy::config::{Config, PlaceholderSeed};
///
/// let config = Config {
///     variables: Some(vec!["APPDATA".to_string()]),
///     placeholders: Some(vec![PlaceholderSeed {
///         prefix: r"D:\Tools\".to_string(),
///         token: r"%TOOLS%\".to_string(),
///     }]),
///     ..Default::default()
/// };
/// assert_eq!(config.variable_names(), vec!["APPDATA".to_string()]);
/// assert_eq!(config.max_expansion_depth(), 32);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variables whose values become placeholders.
    pub variables: Option<Vec<String>>,

    /// Extra prefix mappings registered after the built-in ones.
    pub placeholders: Option<Vec<PlaceholderSeed>>,

    /// Ceiling on nested placeholder expansion.
    pub max_expansion_depth: Option<usize>,
}

/// A statically configured prefix mapping.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderSeed {
    /// Concrete directory prefix.
    pub prefix: String,
    /// Token displayed in place of the prefix, e.g. `%TOOLS%\`.
    pub token: String,
}

impl Config {
    /// Variable names to derive placeholders from.
    #[must_use]
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.clone().unwrap_or_else(|| {
            DEFAULT_VARIABLES
                .iter()
                .map(|name| (*name).to_string())
                .collect()
        })
    }

    /// Configured prefix mappings (empty when unset).
    #[must_use]
    pub fn placeholder_seeds(&self) -> &[PlaceholderSeed] {
        self.placeholders.as_deref().unwrap_or_default()
    }

    /// Effective expansion depth ceiling.
    #[must_use]
    pub fn max_expansion_depth(&self) -> usize {
        self.max_expansion_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Overlay `other` onto `self`; fields set in `other` win.
    pub fn merge_from(&mut self, other: &Config) {
        if other.variables.is_some() {
            self.variables.clone_from(&other.variables);
        }
        if other.placeholders.is_some() {
            self.placeholders.clone_from(&other.placeholders);
        }
        if other.max_expansion_depth.is_some() {
            self.max_expansion_depth = other.max_expansion_depth;
        }
    }
}
