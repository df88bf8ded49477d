//! Placeholder registry.
//!
//! Maps concrete directory prefixes (such as `C:\Program Files\`) to the
//! placeholder token used when displaying paths under them (`%PF64%\`).
//! Prefixes always end with a backslash so `C:\Program Files` never matches
//! `C:\Program Files (x86)\...`.
//!
//! The registry is assembled once with [`PlaceholderRegistryBuilder`] and is
//! read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use pathtidy::placeholder::PlaceholderRegistry;
//! use pathtidy::path::expand::MapEnv;
//!
//! let env = MapEnv::new().with("APPDATA", r"C:\Users\me\AppData\Roaming");
//! let registry = PlaceholderRegistry::builder()
//!     .with_defaults()
//!     .with_variables(&["APPDATA"], &env)
//!     .unwrap()
//!     .build();
//!
//! let (prefix, token) = registry
//!     .lookup_best_match(r"C:\Users\me\AppData\Roaming\Tool")
//!     .unwrap();
//! assert_eq!(prefix, r"C:\Users\me\AppData\Roaming\");
//! assert_eq!(token, r"%APPDATA%\");
//! ```

use crate::config::{Config, ConfigValidator};
use crate::error::Result;
use crate::path::expand::EnvLookup;

/// Path separator used by every prefix and token.
pub const SEPARATOR: char = '\\';

/// Delimiter around placeholder names.
pub const SENTINEL: char = '%';

/// Prefixes that are always registered.
pub const DEFAULT_PLACEHOLDERS: [(&str, &str); 2] = [
    (r"C:\Program Files\", r"%PF64%\"),
    (r"C:\Program Files (x86)\", r"%PF86%\"),
];

/// Environment variables whose values become placeholders by default.
pub const DEFAULT_VARIABLES: [&str; 3] = ["APPDATA", "LOCALAPPDATA", "ALLUSERSPROFILE"];

/// Append a trailing separator unless one is already present.
///
/// # Examples
///
/// ```
/// use pathtidy::placeholder::with_trailing_separator;
///
/// assert_eq!(with_trailing_separator(r"C:\Tools"), r"C:\Tools\");
/// assert_eq!(with_trailing_separator(r"C:\Tools\"), r"C:\Tools\");
/// ```
#[must_use]
pub fn with_trailing_separator(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{SEPARATOR}")
    }
}

/// Token displayed for an environment variable, e.g. `%APPDATA%\`.
#[must_use]
pub fn token_for_variable(name: &str) -> String {
    format!("{SENTINEL}{name}{SENTINEL}{SEPARATOR}")
}

/// A single prefix-to-token mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    prefix: String,
    token: String,
}

impl Placeholder {
    /// The concrete prefix, always ending with a separator.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The placeholder token substituted for the prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Immutable set of prefix mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderRegistry {
    entries: Vec<Placeholder>,
}

impl PlaceholderRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> PlaceholderRegistryBuilder {
        PlaceholderRegistryBuilder::default()
    }

    /// Build the registry described by `config`.
    ///
    /// Registration order is the built-in Program Files prefixes, then one
    /// entry per configured variable read from `env`, then the configured
    /// seeds. Later registrations of the same prefix overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if `config` is
    /// invalid and propagates lookup failures from `env`.
    pub fn from_config<E: EnvLookup + ?Sized>(config: &Config, env: &E) -> Result<Self> {
        ConfigValidator::validate(config)?;
        let mut builder = Self::builder()
            .with_defaults()
            .with_variables(&config.variable_names(), env)?;
        for seed in config.placeholder_seeds() {
            builder.register(&seed.prefix, &seed.token);
        }
        Ok(builder.build())
    }

    /// Find the mapping whose prefix `path` starts with.
    ///
    /// The comparison is a case-sensitive string prefix test. When several
    /// prefixes match, the longest one wins.
    #[must_use]
    pub fn lookup_best_match(&self, path: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .filter(|entry| path.starts_with(entry.prefix.as_str()))
            .max_by_key(|entry| entry.prefix.len())
            .map(|entry| (entry.prefix.as_str(), entry.token.as_str()))
    }

    /// All mappings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`PlaceholderRegistry`].
#[derive(Debug, Default)]
pub struct PlaceholderRegistryBuilder {
    entries: Vec<Placeholder>,
}

impl PlaceholderRegistryBuilder {
    /// Insert a mapping, overwriting the token of an existing prefix.
    ///
    /// The prefix is stored with a trailing separator.
    pub fn register(&mut self, prefix: &str, token: &str) -> &mut Self {
        let prefix = with_trailing_separator(prefix);
        match self.entries.iter_mut().find(|entry| entry.prefix == prefix) {
            Some(existing) => {
                log::debug!(
                    "placeholder prefix {prefix} re-registered: {} -> {token}",
                    existing.token
                );
                existing.token = token.to_string();
            }
            None => self.entries.push(Placeholder {
                prefix,
                token: token.to_string(),
            }),
        }
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, prefix: &str, token: &str) -> Self {
        self.register(prefix, token);
        self
    }

    /// Register the fixed Program Files prefixes.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        for (prefix, token) in DEFAULT_PLACEHOLDERS {
            self.register(prefix, token);
        }
        self
    }

    /// Register one mapping per named variable with a non-empty value.
    ///
    /// Values that still contain `%` are skipped, since a token-shaped prefix
    /// would rewrite already normalized paths.
    ///
    /// Each value (plus a trailing separator) maps to `%NAME%\`.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures from `env`.
    pub fn with_variables<S, E>(mut self, names: &[S], env: &E) -> Result<Self>
    where
        S: AsRef<str>,
        E: EnvLookup + ?Sized,
    {
        for name in names {
            let name = name.as_ref();
            let value = env.lookup(name)?;
            if value.is_empty() {
                log::debug!("{name} is not set; no placeholder registered");
                continue;
            }
            if value.contains(SENTINEL) {
                log::debug!("{name} holds an unexpanded reference; no placeholder registered");
                continue;
            }
            self.register(&value, &token_for_variable(name));
        }
        Ok(self)
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> PlaceholderRegistry {
        PlaceholderRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::expand::MapEnv;

    #[test]
    fn test_defaults_present() {
        let registry = PlaceholderRegistry::builder().with_defaults().build();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup_best_match(r"C:\Program Files\Foo\bin"),
            Some((r"C:\Program Files\", r"%PF64%\"))
        );
        assert_eq!(
            registry.lookup_best_match(r"C:\Program Files (x86)\Foo"),
            Some((r"C:\Program Files (x86)\", r"%PF86%\"))
        );
    }

    #[test]
    fn test_prefix_requires_separator_boundary() {
        let registry = PlaceholderRegistry::builder().with_defaults().build();
        assert_eq!(registry.lookup_best_match(r"C:\Program FilesX\bin"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = PlaceholderRegistry::builder().with_defaults().build();
        assert_eq!(registry.lookup_best_match(r"c:\program files\Foo"), None);
    }

    #[test]
    fn test_register_appends_separator() {
        let registry = PlaceholderRegistry::builder()
            .with(r"D:\Tools", r"%TOOLS%\")
            .build();
        let entry = registry.iter().next().unwrap();
        assert_eq!(entry.prefix(), r"D:\Tools\");
        assert_eq!(entry.token(), r"%TOOLS%\");
    }

    #[test]
    fn test_register_overwrites_existing_prefix() {
        let registry = PlaceholderRegistry::builder()
            .with_defaults()
            .with(r"C:\Program Files", r"%ProgramFiles%\")
            .build();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup_best_match(r"C:\Program Files\Git"),
            Some((r"C:\Program Files\", r"%ProgramFiles%\"))
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let registry = PlaceholderRegistry::builder()
            .with(r"C:\Users\me", r"%USERPROFILE%\")
            .with(r"C:\Users\me\AppData\Roaming", r"%APPDATA%\")
            .build();
        assert_eq!(
            registry.lookup_best_match(r"C:\Users\me\AppData\Roaming\npm"),
            Some((r"C:\Users\me\AppData\Roaming\", r"%APPDATA%\"))
        );
        assert_eq!(
            registry.lookup_best_match(r"C:\Users\me\bin"),
            Some((r"C:\Users\me\", r"%USERPROFILE%\"))
        );
    }

    #[test]
    fn test_with_variables_skips_unset_and_empty() {
        let env = MapEnv::new()
            .with("APPDATA", r"C:\Users\me\AppData\Roaming")
            .with("LOCALAPPDATA", "");
        let registry = PlaceholderRegistry::builder()
            .with_variables(&DEFAULT_VARIABLES, &env)
            .unwrap()
            .build();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup_best_match(r"C:\Users\me\AppData\Roaming\Tool"),
            Some((r"C:\Users\me\AppData\Roaming\", r"%APPDATA%\"))
        );
    }

    #[test]
    fn test_from_config_seeds_and_variables() {
        use crate::config::PlaceholderSeed;

        let env = MapEnv::new().with("TOOLS_HOME", r"D:\Tools");
        let config = Config {
            variables: Some(vec!["TOOLS_HOME".to_string()]),
            placeholders: Some(vec![PlaceholderSeed {
                prefix: r"C:\Program Files\".to_string(),
                token: r"%ProgramFiles%\".to_string(),
            }]),
            ..Default::default()
        };

        let registry = PlaceholderRegistry::from_config(&config, &env).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.lookup_best_match(r"D:\Tools\bin"),
            Some((r"D:\Tools\", r"%TOOLS_HOME%\"))
        );
        assert_eq!(
            registry.lookup_best_match(r"C:\Program Files\Git"),
            Some((r"C:\Program Files\", r"%ProgramFiles%\"))
        );
    }

    #[test]
    fn test_from_default_config() {
        let env = MapEnv::new().with("LOCALAPPDATA", r"C:\Users\me\AppData\Local");
        let registry = PlaceholderRegistry::from_config(&Config::default(), &env).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_from_config_rejects_placeholder_prefix() {
        use crate::config::PlaceholderSeed;

        let config = Config {
            placeholders: Some(vec![PlaceholderSeed {
                prefix: r"%PF64%\".to_string(),
                token: r"%OTHER%\".to_string(),
            }]),
            ..Default::default()
        };
        let err = PlaceholderRegistry::from_config(&config, &MapEnv::new()).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_from_config_normalizes_idempotently() {
        use crate::config::PlaceholderSeed;
        use crate::path::normalize::normalize_for_display;

        let env = MapEnv::new()
            .with("APPDATA", r"C:\Users\me\AppData\Roaming")
            .with("LOCALAPPDATA", "%APPDATA%");
        let config = Config {
            variables: Some(vec!["APPDATA".to_string(), "LOCALAPPDATA".to_string()]),
            placeholders: Some(vec![PlaceholderSeed {
                prefix: r"C:\Program Files\Foo".to_string(),
                token: r"%FOO%\".to_string(),
            }]),
            ..Default::default()
        };
        let registry = PlaceholderRegistry::from_config(&config, &env).unwrap();
        assert_eq!(registry.len(), 4);

        for path in [
            r"C:\Program Files\Foo\bin",
            r"C:\Program Files\Bar",
            r"C:\Users\me\AppData\Roaming\npm",
            r"%APPDATA%\Tool",
        ] {
            let once = normalize_for_display(&registry, path);
            let twice = normalize_for_display(&registry, once.as_str());
            assert_eq!(once.as_str(), twice.as_str(), "{path}");
        }
    }

    #[test]
    fn test_with_variables_skips_unexpanded_values() {
        let env = MapEnv::new().with("APPDATA", "%USERPROFILE%\\AppData");
        let registry = PlaceholderRegistry::builder()
            .with_variables(&["APPDATA"], &env)
            .unwrap()
            .build();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_token_for_variable() {
        assert_eq!(token_for_variable("LOCALAPPDATA"), r"%LOCALAPPDATA%\");
    }
}
