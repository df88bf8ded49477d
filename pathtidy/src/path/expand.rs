//! Placeholder expansion.
//!
//! Expansion replaces every `%NAME%` reference in a path with the value of
//! the environment variable `NAME`, expanding that value recursively. An
//! undefined variable expands to the empty string, matching the permissive
//! behaviour of the Windows shell.
//!
//! Expansion fails when:
//! - a `%` has no closing partner ([`Error::MalformedPlaceholder`]),
//! - a variable refers back to itself, directly or through other variables,
//!   or nesting exceeds the configured depth ([`Error::CyclicPlaceholder`]).

use std::collections::HashMap;
use std::env::{self, VarError};

use crate::error::{Error, Result};
use crate::placeholder::SENTINEL;

/// Default ceiling on nested expansion.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Resolves variable names to values.
pub trait EnvLookup {
    /// Look up `name`. Undefined names resolve to an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnvironmentLookup`] if the value exists but cannot be
    /// read.
    fn lookup(&self, name: &str) -> Result<String>;
}

/// Looks names up in this process's environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Result<String> {
        // std::env rejects these names outright
        if name.is_empty() || name.contains(['=', '\0']) {
            return Ok(String::new());
        }
        match env::var(name) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Ok(String::new()),
            Err(VarError::NotUnicode(_)) => Err(Error::EnvironmentLookup {
                scope: None,
                name: name.to_string(),
                reason: "value is not valid unicode".into(),
            }),
        }
    }
}

/// In-memory variables with case-insensitive names.
///
/// # Examples
///
/// ```
/// use pathtidy::path::expand::{EnvLookup, MapEnv};
///
/// let env = MapEnv::new().with("SystemRoot", r"C:\Windows");
/// assert_eq!(env.lookup("SYSTEMROOT").unwrap(), r"C:\Windows");
/// assert_eq!(env.lookup("UNSET").unwrap(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty set of variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Define or replace a variable.
    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_uppercase(), value.to_string());
    }
}

impl EnvLookup for MapEnv {
    fn lookup(&self, name: &str) -> Result<String> {
        Ok(self
            .vars
            .get(&name.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }
}

/// Recursive placeholder expander.
///
/// # Examples
///
/// ```
/// use pathtidy::path::expand::{Expander, MapEnv};
///
/// let env = MapEnv::new()
///     .with("FOO", "%BAR%")
///     .with("BAR", r"C:\X\");
/// let expander = Expander::new(&env);
///
/// assert_eq!(expander.expand(r"%FOO%\y").unwrap(), r"C:\X\\y");
/// assert!(expander.expand(r"%FOO\bar").is_err());
/// ```
pub struct Expander<'a, E: EnvLookup + ?Sized> {
    env: &'a E,
    max_depth: usize,
}

impl<'a, E: EnvLookup + ?Sized> Expander<'a, E> {
    /// Create an expander reading variables from `env`.
    pub fn new(env: &'a E) -> Self {
        Self {
            env,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand every placeholder reference in `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPlaceholder`] for an unterminated reference,
    /// [`Error::CyclicPlaceholder`] for self-referential or too deeply nested
    /// variables, and propagates lookup failures.
    pub fn expand(&self, path: &str) -> Result<String> {
        let mut chain = Vec::new();
        self.expand_with_chain(path, &mut chain)
    }

    fn expand_with_chain(&self, path: &str, chain: &mut Vec<String>) -> Result<String> {
        let mut expanded = String::with_capacity(path.len());
        let mut rest = path;

        while let Some(open) = rest.find(SENTINEL) {
            expanded.push_str(&rest[..open]);
            let after_open = &rest[open + SENTINEL.len_utf8()..];
            let Some(close) = after_open.find(SENTINEL) else {
                return Err(Error::MalformedPlaceholder {
                    path: path.to_string(),
                });
            };
            let name = &after_open[..close];
            expanded.push_str(&self.resolve(name, chain)?);
            rest = &after_open[close + SENTINEL.len_utf8()..];
        }
        expanded.push_str(rest);

        Ok(expanded)
    }

    fn resolve(&self, name: &str, chain: &mut Vec<String>) -> Result<String> {
        let cyclic = chain.iter().any(|seen| seen.eq_ignore_ascii_case(name));
        if cyclic || chain.len() >= self.max_depth {
            return Err(Error::CyclicPlaceholder {
                name: name.to_string(),
                chain: chain.clone(),
            });
        }

        let value = self.env.lookup(name)?;
        chain.push(name.to_string());
        let expanded = self.expand_with_chain(&value, chain);
        chain.pop();
        expanded
    }
}

/// Expand `path` with default settings.
///
/// # Errors
///
/// See [`Expander::expand`].
pub fn expand<E: EnvLookup + ?Sized>(path: &str, env: &E) -> Result<String> {
    Expander::new(env).expand(path)
}
