//! Path list processing.
//!
//! The processor turns one raw `PATH` value into a cleaned list:
//!
//! 1. Split the value on `;`, keeping order and empty entries.
//! 2. Expand each entry and check that the expanded path exists. Missing
//!    entries are skipped; any other failure aborts the whole value.
//! 3. Normalize the surviving entry *as written* for display, then drop it if
//!    an identical display form was already accepted.
//!
//! Each scope is processed on its own. Duplicates across the user and machine
//! scopes are not detected.

use crate::error::{Error, Result};
use crate::path::dedupe::Deduplicator;
use crate::path::exists::FileSystem;
use crate::path::expand::{EnvLookup, Expander};
use crate::path::normalize::normalize_for_display;
use crate::placeholder::PlaceholderRegistry;
use crate::store::{EnvironmentStore, Scope};

/// Separator between `PATH` entries.
pub const LIST_SEPARATOR: char = ';';

/// Split a raw `PATH` value into entries.
///
/// Empty entries produced by adjacent separators are kept.
///
/// # Examples
///
/// ```
/// use pathtidy::processor::split_entries;
///
/// assert_eq!(split_entries(r"C:\a;;C:\b"), vec![r"C:\a", "", r"C:\b"]);
/// assert_eq!(split_entries(""), vec![""]);
/// ```
#[must_use]
pub fn split_entries(value: &str) -> Vec<String> {
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Read and split the `PATH` value of `scope`.
///
/// # Errors
///
/// Propagates store failures.
pub fn read_entries<S>(store: &S, scope: Scope) -> Result<Vec<String>>
where
    S: EnvironmentStore + ?Sized,
{
    let value = store.read_path(scope)?;
    Ok(split_entries(&value))
}

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The entry was kept under its display form.
    Accepted {
        /// The normalized form written to the cleaned list.
        display: String,
        /// The registry prefix replaced during normalization, if any.
        replaced_prefix: Option<String>,
    },
    /// The expanded path does not exist.
    Missing,
    /// An entry with the same display form was accepted earlier.
    Duplicate {
        /// The shared display form.
        display: String,
    },
}

/// The result of processing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    /// The entry as written in `PATH`.
    pub raw: String,
    /// The entry with all placeholders expanded.
    pub expanded: String,
    /// What happened to it.
    pub disposition: Disposition,
}

impl EntryOutcome {
    /// Whether the entry survived into the cleaned list.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self.disposition, Disposition::Accepted { .. })
    }
}

/// The result of processing one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeReport {
    /// The scope that was processed.
    pub scope: Scope,
    /// One outcome per raw entry, in input order.
    pub entries: Vec<EntryOutcome>,
    /// Accepted display forms, in input order.
    pub cleaned: Vec<String>,
}

impl ScopeReport {
    /// The cleaned list joined with `;`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.cleaned.join(LIST_SEPARATOR.to_string().as_str())
    }

    /// Entries whose expanded path no longer exists.
    pub fn missing(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries
            .iter()
            .filter(|entry| entry.disposition == Disposition::Missing)
    }

    /// Entries dropped as duplicates.
    pub fn duplicates(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.disposition, Disposition::Duplicate { .. }))
    }
}

/// Cleans `PATH` values.
///
/// # Examples
///
/// ```
/// use pathtidy::path::exists::FileSystem;
/// use pathtidy::path::expand::MapEnv;
/// use pathtidy::placeholder::PlaceholderRegistry;
/// use pathtidy::processor::PathListProcessor;
/// use pathtidy::store::Scope;
///
/// struct OnlyFoo;
///
/// impl FileSystem for OnlyFoo {
///     fn exists(&self, path: &str) -> pathtidy::Result<bool> {
///         Ok(path == r"C:\Program Files\Foo")
///     }
/// }
///
/// let env = MapEnv::new().with("PF64", r"C:\Program Files");
/// let registry = PlaceholderRegistry::builder().with_defaults().build();
/// let processor = PathListProcessor::new(&registry, &env, &OnlyFoo);
///
/// let raw = r"C:\Program Files\Foo;%PF64%\Foo;C:\Gone";
/// let report = processor.process_value(Scope::User, raw).unwrap();
/// assert_eq!(report.joined(), r"%PF64%\Foo");
/// assert_eq!(report.duplicates().count(), 1);
/// assert_eq!(report.missing().count(), 1);
/// ```
pub struct PathListProcessor<'a, E, F>
where
    E: EnvLookup + ?Sized,
    F: FileSystem + ?Sized,
{
    registry: &'a PlaceholderRegistry,
    expander: Expander<'a, E>,
    fs: &'a F,
}

impl<'a, E, F> PathListProcessor<'a, E, F>
where
    E: EnvLookup + ?Sized,
    F: FileSystem + ?Sized,
{
    /// Create a processor with the default expansion depth.
    pub fn new(registry: &'a PlaceholderRegistry, env: &'a E, fs: &'a F) -> Self {
        Self {
            registry,
            expander: Expander::new(env),
            fs,
        }
    }

    /// Set the maximum placeholder nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.expander = self.expander.with_max_depth(max_depth);
        self
    }

    /// Process the `PATH` value stored for `scope`.
    ///
    /// # Errors
    ///
    /// Returns the first store, expansion or filesystem error encountered.
    pub fn process_scope<S>(&self, store: &S, scope: Scope) -> Result<ScopeReport>
    where
        S: EnvironmentStore + ?Sized,
    {
        let entries = read_entries(store, scope)?;
        self.process_entries(scope, &entries)
    }

    /// Process a raw `PATH` value as if it had been read from `scope`.
    ///
    /// # Errors
    ///
    /// Returns the first expansion or filesystem error encountered.
    pub fn process_value(&self, scope: Scope, raw: &str) -> Result<ScopeReport> {
        self.process_entries(scope, &split_entries(raw))
    }

    /// Process already split entries.
    ///
    /// # Errors
    ///
    /// Returns the first expansion or filesystem error encountered.
    pub fn process_entries<S>(&self, scope: Scope, entries: &[S]) -> Result<ScopeReport>
    where
        S: AsRef<str>,
    {
        let mut seen = Deduplicator::new();
        let mut outcomes = Vec::with_capacity(entries.len());

        for raw in entries {
            let raw = raw.as_ref();
            log::debug!("{scope} entry {raw:?}");
            let (expanded, disposition) = self.classify(raw, &mut seen)?;
            outcomes.push(EntryOutcome {
                raw: raw.to_string(),
                expanded,
                disposition,
            });
        }

        Ok(ScopeReport {
            scope,
            entries: outcomes,
            cleaned: seen.into_entries(),
        })
    }

    /// Process each scope in turn, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first scope that fails.
    pub fn process_all<S>(&self, store: &S, scopes: &[Scope]) -> Result<Vec<ScopeReport>>
    where
        S: EnvironmentStore + ?Sized,
    {
        scopes
            .iter()
            .map(|scope| self.process_scope(store, *scope))
            .collect()
    }

    fn classify(&self, raw: &str, seen: &mut Deduplicator) -> Result<(String, Disposition)> {
        let expanded = self.expander.expand(raw)?;

        let exists = self.fs.exists(&expanded).map_err(|err| match err {
            Error::FilesystemQuery { source, .. } => Error::FilesystemQuery {
                path: raw.to_string(),
                true_path: expanded.clone(),
                source,
            },
            other => other,
        })?;
        if !exists {
            return Ok((expanded, Disposition::Missing));
        }

        let normalized = normalize_for_display(self.registry, raw);
        let disposition = if seen.insert(normalized.as_str()) {
            Disposition::Accepted {
                replaced_prefix: normalized.replaced_prefix().map(str::to_string),
                display: normalized.into_string(),
            }
        } else {
            Disposition::Duplicate {
                display: normalized.into_string(),
            }
        };

        Ok((expanded, disposition))
    }
}
