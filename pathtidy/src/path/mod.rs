//! Path expansion, normalization and filtering.
//!
//! This module holds the per-entry stages of `PATH` cleaning.
//!
//! # Key Concepts
//!
//! ## Expansion
//!
//! Raw entries may contain `%NAME%` references. [`expand`] substitutes them
//! recursively with variable values to produce the real filesystem path.
//!
//! ## Existence
//!
//! The expanded path is checked with a [`FileSystem`]. Entries that are gone
//! are dropped; any other filesystem error aborts the scan.
//!
//! ## Normalization
//!
//! For display, the *raw* entry is rewritten with the placeholder registry
//! so that `C:\Program Files\Git\cmd` is shown as `%PF64%\Git\cmd`.
//!
//! ## Deduplication
//!
//! Normalized entries are deduplicated with first-occurrence-wins order.
//!
//! # Examples
//!
//! ```
//! use pathtidy::path::{dedupe, expand, normalize_for_display, MapEnv};
//! use pathtidy::placeholder::PlaceholderRegistry;
//!
//! let env = MapEnv::new().with("ProgramFiles", r"C:\Program Files");
//! let registry = PlaceholderRegistry::builder().with_defaults().build();
//!
//! let raw = r"%ProgramFiles%\Git\cmd";
//! assert_eq!(expand(raw, &env).unwrap(), r"C:\Program Files\Git\cmd");
//!
//! let shown = normalize_for_display(&registry, r"C:\Program Files\Git\cmd");
//! assert_eq!(shown.as_str(), r"%PF64%\Git\cmd");
//!
//! assert_eq!(dedupe(["a", "a"]), vec!["a"]);
//! ```

pub mod dedupe;
pub mod exists;
pub mod expand;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use dedupe::{dedupe, Deduplicator};
pub use exists::{FileSystem, RealFileSystem};
pub use expand::{expand, EnvLookup, Expander, MapEnv, ProcessEnv};
pub use normalize::{normalize_for_display, Normalized};
