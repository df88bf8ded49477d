//! Display normalization.
//!
//! Normalization rewrites a path that starts with a registered prefix into
//! its placeholder form, e.g. `C:\Program Files\Git\cmd` becomes
//! `%PF64%\Git\cmd`. It only affects how a path is shown; existence checks
//! always use the expanded form.

use std::fmt;

use crate::placeholder::PlaceholderRegistry;

/// A path after display normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    display: String,
    replaced_prefix: Option<String>,
}

impl Normalized {
    /// The path as it should be displayed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The registry prefix that was substituted, if any.
    #[must_use]
    pub fn replaced_prefix(&self) -> Option<&str> {
        self.replaced_prefix.as_deref()
    }

    /// Whether a prefix was substituted.
    #[must_use]
    pub fn was_replaced(&self) -> bool {
        self.replaced_prefix.is_some()
    }

    /// Consume and return the display string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.display
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Rewrite `path` using the best matching registry prefix.
///
/// Paths matching no prefix are returned unchanged.
///
/// # Examples
///
/// ```
/// use pathtidy::path::normalize::normalize_for_display;
/// use pathtidy::placeholder::PlaceholderRegistry;
///
/// let registry = PlaceholderRegistry::builder().with_defaults().build();
///
/// let normalized = normalize_for_display(&registry, r"C:\Program Files\Foo\bin");
/// assert_eq!(normalized.as_str(), r"%PF64%\Foo\bin");
/// assert_eq!(normalized.replaced_prefix(), Some(r"C:\Program Files\"));
///
/// let untouched = normalize_for_display(&registry, r"D:\bin");
/// assert_eq!(untouched.as_str(), r"D:\bin");
/// assert!(!untouched.was_replaced());
/// ```
#[must_use]
pub fn normalize_for_display(registry: &PlaceholderRegistry, path: &str) -> Normalized {
    match registry.lookup_best_match(path) {
        Some((prefix, token)) => Normalized {
            display: format!("{token}{}", &path[prefix.len()..]),
            replaced_prefix: Some(prefix.to_string()),
        },
        None => Normalized {
            display: path.to_string(),
            replaced_prefix: None,
        },
    }
}
