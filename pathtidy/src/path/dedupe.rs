//! Order-preserving deduplication.
//!
//! `PATH` is searched front to back, so the first occurrence of an entry is
//! the one that matters; later repeats are dropped.

/// Incremental first-occurrence-wins filter.
///
/// Lists are short (tens of entries), so a linear scan is used.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: Vec<String>,
}

impl Deduplicator {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entry`; returns `false` if it was already seen.
    pub fn insert(&mut self, entry: &str) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.seen.push(entry.to_string());
        true
    }

    /// Whether `entry` was already recorded.
    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        self.seen.iter().any(|seen| seen == entry)
    }

    /// Accepted entries in first-seen order.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.seen
    }
}

/// Remove repeated entries, keeping each first occurrence in place.
///
/// Comparison is exact string equality.
///
/// # Examples
///
/// ```
/// use pathtidy::path::dedupe::dedupe;
///
/// assert_eq!(dedupe(["a", "b", "a", "c", "b"]), vec!["a", "b", "c"]);
/// ```
pub fn dedupe<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filter = Deduplicator::new();
    for entry in entries {
        filter.insert(entry.as_ref());
    }
    filter.into_entries()
}
