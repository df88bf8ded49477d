//! Property-based tests for path expansion, normalization and deduplication.

use super::dedupe::dedupe;
use super::expand::{expand, MapEnv};
use super::normalize::normalize_for_display;
use crate::error::Error;
use crate::placeholder::PlaceholderRegistry;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _().-]{1,12}"
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(r"C:\Program Files\".to_string()),
            Just(r"C:\Program Files (x86)\".to_string()),
            Just(r"C:\Users\me\AppData\Roaming\".to_string()),
            Just(r"D:\".to_string()),
        ],
        prop::collection::vec(component_strategy(), 0..5),
    )
        .prop_map(|(root, parts)| format!("{root}{}", parts.join(r"\")))
}

fn registry() -> PlaceholderRegistry {
    let env = MapEnv::new().with("APPDATA", r"C:\Users\me\AppData\Roaming");
    PlaceholderRegistry::builder()
        .with_defaults()
        .with_variables(&["APPDATA"], &env)
        .unwrap()
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Strings without '%' expand to themselves
    #[test]
    fn expand_without_sentinels_is_identity(path in "[^%]{0,64}") {
        let env = MapEnv::new();
        prop_assert_eq!(expand(&path, &env).unwrap(), path);
    }

    // An odd number of sentinels always leaves one unterminated
    #[test]
    fn expand_odd_sentinels_is_malformed(parts in prop::collection::vec("[^%]{0,8}", 2..8)) {
        let take = if parts.len() % 2 == 0 { parts.len() } else { parts.len() - 1 };
        let path = parts[..take].join("%");
        let env = MapEnv::new();
        let is_malformed = matches!(expand(&path, &env), Err(Error::MalformedPlaceholder { .. }));
        prop_assert!(is_malformed);
    }

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent(path in windows_path_strategy()) {
        let registry = registry();
        let once = normalize_for_display(&registry, &path);
        let twice = normalize_for_display(&registry, once.as_str());
        prop_assert_eq!(once.as_str(), twice.as_str());
    }

    // Normalization keeps everything after the matched prefix
    #[test]
    fn normalize_preserves_suffix(path in windows_path_strategy()) {
        let registry = registry();
        let normalized = normalize_for_display(&registry, &path);
        if let Some(prefix) = normalized.replaced_prefix() {
            prop_assert!(normalized.as_str().ends_with(&path[prefix.len()..]));
        } else {
            prop_assert_eq!(normalized.as_str(), path.as_str());
        }
    }

    // Output is duplicate-free and keeps first occurrences in order
    #[test]
    fn dedupe_first_occurrence(entries in prop::collection::vec("[abc]{0,2}", 0..20)) {
        let deduped = dedupe(&entries);

        for (i, a) in deduped.iter().enumerate() {
            for b in &deduped[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }

        let mut expected: Vec<String> = Vec::new();
        for entry in &entries {
            if !expected.contains(entry) {
                expected.push(entry.clone());
            }
        }
        prop_assert_eq!(deduped, expected);
    }
}
