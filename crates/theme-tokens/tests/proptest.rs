//! Property-based tests for registry resolution using proptest.

use proptest::prelude::*;
use theme_tokens::{NotFoundError, ThemeConfig, ThemeTokenRegistry, TokenSet};

// ============================================================================
// Test helpers
// ============================================================================

const CATEGORIES: &[&str] = &["scale", "animation", "colors"];

fn entries_strategy() -> impl Strategy<Value = Vec<(usize, String, String)>> {
    prop::collection::vec((0..CATEGORIES.len(), "[a-z0-9]{1,4}", "[a-z0-9 .()]{0,12}"), 0..30)
}

fn build(
    base_entries: &[(usize, String, String)],
    ext_entries: &[(usize, String, String)],
) -> ThemeTokenRegistry {
    let mut base = TokenSet::new();
    for (c, name, value) in base_entries {
        base.insert(CATEGORIES[*c], name, value.as_str().into());
    }
    let mut config = ThemeConfig::new();
    for (c, name, value) in ext_entries {
        config = config.extend(CATEGORIES[*c], name, value.as_str());
    }
    ThemeTokenRegistry::new(base, config)
}

/// Last declaration of (category, name) in a list, mirroring map insertion.
fn last_value<'a>(entries: &'a [(usize, String, String)], c: usize, name: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|(ec, en, _)| *ec == c && en == name)
        .map(|(_, _, v)| v.as_str())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every declared token resolves to the extension value when present,
    /// otherwise to the base value.
    #[test]
    fn extension_wins_over_base(
        base in entries_strategy(),
        ext in entries_strategy(),
    ) {
        let registry = build(&base, &ext);

        for (c, name, _) in base.iter().chain(ext.iter()) {
            let expected = last_value(&ext, *c, name)
                .or_else(|| last_value(&base, *c, name))
                .unwrap();
            let resolved = registry.resolve(CATEGORIES[*c], name).unwrap();
            prop_assert_eq!(resolved.as_text(), Some(expected));
        }
    }

    /// Names declared on neither side are never found.
    #[test]
    fn undeclared_is_not_found(
        base in entries_strategy(),
        ext in entries_strategy(),
        c in 0..CATEGORIES.len(),
    ) {
        let registry = build(&base, &ext);
        // Generated names are at most 4 chars, so this one is never declared.
        let err = registry.resolve(CATEGORIES[c], "undeclared").unwrap_err();
        prop_assert_eq!(err, NotFoundError::token(CATEGORIES[c], "undeclared"));
    }

    /// Listing is stable and contains each name exactly once.
    #[test]
    fn list_category_is_idempotent_and_unique(
        base in entries_strategy(),
        ext in entries_strategy(),
    ) {
        let registry = build(&base, &ext);

        for category in registry.categories() {
            let first = registry.list_category(category).unwrap();
            let second = registry.list_category(category).unwrap();
            prop_assert_eq!(&first, &second);

            let mut names: Vec<_> = first.iter().map(|(n, _)| *n).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), total);

            for (name, value) in &first {
                prop_assert_eq!(registry.resolve(category, name).unwrap(), *value);
            }
        }
    }

    /// Base names keep their relative order; extension-only names come after.
    #[test]
    fn list_category_orders_base_first(
        base in entries_strategy(),
        ext in entries_strategy(),
    ) {
        let registry = build(&base, &ext);

        for category in registry.categories() {
            let listed: Vec<_> = registry
                .list_category(category)
                .unwrap()
                .into_iter()
                .map(|(n, _)| n)
                .collect();
            let base_names: Vec<_> = registry
                .base()
                .category(category)
                .map(|t| t.keys().map(String::as_str).collect())
                .unwrap_or_default();

            prop_assert_eq!(&listed[..base_names.len()], &base_names[..]);
        }
    }
}
