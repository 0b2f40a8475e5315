//! Ordered collections of tokens grouped by category.
//!
//! A [`TokenSet`] is the in-memory form of one theme layer: the shipped base
//! theme, a user extension, or the effective merge of both. Categories and the
//! names within them keep their insertion order.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::TokenValue;

/// Tokens of a single category, keyed by name.
pub type CategoryTokens = IndexMap<String, TokenValue>;

/// A named collection of token categories.
///
/// # Example
///
/// ```rust
/// use theme_tokens::TokenSet;
///
/// let base = TokenSet::new()
///     .add("scale", "50", ".5")
///     .add("scale", "100", "1");
///
/// let user = TokenSet::new().add("scale", "100", "1.0");
///
/// let merged = base.merge(user);
/// assert_eq!(merged.get("scale", "100").unwrap().as_text(), Some("1.0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSet {
    categories: IndexMap<String, CategoryTokens>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning an updated set for chaining.
    ///
    /// Re-adding an existing name replaces its value but keeps its position.
    pub fn add<V: Into<TokenValue>>(mut self, category: &str, name: &str, value: V) -> Self {
        self.insert(category, name, value.into());
        self
    }

    /// Inserts a token, creating the category if needed.
    pub fn insert(&mut self, category: &str, name: &str, value: TokenValue) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Replaces a whole category, keeping its position if it already existed.
    pub fn set_category(&mut self, category: &str, tokens: CategoryTokens) {
        self.categories.insert(category.to_string(), tokens);
    }

    /// Returns all tokens of a category.
    pub fn category(&self, category: &str) -> Option<&CategoryTokens> {
        self.categories.get(category)
    }

    /// Returns a single token.
    pub fn get(&self, category: &str, name: &str) -> Option<&TokenValue> {
        self.categories.get(category)?.get(name)
    }

    /// Iterates category names in insertion order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Iterates categories with their tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryTokens)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if no categories are defined.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the total number of tokens across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    /// Merges another set into this one, entry by entry.
    ///
    /// Tokens from `other` replace same-named tokens in `self` whole; values
    /// are never merged below the entry level. Replaced names keep their
    /// position and new names are appended in `other`'s order.
    pub fn merge(mut self, other: TokenSet) -> Self {
        for (category, tokens) in other.categories {
            self.categories.entry(category).or_default().extend(tokens);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyframes;

    #[test]
    fn test_token_set_new_is_empty() {
        let set = TokenSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_token_set_add_and_get() {
        let set = TokenSet::new().add("scale", "30", "0.3");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("scale", "30").unwrap().as_text(), Some("0.3"));
        assert!(set.get("scale", "31").is_none());
        assert!(set.get("animation", "30").is_none());
    }

    #[test]
    fn test_token_set_readd_keeps_position() {
        let set = TokenSet::new()
            .add("scale", "0", "0")
            .add("scale", "50", ".5")
            .add("scale", "0", "zero");

        let names: Vec<_> = set.category("scale").unwrap().keys().collect();
        assert_eq!(names, vec!["0", "50"]);
        assert_eq!(set.get("scale", "0").unwrap().as_text(), Some("zero"));
    }

    #[test]
    fn test_token_set_merge() {
        let base = TokenSet::new()
            .add("animation", "spin", "spin 1s linear infinite")
            .add("animation", "ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite");

        let extension = TokenSet::new()
            .add("animation", "ping", "ping 2s linear 1")
            .add("animation", "wiggle", "wiggle 1s ease-in-out infinite")
            .add("scale", "30", "0.3");

        let merged = base.merge(extension);

        let names: Vec<_> = merged.category("animation").unwrap().keys().collect();
        assert_eq!(names, vec!["spin", "ping", "wiggle"]);
        assert_eq!(
            merged.get("animation", "ping").unwrap().as_text(),
            Some("ping 2s linear 1")
        );
        assert_eq!(merged.category_names().collect::<Vec<_>>(), vec!["animation", "scale"]);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_token_set_merge_replaces_keyframes_whole() {
        let base = TokenSet::new().add(
            "keyframes",
            "ping",
            Keyframes::new()
                .stage_with("0%", [("opacity", "1")])
                .stage_with("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
        );
        let extension = TokenSet::new().add(
            "keyframes",
            "ping",
            Keyframes::new().stage_with("75%, 100%", [("transform", "scale(1.1)")]),
        );

        let merged = base.merge(extension);
        let kf = merged.get("keyframes", "ping").unwrap().as_keyframes().unwrap();
        assert_eq!(kf.len(), 1);
        assert!(kf.stage("0%").is_none());
        assert!(kf.stage("75%, 100%").unwrap().get("opacity").is_none());
    }

    #[test]
    fn test_token_set_set_category_replaces() {
        let mut set = TokenSet::new()
            .add("scale", "0", "0")
            .add("animation", "none", "none");
        let mut tokens = CategoryTokens::new();
        tokens.insert("half".into(), ".5".into());
        set.set_category("scale", tokens);

        assert!(set.get("scale", "0").is_none());
        assert_eq!(set.get("scale", "half").unwrap().as_text(), Some(".5"));
        assert_eq!(set.category_names().collect::<Vec<_>>(), vec!["scale", "animation"]);
    }
}
