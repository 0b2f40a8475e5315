//! The token registry: base theme plus extension, read-only after build.
//!
//! # Resolution
//!
//! A lookup checks the extension first, then the base theme:
//!
//! 1. `theme.extend.<category>.<name>` if declared
//! 2. the base theme's value (after any `theme.<category>` replacement)
//! 3. otherwise [`NotFoundError`]
//!
//! An extension value replaces the base value whole. Keyframes are never
//! merged stage by stage, palettes are never merged shade by shade.
//!
//! # Ordering
//!
//! [`list_category`](ThemeTokenRegistry::list_category) reports base names in
//! base order (with extension values substituted in place), followed by names
//! only the extension declares, in declaration order.

use serde::Serialize;

use crate::base::default_theme;
use crate::config::{ThemeConfig, Variants};
use crate::error::{NotFoundError, Result};
use crate::token::{TokenSet, TokenValue};

/// Effective design tokens for one build.
///
/// The registry is built once from a base theme and a configuration and is
/// never mutated afterwards, so it can be shared across threads freely.
///
/// # Example
///
/// ```rust
/// use theme_tokens::{ThemeConfig, ThemeTokenRegistry};
///
/// let config = ThemeConfig::from_yaml(r#"
/// theme:
///   extend:
///     scale:
///       "30": "0.3"
/// "#).unwrap();
///
/// let registry = ThemeTokenRegistry::with_defaults(config);
///
/// assert_eq!(registry.resolve("scale", "30").unwrap().as_text(), Some("0.3"));
/// assert_eq!(registry.resolve("scale", "50").unwrap().as_text(), Some(".5"));
/// assert!(registry.resolve("scale", "999").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ThemeTokenRegistry {
    base: TokenSet,
    extension: TokenSet,
    variants: Variants,
}

impl ThemeTokenRegistry {
    /// Builds a registry over an explicit base theme.
    ///
    /// Categories the configuration declares directly under `theme` replace
    /// the matching base categories before the extension is layered on.
    pub fn new(base: TokenSet, config: ThemeConfig) -> Self {
        let (replacements, extension, variants) = config.into_parts();

        let mut base = base;
        for (category, tokens) in replacements.iter() {
            tracing::debug!(category, tokens = tokens.len(), "replacing base category");
            base.set_category(category, tokens.clone());
        }

        let mut overridden = 0usize;
        let mut appended = 0usize;
        for (category, tokens) in extension.iter() {
            for name in tokens.keys() {
                if base.get(category, name).is_some() {
                    tracing::trace!(category, name = name.as_str(), "extension overrides base token");
                    overridden += 1;
                } else {
                    appended += 1;
                }
            }
        }

        tracing::debug!(
            base_tokens = base.len(),
            overridden,
            appended,
            ?variants,
            "built theme token registry"
        );

        Self {
            base,
            extension,
            variants,
        }
    }

    /// Builds a registry over the stock [`default_theme`].
    pub fn with_defaults(config: ThemeConfig) -> Self {
        Self::new(default_theme(), config)
    }

    /// Resolves a token to its effective value.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if neither the extension nor the base theme
    /// defines `name` in `category`.
    pub fn resolve(&self, category: &str, name: &str) -> Result<&TokenValue> {
        self.extension
            .get(category, name)
            .or_else(|| self.base.get(category, name))
            .ok_or_else(|| NotFoundError::token(category, name))
    }

    /// Returns true if `resolve` would succeed.
    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.resolve(category, name).is_ok()
    }

    /// Resolves a dotted path such as `"scale.30"`.
    ///
    /// Only the first `.` separates category from name, so names that contain
    /// dots (`"spacing.0.5"`) resolve as expected.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the token is missing, or when `path` has
    /// no `.` and therefore names no token.
    pub fn lookup(&self, path: &str) -> Result<&TokenValue> {
        match path.split_once('.') {
            Some((category, name)) => self.resolve(category, name),
            None => Err(NotFoundError::category(path)),
        }
    }

    /// Lists the effective tokens of a category.
    ///
    /// Base names come first in base order, carrying the extension's value
    /// where it overrides them; extension-only names follow in declaration
    /// order. Calling this repeatedly yields the same sequence.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if neither side declares the category.
    pub fn list_category(&self, category: &str) -> Result<Vec<(&str, &TokenValue)>> {
        let base = self.base.category(category);
        let extension = self.extension.category(category);
        if base.is_none() && extension.is_none() {
            return Err(NotFoundError::category(category));
        }

        let mut entries = Vec::new();
        if let Some(base) = base {
            for (name, value) in base {
                let value = extension.and_then(|ext| ext.get(name)).unwrap_or(value);
                entries.push((name.as_str(), value));
            }
        }
        if let Some(extension) = extension {
            for (name, value) in extension {
                if base.is_some_and(|b| b.contains_key(name)) {
                    continue;
                }
                entries.push((name.as_str(), value));
            }
        }
        Ok(entries)
    }

    /// Category names: base order, then extension-only categories.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.base.category_names().collect();
        for name in self.extension.category_names() {
            if self.base.category(name).is_none() {
                names.push(name);
            }
        }
        names
    }

    /// The declared variants, passed through untouched.
    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    /// The base theme after category replacements.
    pub fn base(&self) -> &TokenSet {
        &self.base
    }

    /// The extension tokens as declared.
    pub fn extension(&self) -> &TokenSet {
        &self.extension
    }

    /// Materialises the effective theme, in [`list_category`](Self::list_category) order.
    pub fn effective(&self) -> TokenSet {
        self.base.clone().merge(self.extension.clone())
    }

    /// Serializes the effective theme and variants as pretty JSON.
    ///
    /// This is the hand-over document for the external style generator:
    /// `{ "theme": { <category>: { <name>: <value> } }, "variants": [...] }`.
    ///
    /// The export is one-way. Read back as a [`ThemeConfig`], `theme.extend`
    /// is the extension block rather than a category named `extend`, and an
    /// empty keyframe set outside the `keyframes` category reads as an empty
    /// palette.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ThemeTokenRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Export<'a> {
            theme: TokenSet,
            variants: &'a Variants,
        }

        Export {
            theme: self.effective(),
            variants: &self.variants,
        }
        .serialize(serializer)
    }
}
