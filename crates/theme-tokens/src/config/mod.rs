//! Theme configuration documents.
//!
//! A configuration has the shape the host build tool reads:
//!
//! ```yaml
//! theme:
//!   # Replaces the base `spacing` category wholesale
//!   spacing:
//!     sm: 8px
//!   extend:
//!     # Merged over the base theme, entry by entry
//!     scale:
//!       "30": "0.3"
//!     animation:
//!       finiteSmPing: smallPing 1s cubic-bezier(0,0,.2,1) 2
//! variants: []
//! ```
//!
//! YAML and JSON are both accepted. Declaration order is preserved
//! throughout, since [`ThemeTokenRegistry::list_category`](crate::ThemeTokenRegistry::list_category)
//! reports entries in that order. Unknown top-level keys (`plugins`,
//! `purge`, ...) belong to the external tool and are ignored.
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 | `.json` | JSON |

mod variants;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::token::{describe, key_text, CategoryTokens, TokenSet, TokenValue};

pub use variants::Variants;

/// Recognised configuration file extensions in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        CONFIG_EXTENSIONS
            .iter()
            .find(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
            .map(|candidate| match *candidate {
                ".json" => ConfigFormat::Json,
                _ => ConfigFormat::Yaml,
            })
    }
}

/// A parsed theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Name, typically the file stem.
    name: Option<String>,
    /// Source file path, if loaded from disk.
    source_path: Option<PathBuf>,
    /// Categories declared directly under `theme`, replacing the base.
    replace: TokenSet,
    /// Categories declared under `theme.extend`, merged over the base.
    extension: TokenSet,
    variants: Variants,
}

impl ThemeConfig {
    /// Creates an empty configuration: no overrides, tool-default variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extension token, returning `self` for chaining.
    pub fn extend<V: Into<TokenValue>>(mut self, category: &str, name: &str, value: V) -> Self {
        self.extension.insert(category, name, value.into());
        self
    }

    /// Replaces a base category, returning `self` for chaining.
    pub fn replace_category(mut self, category: &str, tokens: CategoryTokens) -> Self {
        self.replace.set_category(category, tokens);
        self
    }

    /// Sets the variants declaration, returning `self` for chaining.
    pub fn with_variants(mut self, variants: Variants) -> Self {
        self.variants = variants;
        self
    }

    /// Sets the name on this configuration, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses a configuration from YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use theme_tokens::ThemeConfig;
    ///
    /// let config = ThemeConfig::from_yaml(r#"
    /// theme:
    ///   extend:
    ///     scale:
    ///       "30": "0.3"
    /// variants: []
    /// "#).unwrap();
    ///
    /// assert_eq!(config.extension().get("scale", "30").unwrap().as_text(), Some("0.3"));
    /// assert!(config.variants().is_disabled());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(&doc)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let doc: serde_yaml::Value = serde_json::from_str(json)?;
        Self::from_value(&doc)
    }

    /// Parses a configuration in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Yaml => Self::from_yaml(content),
            ConfigFormat::Json => Self::from_json(content),
        }
    }

    /// Loads a configuration file.
    ///
    /// The format is chosen by extension (see [`CONFIG_EXTENSIONS`]) and the
    /// name is derived from the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for an unknown extension,
    /// [`ConfigError::Load`] if the file cannot be read, and a parse or shape
    /// error if the content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        tracing::debug!(path = %path.display(), ?format, "loading theme config");

        let mut config =
            Self::parse(&content, format).map_err(|e| e.with_path(path.to_path_buf()))?;
        config.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn from_value(doc: &serde_yaml::Value) -> Result<Self, ConfigError> {
        let root = match doc {
            serde_yaml::Value::Null => return Ok(Self::new()),
            serde_yaml::Value::Mapping(map) => map,
            other => {
                return Err(ConfigError::shape(
                    "<root>",
                    format!("expected a mapping, got {}", describe(other)),
                ))
            }
        };

        let mut config = Self::new();

        match root.get("theme") {
            None | Some(serde_yaml::Value::Null) => {}
            Some(serde_yaml::Value::Mapping(theme)) => {
                for (key, value) in theme {
                    let key = key_text(key).ok_or_else(|| {
                        ConfigError::shape("theme", format!("invalid key {}", describe(key)))
                    })?;
                    if key == "extend" {
                        config.extension = parse_categories(value, "theme.extend")?;
                    } else {
                        let tokens = parse_category(value, &key, &format!("theme.{}", key))?;
                        config.replace.set_category(&key, tokens);
                    }
                }
            }
            Some(other) => {
                return Err(ConfigError::shape(
                    "theme",
                    format!("expected a mapping, got {}", describe(other)),
                ))
            }
        }

        config.variants = Variants::parse(root.get("variants"))?;

        Ok(config)
    }

    /// Returns the configuration name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Tokens declared under `theme.extend`.
    pub fn extension(&self) -> &TokenSet {
        &self.extension
    }

    /// Categories declared directly under `theme`.
    pub fn replacements(&self) -> &TokenSet {
        &self.replace
    }

    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    pub(crate) fn into_parts(self) -> (TokenSet, TokenSet, Variants) {
        (self.replace, self.extension, self.variants)
    }
}

fn parse_categories(value: &serde_yaml::Value, location: &str) -> Result<TokenSet, ConfigError> {
    let map = match value {
        serde_yaml::Value::Null => return Ok(TokenSet::new()),
        serde_yaml::Value::Mapping(map) => map,
        other => {
            return Err(ConfigError::shape(
                location,
                format!("expected a mapping of categories, got {}", describe(other)),
            ))
        }
    };

    let mut set = TokenSet::new();
    for (key, tokens) in map {
        let category = key_text(key).ok_or_else(|| {
            ConfigError::shape(location, format!("invalid category key {}", describe(key)))
        })?;
        let tokens = parse_category(tokens, &category, &format!("{}.{}", location, category))?;
        set.set_category(&category, tokens);
    }
    Ok(set)
}

fn parse_category(
    value: &serde_yaml::Value,
    category: &str,
    location: &str,
) -> Result<CategoryTokens, ConfigError> {
    let map = value.as_mapping().ok_or_else(|| {
        ConfigError::shape(
            location,
            format!("expected a mapping of tokens, got {}", describe(value)),
        )
    })?;

    let mut tokens = CategoryTokens::new();
    for (key, value) in map {
        let name = key_text(key).ok_or_else(|| {
            ConfigError::shape(location, format!("invalid token name {}", describe(key)))
        })?;
        let value = TokenValue::parse(value, category, &name)?;
        tokens.insert(name, value);
    }
    Ok(tokens)
}
