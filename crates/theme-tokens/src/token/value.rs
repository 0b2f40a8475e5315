//! Token value types.
//!
//! A token value is one of three shapes, told apart by nesting depth:
//!
//! ```yaml
//! # Text - any scalar
//! scale:
//!   "30": "0.3"
//!
//! # Palette - a flat mapping of scalars
//! colors:
//!   brand:
//!     "100": "#fee2e2"
//!     "500": "#ef4444"
//!
//! # Keyframes - a mapping of stage selectors to declaration mappings
//! keyframes:
//!   smallPing:
//!     "75%, 100%":
//!       transform: scale(1.1)
//!       opacity: "0"
//! ```
//!
//! String values are stored verbatim; unquoted numbers are turned into canonical
//! text (see `scalar_text`). Nothing here checks that `"0.3"` is a number or
//! that an animation shorthand is valid CSS.

use indexmap::IndexMap;
use serde::Serialize;

use super::keyframes::{Declarations, Keyframes};
use super::KEYFRAMES;
use crate::error::ConfigError;

/// A flat, ordered mapping of shade or variant names to values.
pub type Palette = IndexMap<String, String>;

/// The value of a single design token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A scalar value such as a scale factor or an animation shorthand.
    Text(String),
    /// A flat mapping, as used by colour-like categories.
    Palette(Palette),
    /// Keyframe stages for an animation.
    Keyframes(Keyframes),
}

impl TokenValue {
    /// Returns the text if this is a [`TokenValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the palette if this is a [`TokenValue::Palette`].
    pub fn as_palette(&self) -> Option<&Palette> {
        match self {
            TokenValue::Palette(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the keyframes if this is a [`TokenValue::Keyframes`].
    pub fn as_keyframes(&self) -> Option<&Keyframes> {
        match self {
            TokenValue::Keyframes(k) => Some(k),
            _ => None,
        }
    }

    /// Parses a token value from a YAML node.
    ///
    /// - Scalar → [`TokenValue::Text`]
    /// - Mapping of scalars → [`TokenValue::Palette`]
    /// - Mapping of mappings → [`TokenValue::Keyframes`]
    ///
    /// In the `keyframes` category every mapping is read as keyframes, so an
    /// empty `{}` there is an empty keyframe set rather than an empty palette.
    pub fn parse(
        value: &serde_yaml::Value,
        category: &str,
        name: &str,
    ) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            category: category.to_string(),
            name: name.to_string(),
            message,
        };

        if let Some(text) = scalar_text(value) {
            return Ok(TokenValue::Text(text));
        }

        let map = value.as_mapping().ok_or_else(|| {
            invalid(format!(
                "expected a scalar or mapping, got {}",
                describe(value)
            ))
        })?;

        let nested = map.values().any(|v| v.is_mapping());
        if category == KEYFRAMES || nested {
            let mut keyframes = Keyframes::new();
            for (stage, decls) in map {
                let stage = key_text(stage)
                    .ok_or_else(|| invalid(format!("invalid stage key {}", describe(stage))))?;
                let decls = decls.as_mapping().ok_or_else(|| {
                    invalid(format!("stage '{}' must be a mapping of properties", stage))
                })?;
                let mut declarations = Declarations::new();
                for (prop, v) in decls {
                    let prop = key_text(prop).ok_or_else(|| {
                        invalid(format!("invalid property key {}", describe(prop)))
                    })?;
                    let v = scalar_text(v).ok_or_else(|| {
                        invalid(format!(
                            "property '{}' in stage '{}' must be a scalar",
                            prop, stage
                        ))
                    })?;
                    declarations.insert(prop, v);
                }
                keyframes.insert_stage(stage, declarations);
            }
            return Ok(TokenValue::Keyframes(keyframes));
        }

        let mut palette = Palette::new();
        for (k, v) in map {
            let key = key_text(k).ok_or_else(|| invalid(format!("invalid key {}", describe(k))))?;
            let v = scalar_text(v)
                .ok_or_else(|| invalid(format!("entry '{}' must be a scalar", key)))?;
            palette.insert(key, v);
        }
        Ok(TokenValue::Palette(palette))
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

impl From<Keyframes> for TokenValue {
    fn from(k: Keyframes) -> Self {
        TokenValue::Keyframes(k)
    }
}

impl From<Palette> for TokenValue {
    fn from(p: Palette) -> Self {
        TokenValue::Palette(p)
    }
}

/// Textual form of a YAML scalar.
///
/// Strings are kept verbatim. Numbers are printed in canonical form, the way
/// the host tool's JavaScript would print them: `.5` becomes `"0.5"`, `1.0`
/// becomes `"1"` and `1e3` becomes `"1000"`. Quote a value to keep a literal
/// spelling such as `".5"`.
pub(crate) fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(number_text(n)),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_text(n: &serde_yaml::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_nan() => "NaN".to_string(),
        Some(f) if f.is_infinite() && f > 0.0 => "Infinity".to_string(),
        Some(f) if f.is_infinite() => "-Infinity".to_string(),
        // Display drops the trailing `.0` and prints `-0` for negative zero.
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Textual form of a mapping key. Unquoted numeric keys (`30:`) are allowed.
pub(crate) fn key_text(key: &serde_yaml::Value) -> Option<String> {
    scalar_text(key)
}

pub(crate) fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
