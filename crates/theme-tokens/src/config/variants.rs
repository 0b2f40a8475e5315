//! The `variants` key of a theme configuration.

use serde::Serialize;

use crate::error::ConfigError;
use crate::token::{describe, scalar_text};

/// Which variants (hover, focus, ...) the configuration asks the external
/// tool to generate.
///
/// This crate never interprets variants; it only records what was declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Variants {
    /// No `variants` key: the external tool applies its own defaults.
    #[default]
    ToolDefault,
    /// An explicit list. Empty means no variant generation is requested.
    Only(Vec<String>),
}

impl Variants {
    /// Parses the `variants` node. `None` or `null` means the key is absent.
    pub(crate) fn parse(value: Option<&serde_yaml::Value>) -> Result<Self, ConfigError> {
        let seq = match value {
            None | Some(serde_yaml::Value::Null) => return Ok(Variants::ToolDefault),
            Some(serde_yaml::Value::Sequence(seq)) => seq,
            Some(other) => {
                return Err(ConfigError::shape(
                    "variants",
                    format!("expected a list, got {}", describe(other)),
                ))
            }
        };

        let names = seq
            .iter()
            .enumerate()
            .map(|(i, item)| {
                scalar_text(item).ok_or_else(|| {
                    ConfigError::shape(
                        format!("variants[{}]", i),
                        format!("expected a variant name, got {}", describe(item)),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Variants::Only(names))
    }

    /// True when an explicit empty list disables variant generation.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Variants::Only(v) if v.is_empty())
    }

    /// The declared variant names, or `None` when the tool decides.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Variants::ToolDefault => None,
            Variants::Only(v) => Some(v),
        }
    }
}
