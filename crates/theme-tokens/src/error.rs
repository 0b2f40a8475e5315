//! Error types for token lookup and configuration loading.
//!
//! Lookups have exactly one failure mode, [`NotFoundError`]. Everything that
//! can go wrong while reading a configuration document is a [`ConfigError`],
//! which is only ever returned before a registry exists.

use std::fmt;
use std::path::PathBuf;

/// A category or token name that exists in neither the base theme nor the
/// extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// The category that was searched.
    pub category: String,
    /// The token name, or `None` when the whole category is missing.
    pub name: Option<String>,
}

impl NotFoundError {
    /// A missing token within a category.
    pub fn token(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: Some(name.into()),
        }
    }

    /// A missing category.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: None,
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "token '{}.{}' not found", self.category, name),
            None => write!(f, "token category '{}' not found", self.category),
        }
    }
}

impl std::error::Error for NotFoundError {}

/// Errors raised while parsing or loading a theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid YAML or JSON.
    #[error("failed to parse theme config{}: {message}", display_path(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// A structural node has the wrong shape.
    #[error("invalid theme config at '{location}': {message}")]
    InvalidShape {
        /// Dotted location of the offending node, e.g. `theme.extend`.
        location: String,
        /// Description of what was expected.
        message: String,
    },

    /// A token value cannot be represented.
    #[error("invalid value for token '{category}.{name}': {message}")]
    InvalidValue {
        /// Category holding the token.
        category: String,
        /// Token name.
        name: String,
        /// Description of what was wrong.
        message: String,
    },

    /// The file could not be read.
    #[error("failed to load theme config: {message}")]
    Load {
        /// Error message from the filesystem.
        message: String,
    },

    /// The file extension is not one of the recognised config formats.
    #[error("unsupported theme config format: {}", .path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl ConfigError {
    pub(crate) fn shape(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Attaches a source path to a parse error that lacks one.
    pub(crate) fn with_path(self, source: PathBuf) -> Self {
        match self {
            ConfigError::Parse { path: None, message } => ConfigError::Parse {
                path: Some(source),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for token lookups.
pub type Result<T> = std::result::Result<T, NotFoundError>;
