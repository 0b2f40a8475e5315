//! # Theme Tokens - Declarative Design-Token Themes
//!
//! `theme-tokens` holds the design tokens a utility-class style generator
//! reads (scale steps, animation shorthands, keyframes, ...) and answers
//! "what is the effective value of this token?" for a build.
//!
//! A build combines two layers:
//!
//! - **Base theme**: the tokens shipped by default ([`base::default_theme`])
//! - **Extension**: tokens from the user's configuration
//!   ([`ThemeConfig`]), which override or augment the base
//!
//! ## Core Concepts
//!
//! - [`ThemeTokenRegistry`]: immutable, merged view used for lookups
//! - [`ThemeConfig`]: parsed `{ theme: { extend: ... }, variants: [...] }` document
//! - [`TokenValue`]: text, palette, or [`Keyframes`]
//! - [`NotFoundError`]: the single lookup failure
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_tokens::{presets, ThemeTokenRegistry};
//!
//! let registry = ThemeTokenRegistry::with_defaults(presets::small_ping().unwrap());
//!
//! // Extension-only token
//! assert_eq!(
//!     registry.resolve("animation", "finiteSmPing").unwrap().as_text(),
//!     Some("smallPing 1s cubic-bezier(0,0,.2,1) 2"),
//! );
//!
//! // Base token, untouched by the extension
//! assert_eq!(
//!     registry.resolve("animation", "spin").unwrap().as_text(),
//!     Some("spin 1s linear infinite"),
//! );
//!
//! // Keyframes come back whole
//! let keyframes = registry.list_category("keyframes").unwrap();
//! assert!(keyframes.iter().any(|(name, _)| *name == "smallPing"));
//! ```
//!
//! ## Merge Semantics
//!
//! An extension entry replaces the base entry of the same name entirely; there
//! is no deep merge of keyframe stages or palette shades. Categories declared
//! directly under `theme` (outside `extend`) replace the base category as a
//! whole before the extension is applied.
//!
//! ## Logging
//!
//! Registry construction and config loading emit `tracing` events at `debug`
//! and `trace` level. Lookups are silent. No subscriber is installed.

pub mod base;
mod config;
mod error;
pub mod presets;
mod registry;
mod token;

pub use config::{ConfigFormat, ThemeConfig, Variants, CONFIG_EXTENSIONS};
pub use error::{ConfigError, NotFoundError, Result};
pub use registry::ThemeTokenRegistry;
pub use token::{
    CategoryTokens, Declarations, Keyframes, Palette, TokenSet, TokenValue, ANIMATION, KEYFRAMES,
    SCALE,
};
