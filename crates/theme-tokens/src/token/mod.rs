//! Design tokens: values, keyframes, and ordered token sets.
//!
//! Categories are open: any string names a category. The constants below are
//! the categories the host tool's animation utilities read.

mod keyframes;
mod set;
mod value;

pub use keyframes::{Declarations, Keyframes};
pub use set::{CategoryTokens, TokenSet};
pub use value::{Palette, TokenValue};

pub(crate) use value::{describe, key_text, scalar_text};

/// Transform scale factors (`scale-30` → `0.3`).
pub const SCALE: &str = "scale";
/// Animation shorthands (`animate-spin`).
pub const ANIMATION: &str = "animation";
/// Keyframe definitions referenced by animation shorthands.
pub const KEYFRAMES: &str = "keyframes";
