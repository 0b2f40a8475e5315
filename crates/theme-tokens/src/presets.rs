//! Bundled theme configurations.
//!
//! Presets are plain configuration documents and go through the same parser as
//! user files, so they can be used as starting points or test fixtures.

use crate::config::ThemeConfig;
use crate::error::ConfigError;

/// A softer, finite variant of the stock `ping` animation.
///
/// Adds a `30` scale step, three `smallPing` animation shorthands and the
/// `smallPing` keyframes, and declares an empty variant list.
pub const SMALL_PING: &str = r#"
theme:
  extend:
    scale:
      "30": "0.3"

    animation:
      finiteSmPing: smallPing 1s cubic-bezier(0,0,.2,1) 2
      infiniteSmPing: smallPing 1s cubic-bezier(0,0,.2,1) infinite
      longCountSmPing: smallPing 1s cubic-bezier(0,0,.2,1) 2

    keyframes:
      smallPing:
        "75%, 100%":
          transform: scale(1.1)
          opacity: "0"

variants: []
"#;

/// Parses [`SMALL_PING`].
pub fn small_ping() -> Result<ThemeConfig, ConfigError> {
    Ok(ThemeConfig::from_yaml(SMALL_PING)?.with_name("small-ping"))
}
