//! The stock base theme.
//!
//! These are the host tool's shipped defaults for the categories its
//! animation and transform utilities read. Configurations extend or replace
//! them; see [`ThemeTokenRegistry::with_defaults`](crate::ThemeTokenRegistry::with_defaults).

use crate::token::{Keyframes, TokenSet, ANIMATION, KEYFRAMES, SCALE};

/// Builds the default base theme.
///
/// ```rust
/// let base = theme_tokens::base::default_theme();
/// assert_eq!(base.get("scale", "110").unwrap().as_text(), Some("1.1"));
/// assert!(base.get("keyframes", "spin").unwrap().as_keyframes().is_some());
/// ```
pub fn default_theme() -> TokenSet {
    TokenSet::new()
        // Scale
        .add(SCALE, "0", "0")
        .add(SCALE, "50", ".5")
        .add(SCALE, "75", ".75")
        .add(SCALE, "90", ".9")
        .add(SCALE, "95", ".95")
        .add(SCALE, "100", "1")
        .add(SCALE, "105", "1.05")
        .add(SCALE, "110", "1.1")
        .add(SCALE, "125", "1.25")
        .add(SCALE, "150", "1.5")
        // Animation
        .add(ANIMATION, "none", "none")
        .add(ANIMATION, "spin", "spin 1s linear infinite")
        .add(ANIMATION, "ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite")
        .add(ANIMATION, "pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite")
        .add(ANIMATION, "bounce", "bounce 1s infinite")
        // Keyframes
        .add(
            KEYFRAMES,
            "spin",
            Keyframes::new().stage_with("to", [("transform", "rotate(360deg)")]),
        )
        .add(
            KEYFRAMES,
            "ping",
            Keyframes::new()
                .stage_with("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
        )
        .add(
            KEYFRAMES,
            "pulse",
            Keyframes::new().stage_with("50%", [("opacity", ".5")]),
        )
        .add(
            KEYFRAMES,
            "bounce",
            Keyframes::new()
                .stage_with(
                    "0%, 100%",
                    [
                        ("transform", "translateY(-25%)"),
                        ("animationTimingFunction", "cubic-bezier(0.8,0,1,1)"),
                    ],
                )
                .stage_with(
                    "50%",
                    [
                        ("transform", "none"),
                        ("animationTimingFunction", "cubic-bezier(0,0,0.2,1)"),
                    ],
                ),
        )
}
