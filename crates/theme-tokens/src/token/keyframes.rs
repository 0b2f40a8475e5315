//! Keyframe stage definitions.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered style declarations for one keyframe stage (`opacity: "0"`).
pub type Declarations = IndexMap<String, String>;

/// Keyframe stages of an animation, in declaration order.
///
/// Stage keys are kept as written (`"0%"`, `"75%, 100%"`, `"from"`); they are
/// not split or normalised.
///
/// ```rust
/// use theme_tokens::Keyframes;
///
/// let ping = Keyframes::new()
///     .stage_with("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]);
///
/// assert_eq!(ping.stage("75%, 100%").unwrap()["opacity"], "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyframes {
    stages: IndexMap<String, Declarations>,
}

impl Keyframes {
    /// Creates an empty keyframe set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stage, returning `self` for chaining.
    pub fn stage_with<I, K, V>(mut self, selector: &str, declarations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let decls = declarations
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.insert_stage(selector, decls);
        self
    }

    /// Inserts a stage. A repeated selector replaces the earlier stage in place.
    pub fn insert_stage(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.stages.insert(selector.into(), declarations);
    }

    /// Returns the declarations for a stage selector.
    pub fn stage(&self, selector: &str) -> Option<&Declarations> {
        self.stages.get(selector)
    }

    /// Iterates stages in declaration order.
    pub fn stages(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.stages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_preserve_stage_order() {
        let kf = Keyframes::new()
            .stage_with("0%, 100%", [("transform", "translateY(-25%)")])
            .stage_with("50%", [("transform", "none")]);

        let order: Vec<_> = kf.stages().map(|(s, _)| s).collect();
        assert_eq!(order, vec!["0%, 100%", "50%"]);
    }

    #[test]
    fn test_keyframes_repeated_stage_replaces() {
        let kf = Keyframes::new()
            .stage_with("to", [("opacity", "1")])
            .stage_with("to", [("opacity", "0")]);

        assert_eq!(kf.len(), 1);
        assert_eq!(kf.stage("to").unwrap()["opacity"], "0");
    }

    #[test]
    fn test_keyframes_serialize_as_plain_mapping() {
        let kf = Keyframes::new().stage_with("to", [("transform", "rotate(360deg)")]);
        let json = serde_json::to_string(&kf).unwrap();
        assert_eq!(json, r#"{"to":{"transform":"rotate(360deg)"}}"#);
    }
}
