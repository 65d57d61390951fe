use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::element::ElementId;
use crate::util::json;

/// A page-level animation effect.
///
/// Targets are not enforced against the page's elements: an animation may be
/// pasted before its elements within the same gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "json::null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub targets: Vec<ElementId>,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub duration: f64,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub delay: f64,
    /// Effect-specific parameters
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl Animation {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, targets: Vec<ElementId>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            targets,
            duration: 0.0,
            delay: 0.0,
            params: Map::new(),
        }
    }

    pub fn is_targeting(&self, id: &str) -> bool {
        self.targets.iter().any(|target| target == id)
    }

    pub(crate) fn retarget(&mut self, from: &str, to: &str) {
        if !self.is_targeting(from) {
            return;
        }
        let already_targeted = self.is_targeting(to);
        self.targets.retain(|target| target != from || !already_targeted);
        for target in &mut self.targets {
            if target == from {
                *target = to.to_string();
            }
        }
    }
}

/// Playback state of the animation preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationState {
    #[default]
    Idle,
    Playing,
    PlayingSelected,
    Scrubbing,
    Paused,
    Reset,
}
