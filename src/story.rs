use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::animation::AnimationState;
use crate::element::{Element, ElementId};
use crate::error::EngineResult;
use crate::migration::CURRENT_VERSION;
use crate::page::{Page, PageId};
use crate::paint::Paint;
use crate::selection::Selection;
use crate::util::json;

/// What the current user may do with the story (publish, assign author, ...)
pub type Capabilities = BTreeMap<String, bool>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePresets {
    #[serde(default)]
    pub colors: Vec<Paint>,
    #[serde(default)]
    pub text_styles: Vec<Value>,
}

fn default_page_duration() -> f64 {
    7.0
}

fn null_as_page_duration<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_page_duration))
}

/// Story-level metadata: everything persisted next to `version` and `pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMeta {
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub global_story_styles: StylePresets,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub auto_advance: bool,
    /// Seconds per page when auto-advancing
    #[serde(default = "default_page_duration", deserialize_with = "null_as_page_duration")]
    pub default_page_duration: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for StoryMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            global_story_styles: StylePresets::default(),
            auto_advance: false,
            default_page_duration: default_page_duration(),
            extra: Map::new(),
        }
    }
}

impl StoryMeta {
    pub fn patched(&self, properties: &Map<String, Value>) -> EngineResult<StoryMeta> {
        json::patched(self, properties, &[], "story")
    }
}

/// The live document the reducer works on.
///
/// Invariants kept by every transition:
/// - `current` names a page in `pages` (the first one unless set otherwise)
/// - `selection` only holds ids of elements on the current page
/// - each page has at most one background element, at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub pages: Vec<Page>,
    pub current: Option<PageId>,
    pub selection: Selection,
    pub story: StoryMeta,
    #[serde(default)]
    pub animation_state: AnimationState,
    #[serde(default)]
    pub capabilities: Capabilities,
    pub version: u32,
}

impl Story {
    /// A story with a single blank page
    pub fn new() -> Self {
        Self::from_pages(vec![Page::new()])
    }

    pub fn from_pages(pages: Vec<Page>) -> Self {
        let current = pages.first().map(|page| page.id.clone());
        Self {
            pages,
            current,
            selection: Selection::new(),
            story: StoryMeta::default(),
            animation_state: AnimationState::default(),
            capabilities: Capabilities::new(),
            version: CURRENT_VERSION,
        }
    }

    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.id == id)
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub(crate) fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|page| page.id == id)
    }

    /// Id of the current page, falling back to the first page
    pub fn current_page_id(&self) -> Option<&PageId> {
        self.current
            .as_ref()
            .filter(|id| self.page_index(id).is_some())
            .or_else(|| self.pages.first().map(|page| &page.id))
    }

    pub fn current_page_index(&self) -> Option<usize> {
        self.current_page_id().and_then(|id| self.page_index(id))
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_page_index().map(|index| &self.pages[index])
    }

    pub(crate) fn current_page_mut(&mut self) -> Option<&mut Page> {
        let index = self.current_page_index()?;
        self.pages.get_mut(index)
    }

    pub fn selected_elements(&self) -> Vec<&Element> {
        let Some(page) = self.current_page() else {
            return Vec::new();
        };
        self.selection
            .iter()
            .filter_map(|id| page.element(id))
            .collect()
    }

    /// Explicit ids, or the current selection when none are given
    pub(crate) fn resolve_targets(&self, ids: Option<Vec<ElementId>>) -> Vec<ElementId> {
        ids.unwrap_or_else(|| self.selection.ids().to_vec())
    }

    /// Brings `current` and `selection` back in line with `pages`
    pub(crate) fn normalize(&mut self) {
        let current = self.current_page_id().cloned();
        if current != self.current {
            self.selection.clear();
        }
        self.current = current;
        self.prune_selection();
    }

    /// Keeps the selection on the current page, and keeps the background
    /// element out of multi-element selections.
    pub(crate) fn prune_selection(&mut self) {
        let Some(index) = self.current_page_index() else {
            self.selection.clear();
            return;
        };
        let page = &self.pages[index];
        self.selection.retain(|id| page.contains(id));
        if self.selection.len() > 1 {
            if let Some(background) = page.background() {
                let background_id = background.id.clone();
                self.selection.remove(&background_id);
            }
        }
    }
}

impl Default for Story {
    fn default() -> Self {
        Self::new()
    }
}
