use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::animation::Animation;
use crate::element::{Element, ElementId};
use crate::error::EngineResult;
use crate::id_generator::generate_id;
use crate::paint::{Paint, default_background_color};
use crate::util::json;

pub type PageId = String;
pub type GroupId = String;

/// A named set of elements on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub name: String,
    #[serde(default, alias = "locked", deserialize_with = "json::null_as_default")]
    pub is_locked: bool,
    #[serde(default, alias = "collapsed", deserialize_with = "json::null_as_default")]
    pub is_collapsed: bool,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_locked: false,
            is_collapsed: false,
        }
    }
}

fn null_as_background_color<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Paint, D::Error> {
    Ok(Option::<Paint>::deserialize(deserializer)?.unwrap_or_else(default_background_color))
}

/// One page of a story: an ordered element stack (index 0 is the bottom)
/// plus page-level paint, groups and animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub elements: Vec<Element>,
    #[serde(default = "default_background_color", deserialize_with = "null_as_background_color")]
    pub background_color: Paint,
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "json::null_as_default"
    )]
    pub groups: BTreeMap<GroupId, Group>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "json::null_as_default"
    )]
    pub animations: Vec<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<Value>,
    /// The placeholder background, parked here while a real background is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_background_element: Option<Element>,
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Page {
    pub(crate) const PROTECTED: &'static [&'static str] =
        &["id", "elements", "defaultBackgroundElement"];

    /// A fresh page holding only the default background
    pub fn new() -> Self {
        Self::with_id(generate_id())
    }

    pub fn with_id(id: impl Into<PageId>) -> Self {
        let mut page = Self::empty(id);
        let background = page.fallback_background();
        page.elements.push(background);
        page
    }

    /// A page with no elements at all. Only valid while it is being built.
    pub fn empty(id: impl Into<PageId>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
            background_color: default_background_color(),
            groups: BTreeMap::new(),
            animations: Vec::new(),
            background_audio: None,
            default_background_element: None,
            props: Map::new(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|element| &element.id)
    }

    /// The background element, which is always at the bottom of the stack
    pub fn background(&self) -> Option<&Element> {
        self.elements.first().filter(|element| element.is_background)
    }

    pub fn is_background(&self, id: &str) -> bool {
        self.background().is_some_and(|background| background.id == id)
    }

    /// At most one background, and only at index 0
    pub fn has_valid_background(&self) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, element)| index == 0 || !element.is_background)
    }

    /// Restores the single-background invariant: the first flagged element
    /// moves to the bottom, any other flags are dropped, and an empty page
    /// gets its default background back.
    pub(crate) fn normalize_background(&mut self) {
        if let Some(index) = self.elements.iter().position(|element| element.is_background) {
            let background = self.elements.remove(index);
            for element in &mut self.elements {
                element.is_background = false;
                element.is_default_background = false;
            }
            self.elements.insert(0, background);
        } else {
            for element in &mut self.elements {
                element.is_default_background = false;
            }
            let background = self.take_default_background();
            self.elements.insert(0, background);
        }
    }

    /// Pulls the parked default background, or builds a new one with an id
    /// derived from the page id.
    pub(crate) fn take_default_background(&mut self) -> Element {
        let mut background = match self.default_background_element.take() {
            Some(mut background) => {
                background.is_background = true;
                background.is_default_background = true;
                background.group_id = None;
                background
            }
            None => return self.fallback_background(),
        };
        // The parked copy may share its id with the element that replaced it.
        if self.contains(&background.id) {
            background.id = self.unused_id(&format!("{}-background", self.id));
        }
        background
    }

    fn fallback_background(&self) -> Element {
        Element::default_background(self.unused_id(&format!("{}-background", self.id)))
    }

    fn unused_id(&self, base: &str) -> ElementId {
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while self.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        candidate
    }

    /// Drops `ids` from every animation, and animations this leaves with no target
    pub(crate) fn remove_animation_targets(&mut self, ids: &[ElementId]) {
        if ids.is_empty() {
            return;
        }
        self.animations.retain_mut(|animation| {
            let before = animation.targets.len();
            animation.targets.retain(|target| !ids.contains(target));
            before == animation.targets.len() || !animation.targets.is_empty()
        });
    }

    pub(crate) fn retarget_animations(&mut self, from: &str, to: &str) {
        for animation in &mut self.animations {
            animation.retarget(from, to);
        }
    }

    /// Removes those of `candidates` that no longer have any member
    pub(crate) fn remove_empty_groups(&mut self, candidates: &[GroupId]) {
        let elements = &self.elements;
        self.groups.retain(|group_id, _| {
            !candidates.contains(group_id)
                || elements
                    .iter()
                    .any(|element| element.group_id.as_ref() == Some(group_id))
        });
    }

    /// Ungroups elements whose `groupId` is not in `groups`
    pub(crate) fn clear_dangling_group_ids(&mut self) {
        let groups = &self.groups;
        for element in &mut self.elements {
            if element
                .group_id
                .as_ref()
                .is_some_and(|group_id| !groups.contains_key(group_id))
            {
                log::debug!("Ungrouping {} from removed group", element.id);
                element.group_id = None;
            }
        }
    }

    pub fn patched(&self, properties: &Map<String, Value>) -> EngineResult<Page> {
        json::patched(self, properties, Self::PROTECTED, &format!("page {}", self.id))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
