use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::animation::{Animation, AnimationState};
use crate::element::{Element, ElementId};
use crate::error::{EngineError, EngineResult};
use crate::page::{GroupId, Page, PageId};
use crate::selection::Selection;
use crate::story::{Capabilities, StoryMeta};

fn update_selection_default() -> bool {
    true
}

/// Everything needed to replace the live story wholesale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePayload {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub current: Option<PageId>,
    #[serde(default)]
    pub story: StoryMeta,
    #[serde(default)]
    pub capabilities: Option<Capabilities>,
}

/// Every transition the story reducer understands.
///
/// On the wire an action is `{"type": "ADD_PAGE", "payload": {...}}`.
/// Element actions that take `elementIds: null` apply to the current
/// selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    #[serde(rename_all = "camelCase")]
    AddPage {
        page: Page,
        #[serde(default)]
        position: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    DeletePage {
        #[serde(default)]
        page_id: Option<PageId>,
    },

    #[serde(rename_all = "camelCase")]
    UpdatePage {
        #[serde(default)]
        page_id: Option<PageId>,
        properties: Map<String, Value>,
    },

    #[serde(rename_all = "camelCase")]
    ArrangePage { page_id: PageId, position: usize },

    #[serde(rename_all = "camelCase")]
    SetCurrentPage { page_id: PageId },

    #[serde(rename_all = "camelCase")]
    AddElements {
        elements: Vec<Element>,
        #[serde(default)]
        page_id: Option<PageId>,
        #[serde(default = "update_selection_default")]
        update_selection: bool,
    },

    #[serde(rename_all = "camelCase")]
    DeleteElements {
        #[serde(default)]
        element_ids: Option<Vec<ElementId>>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateElements {
        #[serde(default)]
        element_ids: Option<Vec<ElementId>>,
        properties: Map<String, Value>,
    },

    /// `properties` are merged into the `resource` of every element, on any
    /// page, whose resource has this id.
    #[serde(rename_all = "camelCase")]
    UpdateElementsByResourceId {
        id: String,
        properties: Map<String, Value>,
    },

    #[serde(rename_all = "camelCase")]
    CombineElements {
        first_element: Element,
        second_id: ElementId,
    },

    #[serde(rename_all = "camelCase")]
    SetBackgroundElement {
        #[serde(default)]
        element_id: Option<ElementId>,
    },

    #[serde(rename_all = "camelCase")]
    ArrangeElement {
        #[serde(default)]
        element_id: Option<ElementId>,
        position: usize,
        #[serde(default)]
        group_id: Option<GroupId>,
    },

    #[serde(rename_all = "camelCase")]
    SetSelectedElements { element_ids: Vec<ElementId> },

    #[serde(rename_all = "camelCase")]
    SelectElement { element_id: ElementId },

    #[serde(rename_all = "camelCase")]
    UnselectElement { element_id: ElementId },

    #[serde(rename_all = "camelCase")]
    ToggleElementInSelection { element_id: ElementId },

    #[serde(rename_all = "camelCase")]
    AddGroup {
        group_id: GroupId,
        name: String,
        #[serde(default)]
        is_locked: bool,
    },

    #[serde(rename_all = "camelCase")]
    UpdateGroup {
        group_id: GroupId,
        properties: Map<String, Value>,
    },

    #[serde(rename_all = "camelCase")]
    DeleteGroup { group_id: GroupId },

    UpdateStory { properties: Map<String, Value> },

    #[serde(rename_all = "camelCase")]
    UpdateAnimationState { animation_state: AnimationState },

    AddAnimations { animations: Vec<Animation> },

    Restore(RestorePayload),
}

impl Action {
    /// Wire names of every action kind, in declaration order
    pub const KINDS: &'static [&'static str] = &[
        "ADD_PAGE",
        "DELETE_PAGE",
        "UPDATE_PAGE",
        "ARRANGE_PAGE",
        "SET_CURRENT_PAGE",
        "ADD_ELEMENTS",
        "DELETE_ELEMENTS",
        "UPDATE_ELEMENTS",
        "UPDATE_ELEMENTS_BY_RESOURCE_ID",
        "COMBINE_ELEMENTS",
        "SET_BACKGROUND_ELEMENT",
        "ARRANGE_ELEMENT",
        "SET_SELECTED_ELEMENTS",
        "SELECT_ELEMENT",
        "UNSELECT_ELEMENT",
        "TOGGLE_ELEMENT_IN_SELECTION",
        "ADD_GROUP",
        "UPDATE_GROUP",
        "DELETE_GROUP",
        "UPDATE_STORY",
        "UPDATE_ANIMATION_STATE",
        "ADD_ANIMATIONS",
        "RESTORE",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddPage { .. } => "ADD_PAGE",
            Action::DeletePage { .. } => "DELETE_PAGE",
            Action::UpdatePage { .. } => "UPDATE_PAGE",
            Action::ArrangePage { .. } => "ARRANGE_PAGE",
            Action::SetCurrentPage { .. } => "SET_CURRENT_PAGE",
            Action::AddElements { .. } => "ADD_ELEMENTS",
            Action::DeleteElements { .. } => "DELETE_ELEMENTS",
            Action::UpdateElements { .. } => "UPDATE_ELEMENTS",
            Action::UpdateElementsByResourceId { .. } => "UPDATE_ELEMENTS_BY_RESOURCE_ID",
            Action::CombineElements { .. } => "COMBINE_ELEMENTS",
            Action::SetBackgroundElement { .. } => "SET_BACKGROUND_ELEMENT",
            Action::ArrangeElement { .. } => "ARRANGE_ELEMENT",
            Action::SetSelectedElements { .. } => "SET_SELECTED_ELEMENTS",
            Action::SelectElement { .. } => "SELECT_ELEMENT",
            Action::UnselectElement { .. } => "UNSELECT_ELEMENT",
            Action::ToggleElementInSelection { .. } => "TOGGLE_ELEMENT_IN_SELECTION",
            Action::AddGroup { .. } => "ADD_GROUP",
            Action::UpdateGroup { .. } => "UPDATE_GROUP",
            Action::DeleteGroup { .. } => "DELETE_GROUP",
            Action::UpdateStory { .. } => "UPDATE_STORY",
            Action::UpdateAnimationState { .. } => "UPDATE_ANIMATION_STATE",
            Action::AddAnimations { .. } => "ADD_ANIMATIONS",
            Action::Restore(_) => "RESTORE",
        }
    }

    /// Actions that bootstrap the engine rather than come from the UI
    pub fn is_internal(&self) -> bool {
        matches!(self, Action::Restore(_))
    }

    /// Decodes an action from its wire form.
    ///
    /// An unrecognized `type` is reported as [`EngineError::UnknownAction`]
    /// rather than as a generic decode failure.
    pub fn from_json(value: Value) -> EngineResult<Action> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => return Err(EngineError::UnknownAction(other.to_string())),
            None => return Err(EngineError::UnknownAction("<missing>".to_string())),
        };
        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(EngineError::UnknownAction(kind));
        }
        serde_json::from_value(value).map_err(|source| EngineError::MalformedAction { kind, source })
    }
}
