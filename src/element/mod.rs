use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod common;
pub(crate) mod media;

pub use common::{MEDIA_PROPERTIES, PAGE_HEIGHT, PAGE_WIDTH};

use crate::error::EngineResult;
use crate::id_generator::generate_id;
use crate::page::GroupId;
use crate::util::json;

pub type ElementId = String;

/// The variant of a visual element.
///
/// Type names outside the known set are kept verbatim so that documents
/// written by newer editors survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Image,
    Video,
    Gif,
    Text,
    Shape,
    Sticker,
    Product,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::Gif => "gif",
            ElementKind::Text => "text",
            ElementKind::Shape => "shape",
            ElementKind::Sticker => "sticker",
            ElementKind::Product => "product",
            ElementKind::Other(name) => name,
        }
    }

    /// Elements backed by an uploaded media resource
    pub fn is_media(&self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video | ElementKind::Gif)
    }
}

impl From<String> for ElementKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "image" => ElementKind::Image,
            "video" => ElementKind::Video,
            "gif" => ElementKind::Gif,
            "text" => ElementKind::Text,
            "shape" => ElementKind::Shape,
            "sticker" => ElementKind::Sticker,
            "product" => ElementKind::Product,
            _ => ElementKind::Other(name),
        }
    }
}

impl Default for ElementKind {
    /// Elements saved without a type
    fn default() -> Self {
        ElementKind::Other("unknown".to_string())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

fn full_opacity() -> f64 {
    100.0
}

fn null_as_full_opacity<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(full_opacity))
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A positioned visual object owned by exactly one page.
///
/// Shared geometry is typed; everything specific to a variant (resource,
/// content, font, mask, overlay, ...) lives in `props` and is carried through
/// untouched unless an action names it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type", default, deserialize_with = "json::null_as_default")]
    pub kind: ElementKind,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub y: f64,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub height: f64,
    #[serde(default, deserialize_with = "json::null_as_default")]
    pub rotation_angle: f64,
    /// Percentage, 0 - 100
    #[serde(default = "full_opacity", deserialize_with = "null_as_full_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default, skip_serializing_if = "is_false", deserialize_with = "json::null_as_default")]
    pub is_background: bool,
    #[serde(default, skip_serializing_if = "is_false", deserialize_with = "json::null_as_default")]
    pub is_default_background: bool,
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Element {
    /// Keys an UPDATE_ELEMENTS patch may never change
    pub(crate) const PROTECTED: &'static [&'static str] =
        &["id", "isBackground", "isDefaultBackground"];

    pub fn new(kind: ElementKind) -> Self {
        Self::with_id(generate_id(), kind)
    }

    pub fn with_id(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation_angle: 0.0,
            opacity: full_opacity(),
            group_id: None,
            is_background: false,
            is_default_background: false,
            props: Map::new(),
        }
    }

    /// The white placeholder shape every page starts with
    pub fn default_background(id: impl Into<ElementId>) -> Self {
        let mut element = Self::with_id(id, ElementKind::Shape).with_geometry(1.0, 1.0, 1.0, 1.0);
        element.is_background = true;
        element.is_default_background = true;
        element
            .with_prop("mask", serde_json::json!({ "type": "rectangle" }))
            .with_prop("backgroundColor", serde_json::json!({ "color": { "r": 255, "g": 255, "b": 255 } }))
    }

    pub fn with_geometry(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Returns a copy with `properties` shallow-merged in. Identity and
    /// background flags are left alone.
    pub fn patched(&self, properties: &Map<String, Value>) -> EngineResult<Element> {
        json::patched(self, properties, Self::PROTECTED, &format!("element {}", self.id))
    }
}
