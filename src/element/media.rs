use serde_json::{Map, Value};

use super::{Element, MEDIA_PROPERTIES, common};
use crate::util::json;

impl Element {
    /// Id of the uploaded resource behind a media element.
    ///
    /// Older documents store numeric ids, so both forms are accepted.
    pub fn resource_id(&self) -> Option<String> {
        self.props
            .get("resource")
            .and_then(|resource| resource.get("id"))
            .and_then(json::id_string)
    }

    pub(crate) fn merge_resource(&mut self, properties: &Map<String, Value>) {
        if let Some(Value::Object(resource)) = self.props.get_mut("resource") {
            json::merge_properties(resource, properties, &["id"]);
        }
    }

    /// Absorbs `source` into this element: the result keeps this element's
    /// identity, place in the stack and decoration (mask, overlay, border)
    /// but shows the source's media.
    pub(crate) fn absorb(&self, source: &Element) -> Element {
        let mut merged = self.clone();
        merged.kind = source.kind.clone();
        for key in MEDIA_PROPERTIES {
            match source.props.get(*key) {
                Some(value) => {
                    merged.props.insert(key.to_string(), value.clone());
                }
                None => {
                    merged.props.remove(*key);
                }
            }
        }
        if self.is_default_background {
            // The placeholder has no meaningful geometry or fill.
            merged.is_default_background = false;
            merged.props.remove("backgroundColor");
            common::fill_page(&mut merged);
        }
        merged
    }
}
