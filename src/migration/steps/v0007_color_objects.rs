//! Hex color strings became paint objects: `"#ff0000"` turns into
//! `{"color": {"r": 255, "g": 0, "b": 0}}`. Values that don't parse are
//! dropped so the current defaults apply.

use serde_json::{Value, json};

use crate::migration::visit::{Object, for_each_element, pages_mut};
use crate::paint::Rgba;

const ELEMENT_COLOR_KEYS: &[&str] = &["color", "backgroundColor"];

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        for key in ELEMENT_COLOR_KEYS {
            convert(element, key);
        }
    });
    for page in pages_mut(document) {
        convert(page, "backgroundColor");
    }
}

fn convert(object: &mut Object, key: &str) {
    let Some(Value::String(hex)) = object.get(key) else {
        return;
    };
    match Rgba::from_hex(hex) {
        Some(color) => {
            let mut rgba = json!({ "r": color.r, "g": color.g, "b": color.b });
            if let Some(alpha) = color.a {
                rgba["a"] = json!(alpha);
            }
            object.insert(key.to_string(), json!({ "color": rgba }));
        }
        None => {
            log::warn!("Dropping unparsable {key} {hex:?}");
            object.remove(key);
        }
    }
}
