//! `square` and `circle` elements become masked `shape` elements.

use serde_json::{Value, json};

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        let mask = match element.get("type").and_then(Value::as_str) {
            Some("square") => "rectangle",
            Some("circle") => "circle",
            _ => return,
        };
        element.insert("type".to_string(), json!("shape"));
        element
            .entry("mask")
            .or_insert_with(|| json!({ "type": mask }));
    });
}
