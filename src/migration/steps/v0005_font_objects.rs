//! Text elements: `fontFamily` and `fontFallback` are folded into a `font`
//! object.

use serde_json::{Value, json};

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        let family = element.remove("fontFamily");
        let fallbacks = element.remove("fontFallback");
        if element.get("font").is_some_and(Value::is_object) {
            return;
        }
        let Some(Value::String(family)) = family else {
            return;
        };
        let fallbacks: Vec<Value> = match fallbacks {
            Some(Value::Array(list)) => list.into_iter().filter(Value::is_string).collect(),
            Some(Value::String(single)) => vec![Value::String(single)],
            _ => Vec::new(),
        };
        element.insert(
            "font".to_string(),
            json!({ "family": family, "fallbacks": fallbacks }),
        );
    });
}
