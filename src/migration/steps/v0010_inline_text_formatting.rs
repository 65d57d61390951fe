//! Element-wide text formatting moved into the text content as inline
//! `<span style="...">` markup.

use serde_json::Value;

use crate::migration::visit::{Object, for_each_element, is_type};
use crate::paint::Rgba;

const FORMATTING_KEYS: &[&str] = &[
    "bold",
    "fontWeight",
    "fontStyle",
    "textDecoration",
    "color",
    "letterSpacing",
];

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        if !is_type(element, "text") {
            return;
        }
        let styles = inline_styles(element);
        for key in FORMATTING_KEYS {
            element.remove(*key);
        }
        if styles.is_empty() {
            return;
        }
        let content = element
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let wrapped = format!("<span style=\"{}\">{content}</span>", styles.join("; "));
        element.insert("content".to_string(), Value::String(wrapped));
    });
}

fn inline_styles(element: &Object) -> Vec<String> {
    let mut styles = Vec::new();

    let weight = match element.get("fontWeight").and_then(Value::as_f64) {
        Some(weight) => Some(weight),
        None if element.get("bold").and_then(Value::as_bool) == Some(true) => Some(700.0),
        None => None,
    };
    if let Some(weight) = weight.filter(|weight| *weight != 400.0) {
        styles.push(format!("font-weight: {weight}"));
    }
    if element.get("fontStyle").and_then(Value::as_str) == Some("italic") {
        styles.push("font-style: italic".to_string());
    }
    if element.get("textDecoration").and_then(Value::as_str) == Some("underline") {
        styles.push("text-decoration: underline".to_string());
    }
    let color = element
        .get("color")
        .and_then(|paint| paint.get("color"))
        .and_then(|color| serde_json::from_value::<Rgba>(color.clone()).ok());
    if let Some(color) = color {
        styles.push(format!("color: {}", color.to_css()));
    }
    if let Some(spacing) = element.get("letterSpacing").and_then(Value::as_f64) {
        if spacing != 0.0 {
            styles.push(format!("letter-spacing: {}em", spacing / 100.0));
        }
    }
    styles
}
