//! First versioned format: every page is an object with a string id and an
//! `elements` array, and every element has a string id.

use serde_json::Value;

use crate::migration::visit::{Object, pages_mut};
use crate::util::json::id_string;

pub(crate) fn migrate(document: &mut Object) {
    if let Some(Value::Array(pages)) = document.get_mut("pages") {
        pages.retain(Value::is_object);
    }

    for (page_index, page) in pages_mut(document).enumerate() {
        let page_id = page
            .get("id")
            .and_then(id_string)
            .unwrap_or_else(|| format!("page-{}", page_index + 1));
        page.insert("id".to_string(), Value::String(page_id.clone()));

        let elements = match page.remove("elements") {
            Some(Value::Array(elements)) => elements,
            _ => Vec::new(),
        };
        let elements = elements
            .into_iter()
            .filter_map(|element| match element {
                Value::Object(element) => Some(element),
                _ => None,
            })
            .enumerate()
            .map(|(index, mut element)| {
                let id = element
                    .get("id")
                    .and_then(id_string)
                    .unwrap_or_else(|| format!("{page_id}-element-{}", index + 1));
                element.insert("id".to_string(), Value::String(id));
                Value::Object(element)
            })
            .collect();
        page.insert("elements".to_string(), Value::Array(elements));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_are_stringified_or_derived() {
        let mut doc = json!({
            "pages": [
                { "id": 7, "elements": [{ "id": 3 }, { "type": "text" }, "junk"] },
                { "elements": null },
                42
            ]
        });
        migrate(doc.as_object_mut().unwrap());
        assert_eq!(
            doc["pages"],
            json!([
                { "id": "7", "elements": [{ "id": "3" }, { "id": "7-element-2", "type": "text" }] },
                { "id": "page-2", "elements": [] }
            ])
        );
    }
}
