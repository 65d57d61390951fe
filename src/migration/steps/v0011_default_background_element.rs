//! Every page got exactly one background element at the bottom of its
//! stack. Pages without one receive the white default background.

use serde_json::{Value, json};

use crate::migration::visit::{Object, pages_mut};

pub(crate) fn migrate(document: &mut Object) {
    for page in pages_mut(document) {
        let page_id = page
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("page")
            .to_string();
        let Some(Value::Array(elements)) = page.get_mut("elements") else {
            continue;
        };

        let is_background =
            |element: &Value| element.get("isBackground").and_then(Value::as_bool) == Some(true);
        match elements.iter().position(is_background) {
            Some(index) => {
                let background = elements.remove(index);
                for element in elements.iter_mut().filter(|element| is_background(element)) {
                    if let Some(element) = element.as_object_mut() {
                        element.remove("isBackground");
                    }
                }
                elements.insert(0, background);
            }
            None => {
                let id = unused_id(elements, &format!("{page_id}-background"));
                elements.insert(0, default_background(&id));
            }
        }
    }
}

fn default_background(id: &str) -> Value {
    json!({
        "id": id,
        "type": "shape",
        "x": 1,
        "y": 1,
        "width": 1,
        "height": 1,
        "rotationAngle": 0,
        "mask": { "type": "rectangle" },
        "backgroundColor": { "color": { "r": 255, "g": 255, "b": 255 } },
        "isBackground": true,
        "isDefaultBackground": true
    })
}

fn unused_id(elements: &[Value], base: &str) -> String {
    let taken = |id: &str| {
        elements
            .iter()
            .any(|element| element.get("id").and_then(Value::as_str) == Some(id))
    };
    let mut candidate = base.to_string();
    let mut suffix = 1;
    while taken(&candidate) {
        suffix += 1;
        candidate = format!("{base}-{suffix}");
    }
    candidate
}
