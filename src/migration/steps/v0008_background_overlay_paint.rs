//! The page-level `backgroundOverlay` preset moved onto the background
//! element as an `overlay` paint.

use serde_json::{Value, json};

use crate::migration::visit::{Object, elements_mut, pages_mut};

fn overlay_paint(preset: &str) -> Option<Value> {
    let transparent = json!({ "r": 0, "g": 0, "b": 0, "a": 0 });
    let black = json!({ "r": 0, "g": 0, "b": 0, "a": 1 });
    let paint = match preset {
        "solid" => json!({ "color": { "r": 0, "g": 0, "b": 0, "a": 0.3 } }),
        "linear" => json!({
            "type": "linear",
            "stops": [
                { "color": transparent, "position": 0.4 },
                { "color": black, "position": 1 }
            ],
            "rotation": 0,
            "alpha": 0.9
        }),
        "radial" => json!({
            "type": "radial",
            "stops": [
                { "color": transparent, "position": 0.25 },
                { "color": black, "position": 1 }
            ],
            "alpha": 0.6,
            "size": { "w": 0.8, "h": 0.5 }
        }),
        _ => return None,
    };
    Some(paint)
}

pub(crate) fn migrate(document: &mut Object) {
    for page in pages_mut(document) {
        let Some(Value::String(preset)) = page.remove("backgroundOverlay") else {
            continue;
        };
        let Some(paint) = overlay_paint(&preset) else {
            continue;
        };
        let background = elements_mut(page)
            .find(|element| element.get("isBackground").and_then(Value::as_bool) == Some(true));
        if let Some(background) = background {
            background.insert("overlay".to_string(), paint);
        }
    }
}
