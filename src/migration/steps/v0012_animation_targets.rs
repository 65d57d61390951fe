//! Animations target a list of elements and carry their own id.

use serde_json::Value;

use crate::migration::visit::{Object, pages_mut};
use crate::util::json::id_string;

pub(crate) fn migrate(document: &mut Object) {
    for page in pages_mut(document) {
        let page_id = page
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("page")
            .to_string();
        let list = match page.get_mut("animations") {
            Some(Value::Array(list)) => list,
            Some(other) => {
                *other = Value::Array(Vec::new());
                continue;
            }
            None => continue,
        };

        list.retain(Value::is_object);
        for (index, animation) in list.iter_mut().filter_map(Value::as_object_mut).enumerate() {
            let id = animation
                .get("id")
                .and_then(id_string)
                .unwrap_or_else(|| format!("{page_id}-animation-{}", index + 1));
            animation.insert("id".to_string(), Value::String(id));

            let single = animation.remove("target");
            let targets: Vec<Value> = match animation.remove("targets") {
                Some(Value::Array(targets)) => {
                    targets.iter().filter_map(id_string).map(Value::String).collect()
                }
                Some(other) => id_string(&other).map(Value::String).into_iter().collect(),
                None => single
                    .as_ref()
                    .and_then(id_string)
                    .map(Value::String)
                    .into_iter()
                    .collect(),
            };
            animation.insert("targets".to_string(), Value::Array(targets));
        }
    }
}
