//! Pages keep a `groups` map; every `groupId` an element uses must be in it.

use serde_json::{Map, Value, json};

use crate::migration::visit::{Object, pages_mut};

pub(crate) fn migrate(document: &mut Object) {
    for page in pages_mut(document) {
        let mut groups = match page.remove("groups") {
            Some(Value::Object(groups)) => groups,
            _ => Map::new(),
        };
        for (index, group) in groups.values_mut().enumerate() {
            name_group(group, index + 1);
        }

        if let Some(Value::Array(elements)) = page.get_mut("elements") {
            for element in elements.iter_mut().filter_map(Value::as_object_mut) {
                let group_id = match element.get("groupId") {
                    Some(Value::String(id)) if !id.is_empty() => id.clone(),
                    Some(_) => {
                        element.remove("groupId");
                        continue;
                    }
                    None => continue,
                };
                if !groups.contains_key(&group_id) {
                    let name = format!("Group {}", groups.len() + 1);
                    groups.insert(
                        group_id,
                        json!({ "name": name, "isLocked": false, "isCollapsed": false }),
                    );
                }
            }
        }

        page.insert("groups".to_string(), Value::Object(groups));
    }
}

/// Older editors saved groups as bare flags, or without a name
fn name_group(group: &mut Value, number: usize) {
    if !group.is_object() {
        *group = json!({});
    }
    if let Some(group) = group.as_object_mut() {
        let has_name = group
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| !name.is_empty());
        if !has_name {
            group.insert("name".to_string(), json!(format!("Group {number}")));
        }
    }
}
