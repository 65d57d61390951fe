//! Element `rotation` / `rotate` became `rotationAngle`.

use serde_json::Value;

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        let legacy = [element.remove("rotation"), element.remove("rotate")];
        if element.contains_key("rotationAngle") {
            return;
        }
        if let Some(angle) = legacy.into_iter().flatten().find(Value::is_number) {
            element.insert("rotationAngle".to_string(), angle);
        }
    });
}
