//! Links lost their `type` enum; the rest of the link stays as is.

use serde_json::Value;

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        if let Some(Value::Object(link)) = element.get_mut("link") {
            link.remove("type");
        }
    });
}
