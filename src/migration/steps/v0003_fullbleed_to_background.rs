//! `isFullbleed` was renamed to `isBackground`.

use serde_json::Value;

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| {
        let Some(fullbleed) = element.remove("isFullbleed") else {
            return;
        };
        if fullbleed.as_bool() == Some(true) {
            element.entry("isBackground").or_insert(Value::Bool(true));
        }
    });
}
