//! A single numeric `padding` became per-axis padding.

use serde_json::{Value, json};

use crate::migration::visit::{Object, for_each_element};

pub(crate) fn migrate(document: &mut Object) {
    for_each_element(document, |element| match element.get("padding") {
        Some(Value::Number(amount)) => {
            let amount = amount.clone();
            element.insert(
                "padding".to_string(),
                json!({ "horizontal": amount, "vertical": amount, "locked": true }),
            );
        }
        Some(Value::Object(_)) | None => {}
        Some(_) => {
            element.remove("padding");
        }
    });
}
