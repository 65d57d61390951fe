use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

pub(crate) fn pages_mut(document: &mut Object) -> impl Iterator<Item = &mut Object> {
    objects_mut(document.get_mut("pages"))
}

pub(crate) fn elements_mut(page: &mut Object) -> impl Iterator<Item = &mut Object> {
    objects_mut(page.get_mut("elements"))
}

/// Every element of every page, parked default backgrounds included
pub(crate) fn for_each_element(document: &mut Object, mut f: impl FnMut(&mut Object)) {
    for page in pages_mut(document) {
        for element in elements_mut(page) {
            f(element);
        }
        if let Some(Value::Object(parked)) = page.get_mut("defaultBackgroundElement") {
            f(parked);
        }
    }
}

fn objects_mut(value: Option<&mut Value>) -> impl Iterator<Item = &mut Object> {
    value
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

pub(crate) fn is_type(element: &Object, kind: &str) -> bool {
    element.get("type").and_then(Value::as_str) == Some(kind)
}
