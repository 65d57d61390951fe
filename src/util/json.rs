use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};

/// Shallow merge of `properties` into `target`.
///
/// A `null` value removes the key. Keys listed in `protected` are never touched.
pub(crate) fn merge_properties(
    target: &mut Map<String, Value>,
    properties: &Map<String, Value>,
    protected: &[&str],
) {
    for (key, value) in properties {
        if protected.contains(&key.as_str()) {
            continue;
        }
        if value.is_null() {
            target.remove(key);
        } else {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Applies a property patch to any serde model by round-tripping it through JSON.
pub(crate) fn patched<T>(
    value: &T,
    properties: &Map<String, Value>,
    protected: &[&str],
    target: &str,
) -> EngineResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(mut object) = serde_json::to_value(value)? else {
        return Err(EngineError::InvalidProperties {
            target: target.to_string(),
            source: serde::de::Error::custom("patch target is not an object"),
        });
    };
    merge_properties(&mut object, properties, protected);
    serde_json::from_value(Value::Object(object)).map_err(|source| EngineError::InvalidProperties {
        target: target.to_string(),
        source,
    })
}

/// Reads `null` as the field's default. Older documents store cleared
/// fields that way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an id that legacy data may have stored as a number.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
