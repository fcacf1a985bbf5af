use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Recursively fold every object key to ASCII lowercase
///
/// When two keys fold to the same name the later one wins, like a duplicate
/// key in plain JSON.
pub fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), fold_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Decode `bytes` into `T`, matching field names regardless of their casing
///
/// Target types must declare their field names in lowercase.
pub fn from_slice_case_insensitive<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;

    serde_json::from_value(fold_keys(value))
}

/// Field deserializer treating an explicit `null` like a missing value
///
/// Pair with `#[serde(default)]` so both cases end up as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
