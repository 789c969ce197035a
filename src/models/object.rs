//! Object-only JSON decoding. Derived structs also accept a JSON array of
//! their fields in order; these helpers go through `serde_json::Map` first so
//! only objects are accepted.

use serde::{de::DeserializeOwned, de::Error as _, Deserialize, Deserializer};
use serde_json::{Map, Value};

pub fn from_object_slice<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let map: Map<String, Value> = serde_json::from_slice(bytes)?;
    serde_json::from_value(Value::Object(map))
}

pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Vec::<Map<String, Value>>::deserialize(deserializer)?
        .into_iter()
        .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
        .collect()
}

pub fn optional_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<Map<String, Value>>::deserialize(deserializer)?
        .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
        .transpose()
}
