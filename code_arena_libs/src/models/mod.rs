pub mod problem;
pub mod submission;
pub mod user;

pub use problem::*;
pub use submission::*;
pub use user::*;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{DeserializeAs, SerializeAs};

/// Records that can be matched against each other by backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Identified for &T {
    fn id(&self) -> &str {
        (*self).id()
    }
}

/// Decode each element on its own, dropping the ones that don't fit `T`.
pub fn skip_invalid<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(
                    "skipped malformed {} record at index {}: {}",
                    std::any::type_name::<T>().rsplit("::").next().unwrap_or("backend"),
                    index,
                    e
                );
                None
            }
        })
        .collect()
}

/// List adapter for backend arrays. A malformed element is logged and left out instead of
/// failing the whole list.
pub struct SkipInvalid;

impl<T: Serialize> SerializeAs<Vec<T>> for SkipInvalid {
    fn serialize_as<S>(source: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        source.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> DeserializeAs<'de, Vec<T>> for SkipInvalid {
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(skip_invalid(values))
    }
}
