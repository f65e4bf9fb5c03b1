//! Helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that "absent" and "explicit null" stay
/// distinguishable.
///
/// Use together with `#[serde(default)]`:
///
/// - field absent      -> `None`
/// - `"field": null`   -> `Some(None)`
/// - `"field": value`  -> `Some(Some(value))`
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
