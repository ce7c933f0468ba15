//! Field deserializers for request bodies

use serde::{Deserialize, Deserializer};

/// An optional field that may be omitted but not sent as `null`.
/// Use with `#[serde(default)]` so a missing key still yields `None`.
pub fn non_null_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}
