use crate::api::deserialize::non_null_string;

use serde::Deserialize;

/// At least one field must be present; checked by the validator, not serde.
/// Omitted fields are left alone, `null` fields are rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateFeatureRequestRequest {
    #[serde(default, deserialize_with = "non_null_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null_string")]
    pub priority: Option<String>,
}
