use crate::api::deserialize::non_null_string;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFeatureRequestRequest {
    pub title: String,
    pub description: String,
    /// Defaults to MEDIUM when omitted; `null` is rejected
    #[serde(default, deserialize_with = "non_null_string")]
    pub priority: Option<String>,
}
