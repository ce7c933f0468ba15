use crate::{Comment, FeatureRequest};

use serde::Serialize;

/// A feature request together with its comments, oldest comment first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequestDetail {
    pub feature_request: FeatureRequest,
    pub comments: Vec<Comment>,
}
