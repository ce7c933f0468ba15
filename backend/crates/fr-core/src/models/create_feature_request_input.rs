use crate::Priority;

/// Already-validated input for creating a feature request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFeatureRequestInput {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}
