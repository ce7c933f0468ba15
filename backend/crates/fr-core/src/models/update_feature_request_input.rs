use crate::{FeatureRequestPatch, Priority, Status};

/// Already-validated partial update. At least one field is set by the time
/// this reaches a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateFeatureRequestInput {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl From<UpdateFeatureRequestInput> for FeatureRequestPatch {
    fn from(input: UpdateFeatureRequestInput) -> Self {
        Self {
            status: input.status,
            priority: input.priority,
        }
    }
}
