pub mod error;
pub mod models;
pub mod repository;
pub mod use_cases;
pub mod validation;


pub use error::{CoreError, ErrorCode, FieldError, Result};
pub use models::add_comment_input::AddCommentInput;
pub use models::comment::Comment;
pub use models::create_feature_request_input::CreateFeatureRequestInput;
pub use models::feature_request::FeatureRequest;
pub use models::feature_request_detail::FeatureRequestDetail;
pub use models::priority::Priority;
pub use models::status::Status;
pub use models::timestamp::{advance_timestamp, current_timestamp};
pub use models::update_feature_request_input::UpdateFeatureRequestInput;
pub use repository::{FeatureRequestPatch, FeatureRequestRepository};
pub use use_cases::add_comment::AddCommentUseCase;
pub use use_cases::create_feature_request::CreateFeatureRequestUseCase;
pub use use_cases::get_feature_request::GetFeatureRequestUseCase;
pub use use_cases::list_feature_requests::ListFeatureRequestsUseCase;
pub use use_cases::update_feature_request::UpdateFeatureRequestUseCase;

pub use error_location::ErrorLocation;
