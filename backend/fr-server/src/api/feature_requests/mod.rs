pub mod add_comment_request;
pub mod create_feature_request_request;
#[allow(clippy::module_inception)]
pub mod feature_requests;
pub mod update_feature_request_request;
