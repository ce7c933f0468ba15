pub mod add_comment_input;
pub mod comment;
pub mod create_feature_request_input;
pub mod feature_request;
pub mod feature_request_detail;
pub mod priority;
pub mod status;
pub mod timestamp;
pub mod update_feature_request_input;
