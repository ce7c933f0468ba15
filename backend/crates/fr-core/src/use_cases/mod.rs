//! Application operations. Each use case is stateless: build one per request
//! around a borrowed repository and call `execute` once.

pub mod add_comment;
pub mod create_feature_request;
pub mod get_feature_request;
pub mod list_feature_requests;
pub mod update_feature_request;
