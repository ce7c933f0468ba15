pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod storage;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    feature_requests::{
        add_comment_request::AddCommentRequest,
        create_feature_request_request::CreateFeatureRequestRequest,
        feature_requests::{
            add_comment, create_feature_request, get_feature_request, list_feature_requests,
            update_feature_request,
        },
        update_feature_request_request::UpdateFeatureRequestRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use storage::build_repository;
