use crate::{
    AppState, add_comment, create_feature_request, get_feature_request, health,
    list_feature_requests, update_feature_request,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/feature-requests",
            get(list_feature_requests).post(create_feature_request),
        )
        .route(
            "/api/feature-requests/{id}",
            get(get_feature_request).patch(update_feature_request),
        )
        .route("/api/feature-requests/{id}/comments", post(add_comment))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
