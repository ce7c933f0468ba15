//! Feature request REST API handlers
//!
//! Each handler validates its raw input, then hands the typed result to the
//! matching use case. Handlers never touch the repository directly.

use crate::{
    AddCommentRequest, ApiJson, ApiResult, AppState, CreateFeatureRequestRequest,
    UpdateFeatureRequestRequest,
};

use fr_core::validation::InputValidator;
use fr_core::{
    AddCommentUseCase, Comment, CreateFeatureRequestUseCase, FeatureRequest,
    FeatureRequestDetail, GetFeatureRequestUseCase, ListFeatureRequestsUseCase,
    UpdateFeatureRequestUseCase,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/feature-requests
pub async fn list_feature_requests(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FeatureRequest>>> {
    let feature_requests = ListFeatureRequestsUseCase::new(state.repository.as_ref())
        .execute()
        .await?;

    Ok(Json(feature_requests))
}

/// POST /api/feature-requests
pub async fn create_feature_request(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateFeatureRequestRequest>,
) -> ApiResult<(StatusCode, Json<FeatureRequest>)> {
    let input =
        InputValidator::validate_create(req.title, req.description, req.priority.as_deref())?;

    let created = CreateFeatureRequestUseCase::new(state.repository.as_ref())
        .execute(input)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/feature-requests/{id}
pub async fn get_feature_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FeatureRequestDetail>> {
    let id = InputValidator::validate_id(&id)?;

    let detail = GetFeatureRequestUseCase::new(state.repository.as_ref())
        .execute(id)
        .await?;

    Ok(Json(detail))
}

/// PATCH /api/feature-requests/{id}
pub async fn update_feature_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateFeatureRequestRequest>,
) -> ApiResult<Json<FeatureRequest>> {
    let id = InputValidator::validate_id(&id)?;
    let input = InputValidator::validate_update(req.status.as_deref(), req.priority.as_deref())?;

    let updated = UpdateFeatureRequestUseCase::new(state.repository.as_ref())
        .execute(id, input)
        .await?;

    Ok(Json(updated))
}

/// POST /api/feature-requests/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddCommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let id = InputValidator::validate_id(&id)?;
    let input = InputValidator::validate_comment(req.body)?;

    let comment = AddCommentUseCase::new(state.repository.as_ref())
        .execute(id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
