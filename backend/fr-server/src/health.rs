use crate::AppState;

use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": state.storage.as_str(),
    }))
}
