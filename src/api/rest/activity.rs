//! Activity log endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::LimitParams;
use crate::api::error::ApiResult;
use crate::api::extract::{JsonBody, QueryParams, RequestOrigin};
use crate::api::state::AppState;
use crate::types::{ActivityLog, JsonMap};
use crate::utils::generate_id;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub user_id: String,
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: Option<JsonMap>,
}

/// POST /activity-logs
pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<CreateActivityRequest>,
) -> ApiResult<(StatusCode, Json<ActivityLog>)> {
    let mut log = ActivityLog::new(
        generate_id("activity"),
        body.user_id,
        &body.activity_type,
        &body.description,
        &origin.ip,
    );
    log.metadata = body.metadata;

    Ok((StatusCode::CREATED, Json(state.record_activity(log))))
}

/// GET /activity-logs/user/:user_id?limit=N - Newest first
pub async fn list_user_activity(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    QueryParams(params): QueryParams<LimitParams>,
) -> Json<Vec<ActivityLog>> {
    let limit = state.config.resolve_limit(params.limit.as_deref());
    Json(state.store.user_activity(&user_id, limit))
}
