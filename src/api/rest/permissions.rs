//! Permission catalog and per-user grant endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::MessageResponse;
use crate::api::error::ApiResult;
use crate::api::extract::{JsonBody, RequestOrigin};
use crate::api::state::AppState;
use crate::types::{AuditLog, JsonMap, Permission, UserPermission};
use crate::utils::generate_id;

#[derive(Debug, Deserialize)]
pub struct GrantPermissionRequest {
    pub permission_id: String,
    #[serde(default)]
    pub granted_by: String,
}

/// GET /permissions
pub async fn list_permissions(State(state): State<Arc<AppState>>) -> Json<Vec<Permission>> {
    Json(state.store.list_permissions())
}

/// POST /users/:id/permissions
pub async fn grant_permission(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<GrantPermissionRequest>,
) -> ApiResult<(StatusCode, Json<UserPermission>)> {
    let grant = UserPermission::new(
        generate_id("userperm"),
        user_id,
        body.permission_id,
        body.granted_by,
    );
    let grant = state.store.grant_permission(grant)?;

    let mut details = JsonMap::new();
    details.insert("permission_id".into(), json!(grant.permission_id));
    details.insert("target_user".into(), json!(grant.user_id));

    state.record_audit(
        &origin,
        AuditLog::success(&grant.granted_by, "permission.granted", "user", &grant.user_id)
            .with_details(details),
    );

    Ok((StatusCode::CREATED, Json(grant)))
}

/// GET /users/:id/permissions
pub async fn list_user_permissions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<Vec<UserPermission>> {
    Json(state.store.user_permissions(&user_id))
}

/// DELETE /users/:id/permissions/:permission_id
pub async fn revoke_permission(
    State(state): State<Arc<AppState>>,
    Path((user_id, permission_id)): Path<(String, String)>,
    origin: RequestOrigin,
) -> ApiResult<Json<MessageResponse>> {
    let grant = state.store.revoke_permission(&user_id, &permission_id)?;

    let mut details = JsonMap::new();
    details.insert("permission_id".into(), json!(grant.permission_id));

    state.record_audit(
        &origin,
        AuditLog::success("", "permission.revoked", "user", &grant.user_id).with_details(details),
    );

    Ok(Json(MessageResponse::new("Permission revoked")))
}
