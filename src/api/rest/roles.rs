//! Role endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::error::ApiResult;
use crate::api::extract::{JsonBody, RequestOrigin};
use crate::api::state::AppState;
use crate::types::{AuditLog, Role};
use crate::utils::generate_id;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// POST /roles
pub async fn create_role(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<Role>)> {
    let role = Role::new(generate_id("role"), body.name, body.description, body.permissions);
    let role = state.store.create_role(role)?;

    // Roles carry no actor; the audit entry records the origin only
    state.record_audit(&origin, AuditLog::success("", "role.created", "role", &role.id));

    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /roles
pub async fn list_roles(State(state): State<Arc<AppState>>) -> Json<Vec<Role>> {
    Json(state.store.list_roles())
}

/// GET /roles/:id
pub async fn get_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Role>> {
    Ok(Json(state.store.get_role(&id)?))
}
