//! User endpoints

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
use crate::types::{AuditLog, User};
use crate::utils::generate_id;

/// Payload for creating or replacing a user
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: String,
    pub team_id: String,
    pub is_active: bool,
}

impl UserRequest {
    fn into_user(self, id: String) -> User {
        let mut user = User::new(id, self.email, self.username);
        user.password = self.password;
        user.first_name = self.first_name;
        user.last_name = self.last_name;
        user.role_id = self.role_id;
        user.team_id = self.team_id;
        user.is_active = self.is_active;
        user
    }
}

/// POST /users - Create an active user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<UserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let mut user = body.into_user(generate_id("user"));
    user.is_active = true;

    let user = state.store.create_user(user)?;
    state.record_audit(
        &origin,
        AuditLog::success(&user.id, "user.created", "user", &user.id),
    );

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.store.list_users())
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.store.get_user(&id)?))
}

/// PUT /users/:id - Replace a user; omitted fields are reset
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<UserRequest>,
) -> ApiResult<Json<User>> {
    let user = state.store.update_user(&id, body.into_user(id.clone()))?;
    state.record_audit(&origin, AuditLog::success(&id, "user.updated", "user", &id));

    Ok(Json(user))
}
