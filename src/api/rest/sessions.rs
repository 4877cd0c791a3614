//! Session endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::error::ApiResult;
use crate::api::extract::{JsonBody, RequestOrigin};
use crate::api::state::AppState;
use crate::types::{ActivityLog, Session};
use crate::utils::{expires_in, generate_id};

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
}

/// POST /sessions - Open a session and log a `login` activity
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<CreateSessionRequest>,
) -> ApiResult<(StatusCode, Json<Session>)> {
    let session = Session::new(
        generate_id("sess"),
        body.user_id,
        generate_id("session"),
        origin.ip.clone(),
        origin.user_agent.clone(),
        expires_in(state.config.session_ttl),
    );
    let session = state.store.create_session(session)?;

    state.record_activity(ActivityLog::new(
        generate_id("activity"),
        session.user_id.clone(),
        "login",
        "User logged in",
        &origin.ip,
    ));

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /sessions/user/:user_id
pub async fn list_user_sessions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<Vec<Session>> {
    Json(state.store.user_sessions(&user_id))
}

/// DELETE /sessions/:token - Close a session and log a `logout` activity
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    origin: RequestOrigin,
) -> ApiResult<Json<MessageResponse>> {
    let session = state.store.delete_session(&token)?;

    state.record_activity(ActivityLog::new(
        generate_id("activity"),
        session.user_id,
        "logout",
        "User logged out",
        &origin.ip,
    ));

    Ok(Json(MessageResponse::new("Session deleted")))
}
