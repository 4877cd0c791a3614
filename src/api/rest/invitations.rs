//! Invitation endpoints
//!
//! Invitations move from `pending` to exactly one of `accepted`, `expired`
//! or `revoked`; the store enforces the transition rules.

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
use crate::types::{is_empty, AuditLog, Invitation, JsonMap};
use crate::utils::{expires_in, generate_id};

#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    pub email: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub invited_by: String,
}

/// POST /invitations
pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<CreateInvitationRequest>,
) -> ApiResult<(StatusCode, Json<Invitation>)> {
    let mut invitation = Invitation::new(
        generate_id("invitation"),
        generate_id("invite"),
        body.email,
        expires_in(state.config.invitation_ttl),
    );
    invitation.team_id = body.team_id.filter(|id| !is_empty(id));
    invitation.role_id = body.role_id;
    invitation.invited_by = body.invited_by;

    let invitation = state.store.create_invitation(invitation)?;

    state.record_audit(
        &origin,
        AuditLog::success(
            &invitation.invited_by,
            "invitation.created",
            "invitation",
            &invitation.id,
        ),
    );

    Ok((StatusCode::CREATED, Json(invitation)))
}

/// GET /invitations/pending
pub async fn list_pending(State(state): State<Arc<AppState>>) -> Json<Vec<Invitation>> {
    Json(state.store.pending_invitations())
}

/// GET /invitations/:token
pub async fn get_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> ApiResult<Json<Invitation>> {
    Ok(Json(state.store.get_invitation(&token)?))
}

/// POST /invitations/:token/accept
pub async fn accept_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    origin: RequestOrigin,
) -> ApiResult<Json<MessageResponse>> {
    let invitation = state.store.accept_invitation(&token).map_err(|err| {
        tracing::warn!(token = %token, error = %err, "invitation accept refused");
        err
    })?;

    let mut details = JsonMap::new();
    details.insert("email".into(), json!(invitation.email));

    state.record_audit(
        &origin,
        AuditLog::success(
            &invitation.invited_by,
            "invitation.accepted",
            "invitation",
            &invitation.id,
        )
        .with_details(details),
    );

    Ok(Json(MessageResponse::new("Invitation accepted")))
}

/// POST /invitations/:token/revoke
pub async fn revoke_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    origin: RequestOrigin,
) -> ApiResult<Json<MessageResponse>> {
    let invitation = state.store.revoke_invitation(&token)?;

    state.record_audit(
        &origin,
        AuditLog::success(
            &invitation.invited_by,
            "invitation.revoked",
            "invitation",
            &invitation.id,
        ),
    );

    Ok(Json(MessageResponse::new("Invitation revoked")))
}
