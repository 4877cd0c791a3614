//! Team and team member endpoints

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
use crate::types::{AuditLog, Team, TeamMember, TeamRole};
use crate::utils::generate_id;

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
    #[serde(default)]
    pub role: TeamRole,
}

/// POST /teams - Create a team with no members
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<CreateTeamRequest>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let team = Team::new(generate_id("team"), body.name, body.description, body.owner_id);
    let team = state.store.create_team(team)?;

    state.record_audit(
        &origin,
        AuditLog::success(&team.owner_id, "team.created", "team", &team.id),
    );

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> Json<Vec<Team>> {
    Json(state.store.list_teams())
}

/// GET /teams/:id
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Team>> {
    Ok(Json(state.store.get_team(&id)?))
}

/// POST /teams/:id/members
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<AddMemberRequest>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let member = TeamMember::new(generate_id("member"), team_id, body.user_id, body.role);
    let member = state.store.add_team_member(member)?;

    state.record_audit(
        &origin,
        AuditLog::success(&member.user_id, "team.member_added", "team", &member.team_id),
    );

    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /teams/:id/members
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> Json<Vec<TeamMember>> {
    Json(state.store.team_members(&team_id))
}
