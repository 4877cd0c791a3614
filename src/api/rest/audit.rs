//! Audit log endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use super::LimitParams;
use crate::api::extract::QueryParams;
use crate::api::state::AppState;
use crate::types::AuditLog;

/// GET /audit-logs?limit=N - Most recent entries, oldest of the window first
pub async fn list_audit_logs(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<LimitParams>,
) -> Json<Vec<AuditLog>> {
    let limit = state.config.resolve_limit(params.limit.as_deref());
    Json(state.store.audit_logs(limit))
}
