//! Password reset endpoints
//!
//! No email is sent: the token is returned in the response body.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{JsonBody, RequestOrigin};
use crate::api::state::AppState;
use crate::types::{AuditLog, PasswordReset};
use crate::utils::{expires_in, generate_id};

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ResetRequestResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// POST /password-reset/request
///
/// Any email is accepted; the token is bound to a user only when the email
/// matches one.
pub async fn request_reset(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<ResetRequest>,
) -> ApiResult<Json<ResetRequestResponse>> {
    let user_id = state
        .store
        .find_user_by_email(&body.email)
        .map(|u| u.id)
        .unwrap_or_default();

    let reset = PasswordReset::new(
        generate_id("pwreset"),
        user_id,
        generate_id("reset"),
        expires_in(state.config.password_reset_ttl),
    );
    let reset = state.store.create_password_reset(reset)?;

    state.record_audit(
        &origin,
        AuditLog::success(&reset.user_id, "password.reset_requested", "user", &reset.user_id),
    );

    Ok(Json(ResetRequestResponse {
        message: "Password reset email sent".to_string(),
        token: reset.token,
    }))
}

/// POST /password-reset/reset
pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    JsonBody(body): JsonBody<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let reset = state
        .store
        .consume_password_reset(&body.token, &body.new_password)
        .map_err(|err| {
            if err.is_not_found() {
                ApiError::NotFound("Invalid reset token".to_string())
            } else {
                tracing::warn!(error = %err, "password reset refused");
                ApiError::from(err)
            }
        })?;

    state.record_audit(
        &origin,
        AuditLog::success(&reset.user_id, "password.reset", "user", &reset.user_id),
    );

    Ok(Json(MessageResponse::new("Password reset successful")))
}
