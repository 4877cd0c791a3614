//! REST API module for HTTP endpoints
//!
//! One submodule per entity kind. Handlers bind the payload, assign IDs and
//! defaults, run exactly one store operation, then append audit or activity
//! entries as a best-effort side effect.
//!
//! - `/users`, `/roles`, `/profiles`, `/teams`, `/preferences`
//! - `/sessions`, `/password-reset/*`, `/invitations`
//! - `/permissions`, `/users/:id/permissions`
//! - `/audit-logs`, `/activity-logs`

pub mod activity;
pub mod audit;
pub mod invitations;
pub mod password_reset;
pub mod permissions;
pub mod preferences;
pub mod profiles;
pub mod roles;
pub mod sessions;
pub mod teams;
pub mod users;

use serde::{Deserialize, Serialize};

/// Body of state-transition responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `?limit=N` on log listings
///
/// Kept as a raw string so a malformed value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}
