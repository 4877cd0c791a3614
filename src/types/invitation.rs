//! Invitation type and its status state machine

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// Invitation lifecycle state
///
/// `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Expired,
    Revoked,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Expired => "expired",
            InvitationStatus::Revoked => "revoked",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvitationStatus::Pending)
    }

    /// Transitions only leave `Pending`, and never towards `Pending`
    pub fn can_transition_to(&self, next: InvitationStatus) -> bool {
        !self.is_terminal() && next.is_terminal()
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invitation to join the system, optionally targeting a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub invited_by: String,
    pub token: String,
    pub status: InvitationStatus,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(id: String, token: String, email: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            team_id: None,
            role_id: String::new(),
            invited_by: String::new(),
            token,
            status: InvitationStatus::Pending,
            expires_at,
            accepted_at: None,
            created_at: now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        now() > self.expires_at
    }
}
