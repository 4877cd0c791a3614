//! Audit trail and user activity records
//!
//! Both kinds are append-only: once in the store they are never changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::JsonMap;
use crate::utils::time::now;

/// Outcome recorded on an audit entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    #[default]
    Success,
    Failure,
}

/// System audit trail entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    /// Acting user
    pub user_id: String,
    /// Dot-namespaced action, e.g. `user.created`
    pub action: String,
    pub resource_id: String,
    pub resource_type: String,
    pub ip_address: String,
    pub user_agent: String,
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonMap>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Create a successful audit entry; ID and request origin are filled in
    /// when the entry is recorded
    pub fn success(
        user_id: impl Into<String>,
        action: &str,
        resource_type: &str,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            action: action.to_string(),
            resource_id: resource_id.into(),
            resource_type: resource_type.to_string(),
            ip_address: String::new(),
            user_agent: String::new(),
            status: AuditStatus::Success,
            details: None,
            created_at: now(),
        }
    }

    pub fn with_origin(mut self, ip_address: &str, user_agent: &str) -> Self {
        self.ip_address = ip_address.to_string();
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_details(mut self, details: JsonMap) -> Self {
        self.details = Some(details);
        self
    }
}

/// User activity tracking entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub user_id: String,
    /// login, logout, view, edit, create, delete
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    pub fn new(
        id: String,
        user_id: String,
        activity_type: &str,
        description: &str,
        ip_address: &str,
    ) -> Self {
        Self {
            id,
            user_id,
            activity_type: activity_type.to_string(),
            description: description.to_string(),
            metadata: None,
            ip_address: ip_address.to_string(),
            created_at: now(),
        }
    }
}
