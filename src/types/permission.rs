//! Permission catalog and per-user grants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// An individual resource/action permission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub name: String,
    pub resource: String,
    /// create, read, update, delete, manage
    pub action: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Permission {
    pub fn new(id: &str, name: &str, resource: &str, action: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            resource: resource.to_string(),
            action: action.to_string(),
            description: description.to_string(),
            created_at: now(),
        }
    }
}

/// A permission granted directly to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPermission {
    pub id: String,
    pub user_id: String,
    pub permission_id: String,
    pub granted_by: String,
    pub granted_at: DateTime<Utc>,
}

impl UserPermission {
    pub fn new(id: String, user_id: String, permission_id: String, granted_by: String) -> Self {
        Self {
            id,
            user_id,
            permission_id,
            granted_by,
            granted_at: now(),
        }
    }
}
