//! User account type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_empty;
use crate::utils::time::now;

/// A user account
///
/// The password is accepted on input but never written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub team_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create an active user with empty optional fields
    pub fn new(id: String, email: String, username: String) -> Self {
        let now = now();
        Self {
            id,
            email,
            username,
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role_id: String::new(),
            team_id: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
