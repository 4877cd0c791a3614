//! Team and team membership types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// A group of users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner_id: String,
    /// Number of members added since creation, maintained by the store
    pub member_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(id: String, name: String, description: String, owner_id: String) -> Self {
        let now = now();
        Self {
            id,
            name,
            description,
            owner_id,
            member_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Role a user holds within a team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Admin,
    #[default]
    Member,
    Viewer,
}

/// Links a user to a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(id: String, team_id: String, user_id: String, role: TeamRole) -> Self {
        Self {
            id,
            team_id,
            user_id,
            role,
            joined_at: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_role_wire_format() {
        assert_eq!(serde_json::to_string(&TeamRole::Viewer).unwrap(), "\"viewer\"");
        let role: TeamRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, TeamRole::Admin);
        assert!(serde_json::from_str::<TeamRole>("\"owner\"").is_err());
    }
}
