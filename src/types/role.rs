//! Role type for role-based access control

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// Permission string granting everything
pub const WILDCARD_PERMISSION: &str = "*";

/// A named bundle of permission strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Role {
    pub fn new(id: String, name: String, description: String, permissions: Vec<String>) -> Self {
        Self {
            id,
            name,
            description,
            permissions,
            created_at: now(),
        }
    }

    /// Check if the role carries a permission, honouring the `*` wildcard
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == permission || p == WILDCARD_PERMISSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_grants_everything() {
        let admin = Role::new("role-1".into(), "Admin".into(), String::new(), vec!["*".into()]);
        assert!(admin.has_permission("users.delete"));
    }

    #[test]
    fn test_explicit_permissions_only() {
        let user = Role::new(
            "role-2".into(),
            "User".into(),
            String::new(),
            vec!["read:own".into(), "write:own".into()],
        );
        assert!(user.has_permission("read:own"));
        assert!(!user.has_permission("users.delete"));
    }
}
