//! Token-keyed credential records: sessions and password resets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// A single-use password reset token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub id: String,
    /// Empty when the request email matched no user
    pub user_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn new(id: String, user_id: String, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            token,
            expires_at,
            used: false,
            created_at: now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        now() > self.expires_at
    }
}

/// A user session, deleted explicitly by token
///
/// `expires_at` is informational; nothing sweeps expired sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub ip_address: String,
    pub user_agent: String,
    pub expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        id: String,
        user_id: String,
        token: String,
        ip_address: String,
        user_agent: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = now();
        Self {
            id,
            user_id,
            token,
            ip_address,
            user_agent,
            expires_at,
            last_activity: now,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_reset_expiry() {
        let fresh = PasswordReset::new("p".into(), "u".into(), "t".into(), now() + Duration::hours(1));
        let stale = PasswordReset::new("p".into(), "u".into(), "t".into(), now() - Duration::seconds(1));
        assert!(!fresh.is_expired());
        assert!(stale.is_expired());
    }
}
