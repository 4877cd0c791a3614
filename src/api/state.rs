//! Shared application state

use crate::config::AppConfig;
use crate::store::Store;
use crate::types::{ActivityLog, AuditLog};
use crate::utils::generate_id;

use super::extract::RequestOrigin;

/// State handed to every handler
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Append an audit entry after a successful mutation.
    ///
    /// Best effort: the primary mutation has already happened and is never
    /// rolled back because of the audit trail.
    pub fn record_audit(&self, origin: &RequestOrigin, log: AuditLog) {
        let mut log = log.with_origin(&origin.ip, &origin.user_agent);
        log.id = generate_id("audit");

        let log = self.store.append_audit(log);
        tracing::info!(
            target: "identity_hub::audit",
            id = %log.id,
            action = %log.action,
            user_id = %log.user_id,
            resource_type = %log.resource_type,
            resource_id = %log.resource_id,
            ip = %log.ip_address,
            "audit entry recorded"
        );
    }

    /// Append an activity entry; same best-effort policy as audits
    pub fn record_activity(&self, log: ActivityLog) -> ActivityLog {
        let log = self.store.append_activity(log);
        tracing::debug!(
            target: "identity_hub::activity",
            id = %log.id,
            user_id = %log.user_id,
            activity_type = %log.activity_type,
            "activity recorded"
        );
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_audit_assigns_id_and_origin() {
        let state = AppState::new(Store::new(), AppConfig::default());
        let origin = RequestOrigin {
            ip: "10.1.1.1".into(),
            user_agent: "tests".into(),
        };

        state.record_audit(&origin, AuditLog::success("user-1", "user.created", "user", "user-1"));

        let logs = state.store.audit_logs(10);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].id.starts_with("audit-"));
        assert_eq!(logs[0].ip_address, "10.1.1.1");
        assert_eq!(logs[0].user_agent, "tests");
    }
}
