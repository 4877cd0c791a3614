//! Append-only audit and activity logs

use crate::types::{ActivityLog, AuditLog};
use crate::utils::time::now;

use super::Store;

pub fn append_audit(store: &Store, mut log: AuditLog) -> AuditLog {
    log.created_at = now();
    store.tables.write().audit_logs.push(log.clone());
    log
}

/// The most recent `limit` entries, oldest of the window first
pub fn audit_logs(store: &Store, limit: usize) -> Vec<AuditLog> {
    let tables = store.tables.read();
    let start = tables.audit_logs.len().saturating_sub(limit);
    tables.audit_logs[start..].to_vec()
}

pub fn append_activity(store: &Store, mut log: ActivityLog) -> ActivityLog {
    log.created_at = now();
    store.tables.write().activity_logs.push(log.clone());
    log
}

/// Up to `limit` entries for one user, newest first
pub fn user_activity(store: &Store, user_id: &str, limit: usize) -> Vec<ActivityLog> {
    store
        .tables
        .read()
        .activity_logs
        .iter()
        .rev()
        .filter(|l| l.user_id == user_id)
        .take(limit)
        .cloned()
        .collect()
}
