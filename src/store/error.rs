//! Store error type

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by store operations
///
/// The store is purely in-process: nothing here is transient, so callers
/// never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("{kind} already exists: {key}")]
    AlreadyExists { kind: &'static str, key: String },

    #[error("Token already used")]
    TokenAlreadyUsed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invitation already processed")]
    InvitationProcessed,

    #[error("Invitation expired")]
    InvitationExpired,
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn already_exists(kind: &'static str, key: impl Into<String>) -> Self {
        StoreError::AlreadyExists {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
