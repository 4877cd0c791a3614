//! Data types for the identity store
//!
//! This module contains every entity kept by the [`Store`](crate::store::Store)
//! and served by the REST API.

mod invitation;
mod log;
mod permission;
mod profile;
mod role;
mod session;
mod team;
mod user;

pub use invitation::{Invitation, InvitationStatus};
pub use log::{ActivityLog, AuditLog, AuditStatus};
pub use permission::{Permission, UserPermission};
pub use profile::{UserPreferences, UserProfile};
pub use role::Role;
pub use session::{PasswordReset, Session};
pub use team::{Team, TeamMember, TeamRole};
pub use user::User;

/// Free-form JSON object used for audit details, activity metadata and settings
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Check if string is empty (for skip_serializing_if)
pub fn is_empty(val: &str) -> bool {
    val.is_empty()
}
