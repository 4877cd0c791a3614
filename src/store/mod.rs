//! Store - in-memory identity database
//!
//! All collections live in one [`Tables`] value behind a single
//! reader-writer lock. Readers share the lock; every mutation takes it
//! exclusively for the whole operation, so checks and writes that span
//! two collections (member insert + counter bump, reset consumption +
//! password change) happen in one critical section.
//!
//! No operation calls another locking operation while holding the lock.

mod error;
mod invitations;
mod logs;
mod password_resets;
mod permissions;
mod preferences;
mod profiles;
mod roles;
mod sessions;
mod teams;
mod users;

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::{
    ActivityLog, AuditLog, Invitation, PasswordReset, Permission, Role, Session, Team, TeamMember,
    User, UserPermission, UserPreferences, UserProfile,
};

pub use error::{StoreError, StoreResult};

/// Every collection held by the store
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: HashMap<String, User>,
    pub roles: HashMap<String, Role>,
    pub profiles: HashMap<String, UserProfile>,
    pub teams: HashMap<String, Team>,
    /// Keyed by team ID, insertion ordered
    pub team_members: HashMap<String, Vec<TeamMember>>,
    pub audit_logs: Vec<AuditLog>,
    /// Keyed by token
    pub password_resets: HashMap<String, PasswordReset>,
    /// Keyed by token
    pub sessions: HashMap<String, Session>,
    /// Keyed by user ID
    pub preferences: HashMap<String, UserPreferences>,
    pub activity_logs: Vec<ActivityLog>,
    /// Keyed by token
    pub invitations: HashMap<String, Invitation>,
    pub permissions: HashMap<String, Permission>,
    /// Keyed by user ID, insertion ordered
    pub user_permissions: HashMap<String, Vec<UserPermission>>,
}

/// Process-wide identity store
pub struct Store {
    pub(crate) tables: RwLock<Tables>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Create a store seeded with the default roles and permission catalog
    pub fn with_defaults() -> Self {
        let store = Self::new();
        store.seed_defaults();
        store
    }

    /// Seed through the regular create paths; keys already present are kept
    fn seed_defaults(&self) {
        for role in default_roles() {
            if let Err(err) = self.create_role(role) {
                tracing::warn!(error = %err, "default role not seeded");
            }
        }
        for permission in default_permissions() {
            if let Err(err) = self.create_permission(permission) {
                tracing::warn!(error = %err, "default permission not seeded");
            }
        }

        let tables = self.tables.read();
        tracing::debug!(
            roles = tables.roles.len(),
            permissions = tables.permissions.len(),
            "seeded default roles and permissions"
        );
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn default_roles() -> Vec<Role> {
    vec![
        Role::new(
            "role-1".to_string(),
            "Admin".to_string(),
            "Full system access".to_string(),
            vec!["*".to_string()],
        ),
        Role::new(
            "role-2".to_string(),
            "User".to_string(),
            "Standard user access".to_string(),
            vec!["read:own".to_string(), "write:own".to_string()],
        ),
    ]
}

fn default_permissions() -> Vec<Permission> {
    vec![
        Permission::new("perm-1", "users.create", "users", "create", "Create new users"),
        Permission::new("perm-2", "users.read", "users", "read", "View users"),
        Permission::new("perm-3", "users.update", "users", "update", "Update users"),
        Permission::new("perm-4", "users.delete", "users", "delete", "Delete users"),
        Permission::new("perm-5", "teams.manage", "teams", "manage", "Manage teams"),
    ]
}

/// Sort a snapshot by creation time, ties broken by ID
pub(crate) fn sort_by_creation<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> (chrono::DateTime<chrono::Utc>, &str),
{
    items.sort_by(|a, b| key(a).cmp(&key(b)));
}

// Re-export operations from submodules as methods
impl Store {
    // Users (from users.rs)
    pub fn create_user(&self, user: User) -> StoreResult<User> {
        users::create_user(self, user)
    }

    pub fn get_user(&self, id: &str) -> StoreResult<User> {
        users::get_user(self, id)
    }

    pub fn list_users(&self) -> Vec<User> {
        users::list_users(self)
    }

    pub fn update_user(&self, id: &str, user: User) -> StoreResult<User> {
        users::update_user(self, id, user)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        users::find_user_by_email(self, email)
    }

    // Roles (from roles.rs)
    pub fn create_role(&self, role: Role) -> StoreResult<Role> {
        roles::create_role(self, role)
    }

    pub fn get_role(&self, id: &str) -> StoreResult<Role> {
        roles::get_role(self, id)
    }

    pub fn list_roles(&self) -> Vec<Role> {
        roles::list_roles(self)
    }

    // Profiles (from profiles.rs)
    pub fn create_profile(&self, profile: UserProfile) -> StoreResult<UserProfile> {
        profiles::create_profile(self, profile)
    }

    pub fn get_profile_by_user(&self, user_id: &str) -> StoreResult<UserProfile> {
        profiles::get_profile_by_user(self, user_id)
    }

    pub fn update_profile_by_user(
        &self,
        user_id: &str,
        profile: UserProfile,
    ) -> StoreResult<UserProfile> {
        profiles::update_profile_by_user(self, user_id, profile)
    }

    // Teams (from teams.rs)
    pub fn create_team(&self, team: Team) -> StoreResult<Team> {
        teams::create_team(self, team)
    }

    pub fn get_team(&self, id: &str) -> StoreResult<Team> {
        teams::get_team(self, id)
    }

    pub fn list_teams(&self) -> Vec<Team> {
        teams::list_teams(self)
    }

    pub fn add_team_member(&self, member: TeamMember) -> StoreResult<TeamMember> {
        teams::add_team_member(self, member)
    }

    pub fn team_members(&self, team_id: &str) -> Vec<TeamMember> {
        teams::team_members(self, team_id)
    }

    // Audit and activity logs (from logs.rs)
    pub fn append_audit(&self, log: AuditLog) -> AuditLog {
        logs::append_audit(self, log)
    }

    pub fn audit_logs(&self, limit: usize) -> Vec<AuditLog> {
        logs::audit_logs(self, limit)
    }

    pub fn append_activity(&self, log: ActivityLog) -> ActivityLog {
        logs::append_activity(self, log)
    }

    pub fn user_activity(&self, user_id: &str, limit: usize) -> Vec<ActivityLog> {
        logs::user_activity(self, user_id, limit)
    }

    // Password resets (from password_resets.rs)
    pub fn create_password_reset(&self, reset: PasswordReset) -> StoreResult<PasswordReset> {
        password_resets::create_password_reset(self, reset)
    }

    pub fn get_password_reset(&self, token: &str) -> StoreResult<PasswordReset> {
        password_resets::get_password_reset(self, token)
    }

    pub fn consume_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> StoreResult<PasswordReset> {
        password_resets::consume_password_reset(self, token, new_password)
    }

    // Sessions (from sessions.rs)
    pub fn create_session(&self, session: Session) -> StoreResult<Session> {
        sessions::create_session(self, session)
    }

    pub fn get_session(&self, token: &str) -> StoreResult<Session> {
        sessions::get_session(self, token)
    }

    pub fn user_sessions(&self, user_id: &str) -> Vec<Session> {
        sessions::user_sessions(self, user_id)
    }

    pub fn delete_session(&self, token: &str) -> StoreResult<Session> {
        sessions::delete_session(self, token)
    }

    // Preferences (from preferences.rs)
    pub fn create_preferences(&self, prefs: UserPreferences) -> StoreResult<UserPreferences> {
        preferences::create_preferences(self, prefs)
    }

    pub fn get_preferences(&self, user_id: &str) -> StoreResult<UserPreferences> {
        preferences::get_preferences(self, user_id)
    }

    pub fn update_preferences(
        &self,
        user_id: &str,
        prefs: UserPreferences,
    ) -> StoreResult<UserPreferences> {
        preferences::update_preferences(self, user_id, prefs)
    }

    // Invitations (from invitations.rs)
    pub fn create_invitation(&self, invitation: Invitation) -> StoreResult<Invitation> {
        invitations::create_invitation(self, invitation)
    }

    pub fn get_invitation(&self, token: &str) -> StoreResult<Invitation> {
        invitations::get_invitation(self, token)
    }

    pub fn accept_invitation(&self, token: &str) -> StoreResult<Invitation> {
        invitations::accept_invitation(self, token)
    }

    pub fn revoke_invitation(&self, token: &str) -> StoreResult<Invitation> {
        invitations::revoke_invitation(self, token)
    }

    pub fn pending_invitations(&self) -> Vec<Invitation> {
        invitations::pending_invitations(self)
    }

    // Permissions and grants (from permissions.rs)
    pub fn create_permission(&self, permission: Permission) -> StoreResult<Permission> {
        permissions::create_permission(self, permission)
    }

    pub fn get_permission(&self, id: &str) -> StoreResult<Permission> {
        permissions::get_permission(self, id)
    }

    pub fn list_permissions(&self) -> Vec<Permission> {
        permissions::list_permissions(self)
    }

    pub fn grant_permission(&self, grant: UserPermission) -> StoreResult<UserPermission> {
        permissions::grant_permission(self, grant)
    }

    pub fn user_permissions(&self, user_id: &str) -> Vec<UserPermission> {
        permissions::user_permissions(self, user_id)
    }

    pub fn revoke_permission(
        &self,
        user_id: &str,
        permission_id: &str,
    ) -> StoreResult<UserPermission> {
        permissions::revoke_permission(self, user_id, permission_id)
    }
}
