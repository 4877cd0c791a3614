//! Integration tests for the identity store

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::{Duration, Utc};
use identity_hub::types::{
    AuditLog, Invitation, InvitationStatus, PasswordReset, Session, Team, TeamMember, TeamRole, User,
    UserPermission,
};
use identity_hub::utils::generate_id;
use identity_hub::{Store, StoreError};

fn user(id: &str, email: &str) -> User {
    User::new(id.to_string(), email.to_string(), id.to_string())
}

fn reset(token: &str, user_id: &str, expires_in: Duration) -> PasswordReset {
    PasswordReset::new(
        format!("pwreset-{}", token),
        user_id.to_string(),
        token.to_string(),
        Utc::now() + expires_in,
    )
}

fn invitation(token: &str, expires_in: Duration) -> Invitation {
    Invitation::new(
        format!("invitation-{}", token),
        token.to_string(),
        "guest@example.com".to_string(),
        Utc::now() + expires_in,
    )
}

#[test]
fn test_get_after_create() {
    let store = Store::new();
    let created = store.create_user(user("user-1", "a@example.com")).unwrap();

    let fetched = store.get_user("user-1").unwrap();
    assert_eq!(fetched, created);
    assert!(fetched.is_active);
}

#[test]
fn test_duplicate_ids_conflict() {
    let store = Store::new();
    store.create_user(user("user-1", "a@example.com")).unwrap();

    let err = store.create_user(user("user-1", "b@example.com")).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists { .. }));
    assert_eq!(store.get_user("user-1").unwrap().email, "a@example.com");
}

#[test]
fn test_duplicate_tokens_conflict() {
    let store = Store::new();
    let session = Session::new(
        "sess-1".into(),
        "user-1".into(),
        "session-1".into(),
        "127.0.0.1".into(),
        "tests".into(),
        Utc::now() + Duration::days(7),
    );
    store.create_session(session.clone()).unwrap();
    assert!(matches!(
        store.create_session(session).unwrap_err(),
        StoreError::AlreadyExists { .. }
    ));

    store.create_password_reset(reset("reset-1", "user-1", Duration::hours(1))).unwrap();
    assert!(matches!(
        store
            .create_password_reset(reset("reset-1", "user-2", Duration::hours(1)))
            .unwrap_err(),
        StoreError::AlreadyExists { .. }
    ));

    store.create_invitation(invitation("invite-1", Duration::days(1))).unwrap();
    assert!(matches!(
        store
            .create_invitation(invitation("invite-1", Duration::days(1)))
            .unwrap_err(),
        StoreError::AlreadyExists { .. }
    ));
}

#[test]
fn test_missing_lookups_are_not_found() {
    let store = Store::with_defaults();

    assert!(store.get_user("nope").unwrap_err().is_not_found());
    assert!(store.get_role("nope").unwrap_err().is_not_found());
    assert!(store.get_team("nope").unwrap_err().is_not_found());
    assert!(store.get_profile_by_user("nope").unwrap_err().is_not_found());
    assert!(store.get_preferences("nope").unwrap_err().is_not_found());
    assert!(store.get_invitation("nope").unwrap_err().is_not_found());
    assert!(store.delete_session("nope").unwrap_err().is_not_found());
}

#[test]
fn test_member_count_tracks_members() {
    let store = Store::new();
    store
        .create_team(Team::new(
            "team-1".into(),
            "Core".into(),
            String::new(),
            "user-1".into(),
        ))
        .unwrap();

    for i in 0..3 {
        store
            .add_team_member(TeamMember::new(
                format!("member-{}", i),
                "team-1".into(),
                format!("user-{}", i),
                TeamRole::Member,
            ))
            .unwrap();
    }

    let team = store.get_team("team-1").unwrap();
    let members = store.team_members("team-1");
    assert_eq!(team.member_count, 3);
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].id, "member-0");
}

#[test]
fn test_member_for_missing_team_is_rejected() {
    let store = Store::new();
    let err = store
        .add_team_member(TeamMember::new(
            "member-1".into(),
            "team-x".into(),
            "user-1".into(),
            TeamRole::Viewer,
        ))
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(store.team_members("team-x").is_empty());
}

#[test]
fn test_audit_window_returns_most_recent() {
    let store = Store::new();
    for i in 0..10 {
        let mut log = AuditLog::success("user-1", "user.updated", "user", format!("user-{}", i));
        log.id = format!("audit-{}", i);
        store.append_audit(log);
    }

    let window = store.audit_logs(3);
    let ids: Vec<&str> = window.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["audit-7", "audit-8", "audit-9"]);

    assert_eq!(store.audit_logs(100).len(), 10);
    assert!(store.audit_logs(0).is_empty());
}

#[test]
fn test_password_reset_changes_password_once() {
    let store = Store::new();
    let mut u = user("user-1", "a@example.com");
    u.password = "old".into();
    store.create_user(u).unwrap();
    store
        .create_password_reset(reset("reset-1", "user-1", Duration::hours(1)))
        .unwrap();

    let consumed = store.consume_password_reset("reset-1", "new").unwrap();
    assert!(consumed.used);
    assert_eq!(store.get_user("user-1").unwrap().password, "new");

    let err = store.consume_password_reset("reset-1", "again").unwrap_err();
    assert_eq!(err, StoreError::TokenAlreadyUsed);
    assert_eq!(store.get_user("user-1").unwrap().password, "new");
}

#[test]
fn test_expired_reset_is_refused() {
    let store = Store::new();
    store.create_user(user("user-1", "a@example.com")).unwrap();
    store
        .create_password_reset(reset("reset-old", "user-1", Duration::hours(-1)))
        .unwrap();

    let err = store.consume_password_reset("reset-old", "new").unwrap_err();
    assert_eq!(err, StoreError::TokenExpired);
    assert!(!store.get_password_reset("reset-old").unwrap().used);
    assert!(store.consume_password_reset("missing", "x").unwrap_err().is_not_found());
}

#[test]
fn test_invitation_accept_then_processed() {
    let store = Store::new();
    store.create_invitation(invitation("invite-1", Duration::days(1))).unwrap();
    assert_eq!(store.pending_invitations().len(), 1);

    let accepted = store.accept_invitation("invite-1").unwrap();
    assert_eq!(accepted.status, InvitationStatus::Accepted);
    assert!(accepted.accepted_at.is_some());
    assert!(store.pending_invitations().is_empty());

    assert_eq!(
        store.accept_invitation("invite-1").unwrap_err(),
        StoreError::InvitationProcessed
    );
    assert_eq!(
        store.revoke_invitation("invite-1").unwrap_err(),
        StoreError::InvitationProcessed
    );
}

#[test]
fn test_expired_invitation_never_accepts() {
    let store = Store::new();
    store
        .create_invitation(invitation("invite-old", Duration::hours(-1)))
        .unwrap();

    // Lazy expiry: still readable as pending until an accept is attempted
    assert_eq!(
        store.get_invitation("invite-old").unwrap().status,
        InvitationStatus::Pending
    );

    assert_eq!(
        store.accept_invitation("invite-old").unwrap_err(),
        StoreError::InvitationExpired
    );
    let stored = store.get_invitation("invite-old").unwrap();
    assert_eq!(stored.status, InvitationStatus::Expired);
    assert!(stored.accepted_at.is_none());

    assert_eq!(
        store.accept_invitation("invite-old").unwrap_err(),
        StoreError::InvitationProcessed
    );
}

#[test]
fn test_revoked_invitation_cannot_be_accepted() {
    let store = Store::new();
    store.create_invitation(invitation("invite-2", Duration::days(1))).unwrap();

    let revoked = store.revoke_invitation("invite-2").unwrap();
    assert_eq!(revoked.status, InvitationStatus::Revoked);
    assert_eq!(
        store.accept_invitation("invite-2").unwrap_err(),
        StoreError::InvitationProcessed
    );
}

#[test]
fn test_grant_and_revoke_permission() {
    let store = Store::with_defaults();
    store
        .grant_permission(UserPermission::new(
            "userperm-1".into(),
            "user-1".into(),
            "perm-2".into(),
            "admin".into(),
        ))
        .unwrap();

    let unknown = store
        .grant_permission(UserPermission::new(
            "userperm-2".into(),
            "user-1".into(),
            "perm-404".into(),
            "admin".into(),
        ))
        .unwrap_err();
    assert!(unknown.is_not_found());
    assert_eq!(store.user_permissions("user-1").len(), 1);

    let revoked = store.revoke_permission("user-1", "perm-2").unwrap();
    assert_eq!(revoked.id, "userperm-1");
    assert!(store.user_permissions("user-1").is_empty());
    assert!(store.revoke_permission("user-1", "perm-2").unwrap_err().is_not_found());
}

#[test]
fn test_concurrent_user_creation() {
    let store = Arc::new(Store::new());
    let mut handles = vec![];

    for t in 0..10 {
        let store = Arc::clone(&store);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let id = generate_id("user");
                let email = format!("user{}_{}@example.com", t, i);
                store.create_user(User::new(id, email, format!("u{}_{}", t, i))).unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let users = store.list_users();
    assert_eq!(users.len(), 1000);
    let ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_concurrent_member_adds_keep_count() {
    let store = Arc::new(Store::new());
    store
        .create_team(Team::new("team-1".into(), "Load".into(), String::new(), String::new()))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..25 {
                    store
                        .add_team_member(TeamMember::new(
                            generate_id("member"),
                            "team-1".into(),
                            format!("user-{}-{}", t, i),
                            TeamRole::Member,
                        ))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.get_team("team-1").unwrap().member_count, 200);
    assert_eq!(store.team_members("team-1").len(), 200);
}
