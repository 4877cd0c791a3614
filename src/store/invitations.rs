//! Invitation operations
//!
//! Status only moves out of `pending`. Expiry is detected lazily when an
//! accept is attempted.

use std::collections::hash_map::Entry;

use crate::types::{Invitation, InvitationStatus};
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "invitation";

pub fn create_invitation(store: &Store, mut invitation: Invitation) -> StoreResult<Invitation> {
    let mut tables = store.tables.write();

    match tables.invitations.entry(invitation.token.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, invitation.token)),
        Entry::Vacant(slot) => {
            invitation.status = InvitationStatus::Pending;
            invitation.accepted_at = None;
            invitation.created_at = now();
            Ok(slot.insert(invitation).clone())
        }
    }
}

pub fn get_invitation(store: &Store, token: &str) -> StoreResult<Invitation> {
    store
        .tables
        .read()
        .invitations
        .get(token)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, token))
}

fn transition(invitation: &mut Invitation, next: InvitationStatus) -> StoreResult<()> {
    if !invitation.status.can_transition_to(next) {
        return Err(StoreError::InvitationProcessed);
    }
    invitation.status = next;
    if next == InvitationStatus::Accepted {
        invitation.accepted_at = Some(now());
    }
    Ok(())
}

/// Accept a pending invitation.
///
/// An invitation past its expiry is moved to `expired` and the call fails
/// with `InvitationExpired`; it can never become `accepted` afterwards.
pub fn accept_invitation(store: &Store, token: &str) -> StoreResult<Invitation> {
    let mut tables = store.tables.write();
    let invitation = tables
        .invitations
        .get_mut(token)
        .ok_or_else(|| StoreError::not_found(KIND, token))?;

    if invitation.status.is_terminal() {
        return Err(StoreError::InvitationProcessed);
    }
    if invitation.is_expired() {
        transition(invitation, InvitationStatus::Expired)?;
        return Err(StoreError::InvitationExpired);
    }

    transition(invitation, InvitationStatus::Accepted)?;
    Ok(invitation.clone())
}

pub fn revoke_invitation(store: &Store, token: &str) -> StoreResult<Invitation> {
    let mut tables = store.tables.write();
    let invitation = tables
        .invitations
        .get_mut(token)
        .ok_or_else(|| StoreError::not_found(KIND, token))?;

    transition(invitation, InvitationStatus::Revoked)?;
    Ok(invitation.clone())
}

pub fn pending_invitations(store: &Store) -> Vec<Invitation> {
    let mut pending: Vec<Invitation> = store
        .tables
        .read()
        .invitations
        .values()
        .filter(|i| i.status == InvitationStatus::Pending)
        .cloned()
        .collect();
    sort_by_creation(&mut pending, |i| (i.created_at, i.id.as_str()));
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invitation(token: &str, ttl: Duration) -> Invitation {
        Invitation::new(
            format!("invitation-{}", token),
            token.into(),
            "new@example.com".into(),
            now() + ttl,
        )
    }

    #[test]
    fn test_accept_pending() {
        let store = Store::new();
        store.create_invitation(invitation("invite-1", Duration::days(7))).unwrap();

        let accepted = store.accept_invitation("invite-1").unwrap();
        assert_eq!(accepted.status, InvitationStatus::Accepted);
        assert!(accepted.accepted_at.is_some());
        assert_eq!(
            store.accept_invitation("invite-1"),
            Err(StoreError::InvitationProcessed)
        );
    }

    #[test]
    fn test_accept_after_expiry_marks_expired() {
        let store = Store::new();
        store.create_invitation(invitation("invite-1", -Duration::seconds(5))).unwrap();

        assert_eq!(
            store.accept_invitation("invite-1"),
            Err(StoreError::InvitationExpired)
        );
        let stored = store.get_invitation("invite-1").unwrap();
        assert_eq!(stored.status, InvitationStatus::Expired);
        assert!(stored.accepted_at.is_none());

        assert_eq!(
            store.accept_invitation("invite-1"),
            Err(StoreError::InvitationProcessed)
        );
    }

    #[test]
    fn test_revoke_is_terminal() {
        let store = Store::new();
        store.create_invitation(invitation("invite-1", Duration::days(7))).unwrap();

        assert_eq!(
            store.revoke_invitation("invite-1").unwrap().status,
            InvitationStatus::Revoked
        );
        assert_eq!(
            store.accept_invitation("invite-1"),
            Err(StoreError::InvitationProcessed)
        );
        assert_eq!(
            store.revoke_invitation("invite-1"),
            Err(StoreError::InvitationProcessed)
        );
    }

    #[test]
    fn test_pending_listing() {
        let store = Store::new();
        store.create_invitation(invitation("invite-1", Duration::days(7))).unwrap();
        store.create_invitation(invitation("invite-2", Duration::days(7))).unwrap();
        store.accept_invitation("invite-1").unwrap();

        let pending = store.pending_invitations();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].token, "invite-2");
    }

    #[test]
    fn test_client_status_is_ignored_on_create() {
        let store = Store::new();
        let mut inv = invitation("invite-1", Duration::days(7));
        inv.status = InvitationStatus::Accepted;

        assert_eq!(
            store.create_invitation(inv).unwrap().status,
            InvitationStatus::Pending
        );
    }
}
