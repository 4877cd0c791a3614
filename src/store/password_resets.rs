//! Password reset token operations
//!
//! Expiry is evaluated lazily when a token is consumed; nothing sweeps old
//! tokens, so an expired record can still be read back by token.

use std::collections::hash_map::Entry;

use crate::types::PasswordReset;
use crate::utils::time::now;

use super::{Store, StoreError, StoreResult};

const KIND: &str = "password reset";

pub fn create_password_reset(store: &Store, mut reset: PasswordReset) -> StoreResult<PasswordReset> {
    let mut tables = store.tables.write();

    match tables.password_resets.entry(reset.token.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, reset.token)),
        Entry::Vacant(slot) => {
            reset.used = false;
            reset.created_at = now();
            Ok(slot.insert(reset).clone())
        }
    }
}

pub fn get_password_reset(store: &Store, token: &str) -> StoreResult<PasswordReset> {
    store
        .tables
        .read()
        .password_resets
        .get(token)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, token))
}

/// Validate and consume a reset token in one critical section.
///
/// Checks run in order: unknown token, already used, expired. On success
/// the token is marked used and, when it is bound to an existing user, that
/// user's password is replaced.
pub fn consume_password_reset(
    store: &Store,
    token: &str,
    new_password: &str,
) -> StoreResult<PasswordReset> {
    let mut guard = store.tables.write();
    let tables = &mut *guard;

    let reset = tables
        .password_resets
        .get_mut(token)
        .ok_or_else(|| StoreError::not_found(KIND, token))?;

    if reset.used {
        return Err(StoreError::TokenAlreadyUsed);
    }
    if reset.is_expired() {
        return Err(StoreError::TokenExpired);
    }
    reset.used = true;

    if let Some(user) = tables.users.get_mut(&reset.user_id) {
        user.password = new_password.to_string();
        user.updated_at = now();
    }

    Ok(reset.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use chrono::Duration;

    fn reset(token: &str, user_id: &str, ttl: Duration) -> PasswordReset {
        PasswordReset::new("pwreset-1".into(), user_id.into(), token.into(), now() + ttl)
    }

    #[test]
    fn test_consume_once() {
        let store = Store::new();
        store.create_password_reset(reset("reset-1", "", Duration::hours(24))).unwrap();

        let consumed = store.consume_password_reset("reset-1", "new-pass").unwrap();
        assert!(consumed.used);
        assert_eq!(
            store.consume_password_reset("reset-1", "new-pass"),
            Err(StoreError::TokenAlreadyUsed)
        );
        assert!(store.get_password_reset("reset-1").unwrap().used);
    }

    #[test]
    fn test_unknown_token() {
        let store = Store::new();
        assert!(store.consume_password_reset("reset-x", "p").unwrap_err().is_not_found());
    }

    #[test]
    fn test_expired_token_stays_unused() {
        let store = Store::new();
        store.create_password_reset(reset("reset-1", "", -Duration::minutes(1))).unwrap();

        assert_eq!(
            store.consume_password_reset("reset-1", "p"),
            Err(StoreError::TokenExpired)
        );
        assert!(!store.get_password_reset("reset-1").unwrap().used);
    }

    #[test]
    fn test_consume_updates_bound_user_password() {
        let store = Store::new();
        store
            .create_user(User::new("user-1".into(), "a@example.com".into(), "a".into()))
            .unwrap();
        store.create_password_reset(reset("reset-1", "user-1", Duration::hours(1))).unwrap();

        store.consume_password_reset("reset-1", "fresh").unwrap();
        assert_eq!(store.get_user("user-1").unwrap().password, "fresh");
    }
}
