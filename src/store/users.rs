//! User operations

use std::collections::hash_map::Entry;

use crate::types::User;
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "user";

/// Insert a new user; fails if the ID is taken
pub fn create_user(store: &Store, mut user: User) -> StoreResult<User> {
    let mut tables = store.tables.write();

    match tables.users.entry(user.id.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, user.id)),
        Entry::Vacant(slot) => {
            let now = now();
            user.created_at = now;
            user.updated_at = now;
            Ok(slot.insert(user).clone())
        }
    }
}

pub fn get_user(store: &Store, id: &str) -> StoreResult<User> {
    store
        .tables
        .read()
        .users
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, id))
}

pub fn list_users(store: &Store) -> Vec<User> {
    let mut users: Vec<User> = store.tables.read().users.values().cloned().collect();
    sort_by_creation(&mut users, |u| (u.created_at, u.id.as_str()));
    users
}

/// Replace a user wholesale.
///
/// Only server-owned fields survive from the stored record: the ID, the
/// creation time, and the password when the replacement carries none.
pub fn update_user(store: &Store, id: &str, mut user: User) -> StoreResult<User> {
    let mut tables = store.tables.write();
    let existing = tables
        .users
        .get_mut(id)
        .ok_or_else(|| StoreError::not_found(KIND, id))?;

    user.id = id.to_string();
    user.created_at = existing.created_at;
    if user.password.is_empty() {
        user.password = std::mem::take(&mut existing.password);
    }
    user.updated_at = now();

    *existing = user.clone();
    Ok(user)
}

/// Linear scan; emails are compared case-insensitively.
///
/// A blank email never matches. Emails are not unique, so the earliest
/// created user wins, ties broken by ID.
pub fn find_user_by_email(store: &Store, email: &str) -> Option<User> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }

    store
        .tables
        .read()
        .users
        .values()
        .filter(|u| u.email.trim().eq_ignore_ascii_case(email))
        .min_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)))
        .cloned()
}
