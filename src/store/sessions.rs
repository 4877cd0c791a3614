//! Session operations

use std::collections::hash_map::Entry;

use crate::types::Session;
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "session";

pub fn create_session(store: &Store, mut session: Session) -> StoreResult<Session> {
    let mut tables = store.tables.write();

    match tables.sessions.entry(session.token.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, session.token)),
        Entry::Vacant(slot) => {
            let now = now();
            session.created_at = now;
            session.last_activity = now;
            Ok(slot.insert(session).clone())
        }
    }
}

pub fn get_session(store: &Store, token: &str) -> StoreResult<Session> {
    store
        .tables
        .read()
        .sessions
        .get(token)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, token))
}

pub fn user_sessions(store: &Store, user_id: &str) -> Vec<Session> {
    let mut sessions: Vec<Session> = store
        .tables
        .read()
        .sessions
        .values()
        .filter(|s| s.user_id == user_id)
        .cloned()
        .collect();
    sort_by_creation(&mut sessions, |s| (s.created_at, s.id.as_str()));
    sessions
}

/// Remove a session, returning the removed record
pub fn delete_session(store: &Store, token: &str) -> StoreResult<Session> {
    store
        .tables
        .write()
        .sessions
        .remove(token)
        .ok_or_else(|| StoreError::not_found(KIND, token))
}
