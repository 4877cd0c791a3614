//! Preference operations; the store keys preferences by user ID

use std::collections::hash_map::Entry;

use crate::types::UserPreferences;
use crate::utils::time::now;

use super::{Store, StoreError, StoreResult};

const KIND: &str = "preferences";

pub fn create_preferences(store: &Store, mut prefs: UserPreferences) -> StoreResult<UserPreferences> {
    let mut tables = store.tables.write();

    match tables.preferences.entry(prefs.user_id.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, prefs.user_id)),
        Entry::Vacant(slot) => {
            prefs.updated_at = now();
            Ok(slot.insert(prefs).clone())
        }
    }
}

pub fn get_preferences(store: &Store, user_id: &str) -> StoreResult<UserPreferences> {
    store
        .tables
        .read()
        .preferences
        .get(user_id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, user_id))
}

/// Replace a user's preferences, keeping the stored ID
pub fn update_preferences(
    store: &Store,
    user_id: &str,
    mut prefs: UserPreferences,
) -> StoreResult<UserPreferences> {
    let mut tables = store.tables.write();
    let existing = tables
        .preferences
        .get_mut(user_id)
        .ok_or_else(|| StoreError::not_found(KIND, user_id))?;

    prefs.id = existing.id.clone();
    prefs.user_id = user_id.to_string();
    prefs.updated_at = now();

    *existing = prefs.clone();
    Ok(prefs)
}
