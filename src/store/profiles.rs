//! Profile operations
//!
//! Profiles are stored by their own ID but looked up by user ID, which
//! means a linear scan: there is no secondary index.

use crate::types::UserProfile;
use crate::utils::time::now;

use super::{Store, StoreError, StoreResult};

const KIND: &str = "profile";

/// Insert a profile; fails if the ID is taken or the user already has one
pub fn create_profile(store: &Store, mut profile: UserProfile) -> StoreResult<UserProfile> {
    let mut tables = store.tables.write();

    if tables.profiles.contains_key(&profile.id) {
        return Err(StoreError::already_exists(KIND, profile.id));
    }
    if tables.profiles.values().any(|p| p.user_id == profile.user_id) {
        return Err(StoreError::already_exists(KIND, profile.user_id));
    }

    profile.updated_at = now();
    tables.profiles.insert(profile.id.clone(), profile.clone());
    Ok(profile)
}

pub fn get_profile_by_user(store: &Store, user_id: &str) -> StoreResult<UserProfile> {
    store
        .tables
        .read()
        .profiles
        .values()
        .find(|p| p.user_id == user_id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, user_id))
}

/// Replace the profile belonging to `user_id`, keeping its stored ID
pub fn update_profile_by_user(
    store: &Store,
    user_id: &str,
    mut profile: UserProfile,
) -> StoreResult<UserProfile> {
    let mut tables = store.tables.write();
    let existing = tables
        .profiles
        .values_mut()
        .find(|p| p.user_id == user_id)
        .ok_or_else(|| StoreError::not_found(KIND, user_id))?;

    profile.id = existing.id.clone();
    profile.user_id = user_id.to_string();
    profile.updated_at = now();

    *existing = profile.clone();
    Ok(profile)
}
