//! Permission catalog and per-user grants

use std::collections::hash_map::Entry;

use crate::types::{Permission, UserPermission};
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "permission";
const GRANT_KIND: &str = "user permission";

pub fn create_permission(store: &Store, mut permission: Permission) -> StoreResult<Permission> {
    let mut tables = store.tables.write();

    match tables.permissions.entry(permission.id.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, permission.id)),
        Entry::Vacant(slot) => {
            permission.created_at = now();
            Ok(slot.insert(permission).clone())
        }
    }
}

pub fn get_permission(store: &Store, id: &str) -> StoreResult<Permission> {
    store
        .tables
        .read()
        .permissions
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, id))
}

pub fn list_permissions(store: &Store) -> Vec<Permission> {
    let mut permissions: Vec<Permission> =
        store.tables.read().permissions.values().cloned().collect();
    sort_by_creation(&mut permissions, |p| (p.created_at, p.id.as_str()));
    permissions
}

/// Append a grant to the user's list; the permission must be in the catalog
pub fn grant_permission(store: &Store, mut grant: UserPermission) -> StoreResult<UserPermission> {
    let mut tables = store.tables.write();

    if !tables.permissions.contains_key(&grant.permission_id) {
        return Err(StoreError::not_found(KIND, grant.permission_id));
    }
    if tables
        .user_permissions
        .values()
        .flatten()
        .any(|g| g.id == grant.id)
    {
        return Err(StoreError::already_exists(GRANT_KIND, grant.id));
    }

    grant.granted_at = now();
    tables
        .user_permissions
        .entry(grant.user_id.clone())
        .or_default()
        .push(grant.clone());
    Ok(grant)
}

/// Grants in the order they were made; empty for unknown users
pub fn user_permissions(store: &Store, user_id: &str) -> Vec<UserPermission> {
    store
        .tables
        .read()
        .user_permissions
        .get(user_id)
        .cloned()
        .unwrap_or_default()
}

/// Remove the first grant of `permission_id` held by the user
pub fn revoke_permission(
    store: &Store,
    user_id: &str,
    permission_id: &str,
) -> StoreResult<UserPermission> {
    let not_found = || StoreError::not_found(GRANT_KIND, format!("{}/{}", user_id, permission_id));

    let mut tables = store.tables.write();
    let grants = tables.user_permissions.get_mut(user_id).ok_or_else(not_found)?;
    let index = grants
        .iter()
        .position(|g| g.permission_id == permission_id)
        .ok_or_else(not_found)?;

    Ok(grants.remove(index))
}
