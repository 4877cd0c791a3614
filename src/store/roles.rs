//! Role operations

use std::collections::hash_map::Entry;

use crate::types::Role;
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "role";

pub fn create_role(store: &Store, mut role: Role) -> StoreResult<Role> {
    let mut tables = store.tables.write();

    match tables.roles.entry(role.id.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, role.id)),
        Entry::Vacant(slot) => {
            role.created_at = now();
            Ok(slot.insert(role).clone())
        }
    }
}

pub fn get_role(store: &Store, id: &str) -> StoreResult<Role> {
    store
        .tables
        .read()
        .roles
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, id))
}

pub fn list_roles(store: &Store) -> Vec<Role> {
    let mut roles: Vec<Role> = store.tables.read().roles.values().cloned().collect();
    sort_by_creation(&mut roles, |r| (r.created_at, r.id.as_str()));
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_role_conflicts_with_seeded_id() {
        let store = Store::with_defaults();
        let role = Role::new("role-1".into(), "Shadow".into(), String::new(), vec![]);

        assert!(matches!(
            store.create_role(role),
            Err(StoreError::AlreadyExists { .. })
        ));
        assert_eq!(store.get_role("role-1").unwrap().name, "Admin");
    }

    #[test]
    fn test_create_then_get() {
        let store = Store::new();
        let role = Role::new("role-x".into(), "Auditor".into(), "Reads logs".into(), vec!["audit:read".into()]);
        let created = store.create_role(role).unwrap();

        assert_eq!(store.get_role("role-x").unwrap(), created);
        assert!(store.get_role("role-y").unwrap_err().is_not_found());
    }
}
