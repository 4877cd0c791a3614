//! Team and membership operations

use std::collections::hash_map::Entry;

use crate::types::{Team, TeamMember};
use crate::utils::time::now;

use super::{sort_by_creation, Store, StoreError, StoreResult};

const KIND: &str = "team";
const MEMBER_KIND: &str = "team member";

/// Insert a new team with a zero member count
pub fn create_team(store: &Store, mut team: Team) -> StoreResult<Team> {
    let mut tables = store.tables.write();

    match tables.teams.entry(team.id.clone()) {
        Entry::Occupied(_) => Err(StoreError::already_exists(KIND, team.id)),
        Entry::Vacant(slot) => {
            let now = now();
            team.member_count = 0;
            team.created_at = now;
            team.updated_at = now;
            Ok(slot.insert(team).clone())
        }
    }
}

pub fn get_team(store: &Store, id: &str) -> StoreResult<Team> {
    store
        .tables
        .read()
        .teams
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::not_found(KIND, id))
}

pub fn list_teams(store: &Store) -> Vec<Team> {
    let mut teams: Vec<Team> = store.tables.read().teams.values().cloned().collect();
    sort_by_creation(&mut teams, |t| (t.created_at, t.id.as_str()));
    teams
}

/// Append a member and bump the team's `member_count` under one write lock.
///
/// The counter is only ever incremented here; it is never recomputed from
/// the member list.
pub fn add_team_member(store: &Store, mut member: TeamMember) -> StoreResult<TeamMember> {
    let mut tables = store.tables.write();

    if tables
        .team_members
        .values()
        .flatten()
        .any(|m| m.id == member.id)
    {
        return Err(StoreError::already_exists(MEMBER_KIND, member.id));
    }

    let now = now();
    let team = tables
        .teams
        .get_mut(&member.team_id)
        .ok_or_else(|| StoreError::not_found(KIND, member.team_id.as_str()))?;
    team.member_count += 1;
    team.updated_at = now;

    member.joined_at = now;
    tables
        .team_members
        .entry(member.team_id.clone())
        .or_default()
        .push(member.clone());

    Ok(member)
}

/// Members in the order they were added; empty for unknown teams
pub fn team_members(store: &Store, team_id: &str) -> Vec<TeamMember> {
    store
        .tables
        .read()
        .team_members
        .get(team_id)
        .cloned()
        .unwrap_or_default()
}
