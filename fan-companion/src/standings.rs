use crate::types::{CompanionError, GroupStanding, Result, TeamRecord};
use std::cmp::Ordering;
use std::collections::HashSet;

pub const MAX_RECENT_RESULTS: usize = 5;

/// Table order: points, goal difference, goals scored (all descending), then name.
pub fn compare_records(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.display_name.cmp(&b.display_name))
}

/// Ranked copy of `teams`. Uniqueness of country keys is the caller's concern.
pub fn rank(teams: &[TeamRecord]) -> Vec<TeamRecord> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(compare_records);
    ranked
}

pub fn rank_group(group: &GroupStanding) -> GroupStanding {
    GroupStanding {
        name: group.name.clone(),
        teams: rank(&group.teams),
    }
}

/// Ranks every group, keeping the groups themselves in the given order.
pub fn rank_all(groups: &[GroupStanding]) -> Vec<GroupStanding> {
    groups.iter().map(rank_group).collect()
}

pub fn validate_record(team: &TeamRecord) -> Result<()> {
    let decided = u64::from(team.wins) + u64::from(team.draws) + u64::from(team.losses);
    if u64::from(team.played) != decided {
        return Err(CompanionError::InvalidRecord {
            key: team.country_key.clone(),
            reason: format!("played {} but wins + draws + losses is {}", team.played, decided),
        });
    }
    if team.recent_results.len() > MAX_RECENT_RESULTS {
        return Err(CompanionError::InvalidRecord {
            key: team.country_key.clone(),
            reason: format!("{} recent results, at most {} allowed", team.recent_results.len(), MAX_RECENT_RESULTS),
        });
    }
    Ok(())
}

/// Checks every record and that no country appears twice.
pub fn validate_group(group: &GroupStanding) -> Result<()> {
    let mut seen = HashSet::new();
    for team in &group.teams {
        validate_record(team)?;
        if !seen.insert(team.country_key.as_str()) {
            return Err(CompanionError::InvalidRecord {
                key: team.country_key.clone(),
                reason: format!("appears more than once in {}", group.name),
            });
        }
    }
    Ok(())
}
