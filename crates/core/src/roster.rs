//! Player selection types and roster status aggregation.
//!
//! The status pass is pure: handlers fetch the full row list from storage and
//! hand it here, keeping the grouping logic independent of the database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Types ─────────────────────────────────────────────────────

/// One player's current job/team selection.
///
/// Freshly registered players carry empty `job` and `team` until they pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSelection {
    pub player_id: String,
    pub job: String,
    pub team: String,
}

/// Aggregated selection progress across all players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStatus {
    pub selected_count: usize,
    pub all_selected: bool,
    /// Every team seen in the data, mapped to the jobs picked more than once
    /// within it (empty list when the team has no conflicts).
    pub duplicated_jobs_by_team: BTreeMap<String, Vec<String>>,
}

// ── Aggregation ───────────────────────────────────────────────

/// Compute selection progress over every known player row.
///
/// All rows participate, including players who have not picked yet: their
/// empty job/team group under the "" labels like any other value, so two
/// unselected players report a duplicated "" job in team "".
/// `all_selected` is a strict equality check against `roster_size`.
pub fn selection_status(players: &[PlayerSelection], roster_size: u32) -> SelectionStatus {
    let mut team_job_counts: BTreeMap<&str, BTreeMap<&str, u32>> = BTreeMap::new();
    for p in players {
        *team_job_counts
            .entry(p.team.as_str())
            .or_default()
            .entry(p.job.as_str())
            .or_default() += 1;
    }

    let duplicated_jobs_by_team = team_job_counts
        .iter()
        .map(|(team, job_counts)| {
            let dups = job_counts
                .iter()
                .filter(|(_, count)| **count > 1)
                .map(|(job, _)| job.to_string())
                .collect();
            (team.to_string(), dups)
        })
        .collect();

    SelectionStatus {
        selected_count: players.len(),
        all_selected: players.len() == roster_size as usize,
        duplicated_jobs_by_team,
    }
}

// ── Tests ─────────────────────────────────────────────────────
