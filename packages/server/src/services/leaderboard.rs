use std::cmp::Reverse;

use uuid::Uuid;

use crate::error::AppError;
use crate::store::{HackathonStore, Team};

use super::hackathon::require_hackathon;

/// A team with its 1-based leaderboard position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    pub rank: usize,
    pub team: Team,
}

/// Order teams by score (high first), then completed challenges (more
/// first), then registration time (earlier first).
///
/// Ranks are sequential; tied teams still get distinct ranks.
pub fn rank_teams(mut teams: Vec<Team>) -> Vec<RankedTeam> {
    teams.sort_by_key(|t| {
        (
            Reverse(t.total_score),
            Reverse(t.completed_challenges.len()),
            t.created_at,
        )
    });
    teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| RankedTeam { rank: i + 1, team })
        .collect()
}

/// Ranked teams of an existing hackathon.
pub async fn leaderboard(
    store: &dyn HackathonStore,
    hackathon_id: Uuid,
) -> Result<Vec<RankedTeam>, AppError> {
    require_hackathon(store, hackathon_id).await?;
    Ok(rank_teams(store.teams_by_hackathon(hackathon_id).await?))
}
