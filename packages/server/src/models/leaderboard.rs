use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::services::RankedTeam;

#[derive(Serialize, utoipa::ToSchema)]
pub struct LeaderboardEntry {
    /// 1-based position.
    #[schema(example = 1)]
    pub rank: usize,
    pub team_id: Uuid,
    pub name: String,
    pub total_score: i64,
    /// Number of completed challenges.
    pub completed_challenges: usize,
    pub buildathon_unlocked: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RankedTeam> for LeaderboardEntry {
    fn from(r: RankedTeam) -> Self {
        Self {
            rank: r.rank,
            team_id: r.team.id,
            name: r.team.name,
            total_score: r.team.total_score,
            completed_challenges: r.team.completed_challenges.len(),
            buildathon_unlocked: r.team.buildathon_unlocked,
            created_at: r.team.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LeaderboardResponse {
    pub hackathon_id: Uuid,
    pub data: Vec<LeaderboardEntry>,
}
