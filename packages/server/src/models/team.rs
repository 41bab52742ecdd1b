use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::services::TeamProgress;
use crate::store::{NewTeam, Team};

use super::shared::validate_name;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateTeamRequest {
    #[schema(example = "Null Pointers")]
    pub name: String,
    pub hackathon_id: Uuid,
}

pub fn validate_create_team(req: &CreateTeamRequest) -> Result<(), AppError> {
    validate_name(&req.name, "Name")
}

impl From<CreateTeamRequest> for NewTeam {
    fn from(req: CreateTeamRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            hackathon_id: req.hackathon_id,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub hackathon_id: Uuid,
    pub completed_challenges: Vec<Uuid>,
    pub solved_flags: Vec<Uuid>,
    #[schema(example = 30)]
    pub total_score: i64,
    pub flag_submitted: bool,
    pub buildathon_unlocked: bool,
    #[schema(example = "https://github.com/acme/calculator")]
    pub github_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            name: t.name,
            hackathon_id: t.hackathon_id,
            completed_challenges: t.completed_challenges,
            solved_flags: t.solved_flags,
            total_score: t.total_score,
            flag_submitted: t.flag_submitted,
            buildathon_unlocked: t.buildathon_unlocked,
            github_link: t.github_link,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ProgressQuery {
    /// Challenge to report solved state for.
    pub challenge_id: Option<Uuid>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamProgressResponse {
    pub team: TeamResponse,
    /// Present when `challenge_id` was given.
    pub has_solved_challenge: Option<bool>,
    /// Present when `challenge_id` was given.
    pub has_solved_flag: Option<bool>,
}

impl From<TeamProgress> for TeamProgressResponse {
    fn from(p: TeamProgress) -> Self {
        Self {
            team: p.team.into(),
            has_solved_challenge: p.has_solved_challenge,
            has_solved_flag: p.has_solved_flag,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct BuildathonRequest {
    #[schema(example = "https://github.com/acme/calculator")]
    pub github_link: String,
}
