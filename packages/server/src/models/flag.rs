use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::FlagOutcome;
use crate::store::FlagSubmission;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitFlagRequest {
    pub team_id: Option<Uuid>,
    /// Compared exactly: case and whitespace matter.
    #[schema(example = "FLAG{s0_much_4dd1t10n}")]
    pub flag: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmitFlagResponse {
    pub submission_id: Uuid,
    pub is_correct: bool,
    /// True when this attempt solved the flag for the first time.
    pub newly_solved: bool,
    /// Present after a correct flag.
    pub buildathon_task: Option<String>,
}

impl From<FlagOutcome> for SubmitFlagResponse {
    fn from(outcome: FlagOutcome) -> Self {
        Self {
            submission_id: outcome.submission.id,
            is_correct: outcome.submission.is_correct,
            newly_solved: outcome.newly_solved,
            buildathon_task: outcome.buildathon_task,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FlagSubmissionResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub flag: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl From<FlagSubmission> for FlagSubmissionResponse {
    fn from(s: FlagSubmission) -> Self {
        Self {
            id: s.id,
            team_id: s.team_id,
            challenge_id: s.challenge_id,
            flag: s.flag,
            is_correct: s.is_correct,
            created_at: s.created_at,
        }
    }
}
