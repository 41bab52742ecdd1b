use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::RunOutcome;
use crate::store::CodeSubmission;

/// Request body for running code against a challenge.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RunCodeRequest {
    /// Team the run counts for.
    pub team_id: Option<Uuid>,
    #[schema(example = "a, b = map(int, input().split())\nprint(a + b)")]
    pub code: String,
    /// Language key from `GET /languages`.
    #[schema(example = "python")]
    pub language: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CodeSubmissionResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub code: String,
    #[schema(example = "python")]
    pub language: String,
    /// stdout, else stderr, else compiler output, else "No output".
    #[schema(example = "3\n")]
    pub output: String,
    #[schema(example = "Accepted")]
    pub status: String,
    /// Seconds.
    #[schema(example = 0.021)]
    pub execution_time: Option<f64>,
    /// Kilobytes.
    #[schema(example = 3420)]
    pub memory: Option<i64>,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CodeSubmission> for CodeSubmissionResponse {
    fn from(s: CodeSubmission) -> Self {
        Self {
            id: s.id,
            team_id: s.team_id,
            challenge_id: s.challenge_id,
            code: s.code,
            language: s.language,
            output: s.output,
            status: s.status,
            execution_time: s.execution_time,
            memory: s.memory,
            is_correct: s.is_correct,
            created_at: s.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RunCodeResponse {
    pub submission: CodeSubmissionResponse,
    /// True when this run completed the challenge for the first time.
    pub challenge_completed: bool,
}

impl From<RunOutcome> for RunCodeResponse {
    fn from(outcome: RunOutcome) -> Self {
        Self {
            submission: outcome.submission.into(),
            challenge_completed: outcome.newly_completed,
        }
    }
}
