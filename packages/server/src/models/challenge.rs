use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{Challenge, NewChallenge};

use super::shared::validate_name;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateChallengeRequest {
    #[schema(example = "Add two numbers")]
    pub title: String,
    /// Problem statement in Markdown.
    #[serde(default)]
    #[schema(example = "Read two integers and print their sum.")]
    pub description: String,
    #[schema(example = "-10^9 <= a, b <= 10^9")]
    pub constraints: Option<String>,
    /// Secret flag. Never returned by the API.
    #[schema(example = "FLAG{s0_much_4dd1t10n}")]
    pub flag: String,
    /// Fed to stdin on every run.
    #[schema(example = "1 2\n")]
    pub input: Option<String>,
    /// Expected stdout of a correct solution.
    #[schema(example = "3\n")]
    pub output: Option<String>,
    /// Follow-on task revealed after the flag is solved.
    pub buildathon_task: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ChallengeListQuery {
    /// Only list active challenges.
    #[serde(default)]
    pub active: bool,
}

/// Public view of a challenge.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ChallengeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub constraints: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub has_buildathon_task: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Challenge> for ChallengeResponse {
    fn from(c: Challenge) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            constraints: c.constraints,
            input: c.input,
            output: c.output,
            has_buildathon_task: c.buildathon_task.is_some(),
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}

pub fn validate_create_challenge(req: &CreateChallengeRequest) -> Result<(), AppError> {
    validate_name(&req.title, "Title")?;
    if req.flag.trim().is_empty() {
        return Err(AppError::Validation("Flag must not be empty".into()));
    }
    Ok(())
}

impl From<CreateChallengeRequest> for NewChallenge {
    fn from(req: CreateChallengeRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            description: req.description,
            constraints: req.constraints,
            flag: req.flag,
            input: req.input,
            output: req.output,
            buildathon_task: req.buildathon_task,
            is_active: req.is_active,
        }
    }
}
