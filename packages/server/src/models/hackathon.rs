use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{Hackathon, NewHackathon};

use super::shared::validate_name;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateHackathonRequest {
    #[schema(example = "Spring Jam 2026")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

pub fn validate_create_hackathon(req: &CreateHackathonRequest) -> Result<(), AppError> {
    validate_name(&req.title, "Title")?;
    match (req.starts_at, req.ends_at) {
        (Some(start), Some(end)) if end < start => Err(AppError::Validation(
            "Hackathon must not end before it starts".into(),
        )),
        _ => Ok(()),
    }
}

impl From<CreateHackathonRequest> for NewHackathon {
    fn from(req: CreateHackathonRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            description: req.description,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
            is_active: req.is_active,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HackathonResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub challenge_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Hackathon> for HackathonResponse {
    fn from(h: Hackathon) -> Self {
        Self {
            id: h.id,
            title: h.title,
            description: h.description,
            starts_at: h.starts_at,
            ends_at: h.ends_at,
            is_active: h.is_active,
            challenge_ids: h.challenge_ids,
            created_at: h.created_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct AssignChallengeRequest {
    pub challenge_id: Uuid,
}
