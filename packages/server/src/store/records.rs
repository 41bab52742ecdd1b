use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An algorithmic challenge. `flag` is secret and never leaves the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Input bounds and other limits shown to participants.
    pub constraints: Option<String>,
    pub flag: String,
    /// Fed to the program's stdin on every run.
    pub input: Option<String>,
    /// Expected stdout for a correct solution.
    pub output: Option<String>,
    /// Follow-on task revealed once the flag is solved.
    pub buildathon_task: Option<String>,
    /// Inactive challenges are hidden from the active listing.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub constraints: Option<String>,
    pub flag: String,
    pub input: Option<String>,
    pub output: Option<String>,
    pub buildathon_task: Option<String>,
    pub is_active: bool,
}

/// An event teams register for. Challenges are attached by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    /// Assignment order. No duplicates.
    pub challenge_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewHackathon {
    pub title: String,
    pub description: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub hackathon_id: Uuid,
    /// Challenges with at least one accepted code run. No duplicates.
    pub completed_challenges: Vec<Uuid>,
    /// Challenges whose flag the team has found. No duplicates.
    pub solved_flags: Vec<Uuid>,
    /// Only ever increases.
    pub total_score: i64,
    pub flag_submitted: bool,
    /// Implies `flag_submitted`.
    pub buildathon_unlocked: bool,
    /// Buildathon project link.
    pub github_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn has_completed(&self, challenge_id: Uuid) -> bool {
        self.completed_challenges.contains(&challenge_id)
    }

    pub fn has_solved_flag(&self, challenge_id: Uuid) -> bool {
        self.solved_flags.contains(&challenge_id)
    }
}

#[derive(Clone, Debug)]
pub struct NewTeam {
    pub name: String,
    pub hackathon_id: Uuid,
}

/// One code run, written once with its final fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeSubmission {
    pub id: Uuid,
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub code: String,
    pub language: String,
    pub output: String,
    pub status: String,
    /// Seconds.
    pub execution_time: Option<f64>,
    /// Kilobytes.
    pub memory: Option<i64>,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewCodeSubmission {
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub code: String,
    pub language: String,
    pub output: String,
    pub status: String,
    pub execution_time: Option<f64>,
    pub memory: Option<i64>,
    pub is_correct: bool,
}

/// One flag attempt. Immutable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlagSubmission {
    pub id: Uuid,
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub flag: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewFlagSubmission {
    pub team_id: Uuid,
    pub challenge_id: Uuid,
    pub flag: String,
    pub is_correct: bool,
}
