use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::StoreError;
use super::records::{
    Challenge, CodeSubmission, FlagSubmission, Hackathon, NewChallenge, NewCodeSubmission,
    NewFlagSubmission, NewHackathon, NewTeam, Team,
};
use super::traits::HackathonStore;

#[derive(Default)]
struct Tables {
    challenges: HashMap<Uuid, Challenge>,
    hackathons: HashMap<Uuid, Hackathon>,
    teams: HashMap<Uuid, Team>,
    /// Insertion order.
    code_submissions: Vec<CodeSubmission>,
    /// Insertion order.
    flag_submissions: Vec<FlagSubmission>,
}

/// Process-local [`HackathonStore`].
///
/// A single lock guards every table, so each award is one critical section.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Matching rows, newest first. Rows sharing a timestamp keep reverse
/// insertion order.
fn newest_first<T: Clone>(
    rows: &[T],
    matches: impl Fn(&T) -> bool,
    created_at: impl Fn(&T) -> chrono::DateTime<Utc>,
) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().filter(|r| matches(*r)).cloned().collect();
    out.sort_by_key(|r| std::cmp::Reverse(created_at(r)));
    out
}

#[async_trait]
impl HackathonStore for MemoryStore {
    async fn challenge(&self, id: Uuid) -> Result<Option<Challenge>, StoreError> {
        Ok(self.tables.read().await.challenges.get(&id).cloned())
    }

    async fn challenges(&self, active_only: bool) -> Result<Vec<Challenge>, StoreError> {
        let tables = self.tables.read().await;
        let mut out: Vec<Challenge> = tables
            .challenges
            .values()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        out.sort_by_key(|c| std::cmp::Reverse((c.created_at, c.id)));
        Ok(out)
    }

    async fn challenges_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Challenge>, StoreError> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.challenges.get(id).cloned())
            .collect())
    }

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError> {
        Ok(self.tables.read().await.teams.get(&id).cloned())
    }

    async fn hackathon(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError> {
        Ok(self.tables.read().await.hackathons.get(&id).cloned())
    }

    async fn insert_challenge(&self, new: NewChallenge) -> Result<Challenge, StoreError> {
        let challenge = Challenge {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            constraints: new.constraints,
            flag: new.flag,
            input: new.input,
            output: new.output,
            buildathon_task: new.buildathon_task,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .challenges
            .insert(challenge.id, challenge.clone());
        Ok(challenge)
    }

    async fn insert_hackathon(&self, new: NewHackathon) -> Result<Hackathon, StoreError> {
        let hackathon = Hackathon {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            starts_at: new.starts_at,
            ends_at: new.ends_at,
            is_active: new.is_active,
            challenge_ids: Vec::new(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .hackathons
            .insert(hackathon.id, hackathon.clone());
        Ok(hackathon)
    }

    async fn assign_challenge(
        &self,
        hackathon_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<(Hackathon, bool), StoreError> {
        let mut tables = self.tables.write().await;
        let hackathon = tables
            .hackathons
            .get_mut(&hackathon_id)
            .ok_or(StoreError::NotFound("Hackathon"))?;
        if hackathon.challenge_ids.contains(&challenge_id) {
            return Ok((hackathon.clone(), false));
        }
        hackathon.challenge_ids.push(challenge_id);
        Ok((hackathon.clone(), true))
    }

    async fn insert_team(&self, new: NewTeam) -> Result<Team, StoreError> {
        let team = Team {
            id: Uuid::now_v7(),
            name: new.name,
            hackathon_id: new.hackathon_id,
            completed_challenges: Vec::new(),
            solved_flags: Vec::new(),
            total_score: 0,
            flag_submitted: false,
            buildathon_unlocked: false,
            github_link: None,
            created_at: Utc::now(),
        };
        self.tables.write().await.teams.insert(team.id, team.clone());
        Ok(team)
    }

    async fn insert_code_submission(
        &self,
        new: NewCodeSubmission,
    ) -> Result<CodeSubmission, StoreError> {
        let row = CodeSubmission {
            id: Uuid::now_v7(),
            team_id: new.team_id,
            challenge_id: new.challenge_id,
            code: new.code,
            language: new.language,
            output: new.output,
            status: new.status,
            execution_time: new.execution_time,
            memory: new.memory,
            is_correct: new.is_correct,
            created_at: Utc::now(),
        };
        self.tables.write().await.code_submissions.push(row.clone());
        Ok(row)
    }

    async fn insert_flag_submission(
        &self,
        new: NewFlagSubmission,
    ) -> Result<FlagSubmission, StoreError> {
        let row = FlagSubmission {
            id: Uuid::now_v7(),
            team_id: new.team_id,
            challenge_id: new.challenge_id,
            flag: new.flag,
            is_correct: new.is_correct,
            created_at: Utc::now(),
        };
        self.tables.write().await.flag_submissions.push(row.clone());
        Ok(row)
    }

    async fn code_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<CodeSubmission>, StoreError> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            &tables.code_submissions,
            |s| s.team_id == team_id && s.challenge_id == challenge_id,
            |s| s.created_at,
        ))
    }

    async fn flag_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<FlagSubmission>, StoreError> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            &tables.flag_submissions,
            |s| s.team_id == team_id && s.challenge_id == challenge_id,
            |s| s.created_at,
        ))
    }

    async fn award_challenge(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or(StoreError::NotFound("Team"))?;
        if team.has_completed(challenge_id) {
            return Ok(false);
        }
        team.completed_challenges.push(challenge_id);
        team.total_score += points;
        Ok(true)
    }

    async fn award_flag(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or(StoreError::NotFound("Team"))?;
        if team.has_solved_flag(challenge_id) {
            return Ok(false);
        }
        team.solved_flags.push(challenge_id);
        team.flag_submitted = true;
        team.buildathon_unlocked = true;
        team.total_score += points;
        Ok(true)
    }

    async fn set_github_link(&self, team_id: Uuid, link: String) -> Result<Team, StoreError> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or(StoreError::NotFound("Team"))?;
        team.github_link = Some(link);
        Ok(team.clone())
    }

    async fn teams_by_hackathon(&self, hackathon_id: Uuid) -> Result<Vec<Team>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .values()
            .filter(|t| t.hackathon_id == hackathon_id)
            .cloned()
            .collect())
    }
}
