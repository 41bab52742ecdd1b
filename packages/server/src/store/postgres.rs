use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::error::StoreError;
use super::records::{
    Challenge, CodeSubmission, FlagSubmission, Hackathon, NewChallenge, NewCodeSubmission,
    NewFlagSubmission, NewHackathon, NewTeam, Team,
};
use super::traits::HackathonStore;
use crate::entity::{challenge, code_submission, flag_submission, hackathon, team};

/// [`HackathonStore`] backed by PostgreSQL through sea-orm.
///
/// Awards run in a transaction holding a `FOR UPDATE` lock on the team row.
#[derive(Clone)]
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn ids(value: &serde_json::Value) -> Result<Vec<Uuid>, StoreError> {
    Ok(serde_json::from_value(value.clone())?)
}

impl TryFrom<team::Model> for Team {
    type Error = StoreError;

    fn try_from(m: team::Model) -> Result<Self, Self::Error> {
        Ok(Team {
            completed_challenges: ids(&m.completed_challenges)?,
            solved_flags: ids(&m.solved_flags)?,
            id: m.id,
            name: m.name,
            hackathon_id: m.hackathon_id,
            total_score: m.total_score,
            flag_submitted: m.flag_submitted,
            buildathon_unlocked: m.buildathon_unlocked,
            github_link: m.github_link,
            created_at: m.created_at,
        })
    }
}

impl From<challenge::Model> for Challenge {
    fn from(m: challenge::Model) -> Self {
        Challenge {
            id: m.id,
            title: m.title,
            description: m.description,
            constraints: m.constraints,
            flag: m.flag,
            input: m.input,
            output: m.output,
            buildathon_task: m.buildathon_task,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

impl TryFrom<hackathon::Model> for Hackathon {
    type Error = StoreError;

    fn try_from(m: hackathon::Model) -> Result<Self, Self::Error> {
        Ok(Hackathon {
            challenge_ids: ids(&m.challenge_ids)?,
            id: m.id,
            title: m.title,
            description: m.description,
            starts_at: m.starts_at,
            ends_at: m.ends_at,
            is_active: m.is_active,
            created_at: m.created_at,
        })
    }
}

impl From<code_submission::Model> for CodeSubmission {
    fn from(m: code_submission::Model) -> Self {
        CodeSubmission {
            id: m.id,
            team_id: m.team_id,
            challenge_id: m.challenge_id,
            code: m.code,
            language: m.language,
            output: m.output,
            status: m.status,
            execution_time: m.execution_time,
            memory: m.memory,
            is_correct: m.is_correct,
            created_at: m.created_at,
        }
    }
}

impl From<flag_submission::Model> for FlagSubmission {
    fn from(m: flag_submission::Model) -> Self {
        FlagSubmission {
            id: m.id,
            team_id: m.team_id,
            challenge_id: m.challenge_id,
            flag: m.flag,
            is_correct: m.is_correct,
            created_at: m.created_at,
        }
    }
}

/// Load a team with a row lock held until `txn` ends.
async fn lock_team(txn: &DatabaseTransaction, team_id: Uuid) -> Result<team::Model, StoreError> {
    team::Entity::find_by_id(team_id)
        .lock(LockType::Update)
        .one(txn)
        .await?
        .ok_or(StoreError::NotFound("Team"))
}

#[async_trait]
impl HackathonStore for PgStore {
    async fn challenge(&self, id: Uuid) -> Result<Option<Challenge>, StoreError> {
        Ok(challenge::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Challenge::from))
    }

    async fn challenges(&self, active_only: bool) -> Result<Vec<Challenge>, StoreError> {
        let mut query = challenge::Entity::find();
        if active_only {
            query = query.filter(challenge::Column::IsActive.eq(true));
        }
        let rows = query
            .order_by_desc(challenge::Column::CreatedAt)
            .order_by_desc(challenge::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Challenge::from).collect())
    }

    async fn challenges_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Challenge>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut rows: HashMap<Uuid, challenge::Model> = challenge::Entity::find()
            .filter(challenge::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        Ok(ids
            .iter()
            .filter_map(|id| rows.remove(id))
            .map(Challenge::from)
            .collect())
    }

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError> {
        team::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Team::try_from)
            .transpose()
    }

    async fn hackathon(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError> {
        hackathon::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Hackathon::try_from)
            .transpose()
    }

    async fn insert_challenge(&self, new: NewChallenge) -> Result<Challenge, StoreError> {
        let model = challenge::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(new.title),
            description: Set(new.description),
            constraints: Set(new.constraints),
            flag: Set(new.flag),
            input: Set(new.input),
            output: Set(new.output),
            buildathon_task: Set(new.buildathon_task),
            is_active: Set(new.is_active),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn insert_hackathon(&self, new: NewHackathon) -> Result<Hackathon, StoreError> {
        let model = hackathon::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(new.title),
            description: Set(new.description),
            starts_at: Set(new.starts_at),
            ends_at: Set(new.ends_at),
            is_active: Set(new.is_active),
            challenge_ids: Set(serde_json::json!([])),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        model.try_into()
    }

    async fn assign_challenge(
        &self,
        hackathon_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<(Hackathon, bool), StoreError> {
        let txn = self.db.begin().await?;
        let current = hackathon::Entity::find_by_id(hackathon_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound("Hackathon"))?;

        let mut assigned = ids(&current.challenge_ids)?;
        if assigned.contains(&challenge_id) {
            txn.commit().await?;
            return Ok((current.try_into()?, false));
        }
        assigned.push(challenge_id);

        let model = hackathon::ActiveModel {
            id: Set(current.id),
            challenge_ids: Set(serde_json::to_value(&assigned)?),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;
        Ok((model.try_into()?, true))
    }

    async fn insert_team(&self, new: NewTeam) -> Result<Team, StoreError> {
        let now = Utc::now();
        let model = team::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(new.name),
            hackathon_id: Set(new.hackathon_id),
            completed_challenges: Set(serde_json::json!([])),
            solved_flags: Set(serde_json::json!([])),
            total_score: Set(0),
            flag_submitted: Set(false),
            buildathon_unlocked: Set(false),
            github_link: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        model.try_into()
    }

    async fn insert_code_submission(
        &self,
        new: NewCodeSubmission,
    ) -> Result<CodeSubmission, StoreError> {
        let model = code_submission::ActiveModel {
            id: Set(Uuid::now_v7()),
            team_id: Set(new.team_id),
            challenge_id: Set(new.challenge_id),
            code: Set(new.code),
            language: Set(new.language),
            output: Set(new.output),
            status: Set(new.status),
            execution_time: Set(new.execution_time),
            memory: Set(new.memory),
            is_correct: Set(new.is_correct),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn insert_flag_submission(
        &self,
        new: NewFlagSubmission,
    ) -> Result<FlagSubmission, StoreError> {
        let model = flag_submission::ActiveModel {
            id: Set(Uuid::now_v7()),
            team_id: Set(new.team_id),
            challenge_id: Set(new.challenge_id),
            flag: Set(new.flag),
            is_correct: Set(new.is_correct),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn code_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<CodeSubmission>, StoreError> {
        let rows = code_submission::Entity::find()
            .filter(code_submission::Column::TeamId.eq(team_id))
            .filter(code_submission::Column::ChallengeId.eq(challenge_id))
            .order_by_desc(code_submission::Column::CreatedAt)
            .order_by_desc(code_submission::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(CodeSubmission::from).collect())
    }

    async fn flag_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<FlagSubmission>, StoreError> {
        let rows = flag_submission::Entity::find()
            .filter(flag_submission::Column::TeamId.eq(team_id))
            .filter(flag_submission::Column::ChallengeId.eq(challenge_id))
            .order_by_desc(flag_submission::Column::CreatedAt)
            .order_by_desc(flag_submission::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(FlagSubmission::from).collect())
    }

    async fn award_challenge(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError> {
        let txn = self.db.begin().await?;
        let current = lock_team(&txn, team_id).await?;

        let mut completed = ids(&current.completed_challenges)?;
        if completed.contains(&challenge_id) {
            txn.commit().await?;
            return Ok(false);
        }
        completed.push(challenge_id);

        team::ActiveModel {
            id: Set(current.id),
            completed_challenges: Set(serde_json::to_value(&completed)?),
            total_score: Set(current.total_score + points),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;
        Ok(true)
    }

    async fn award_flag(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError> {
        let txn = self.db.begin().await?;
        let current = lock_team(&txn, team_id).await?;

        let mut solved = ids(&current.solved_flags)?;
        if solved.contains(&challenge_id) {
            txn.commit().await?;
            return Ok(false);
        }
        solved.push(challenge_id);

        team::ActiveModel {
            id: Set(current.id),
            solved_flags: Set(serde_json::to_value(&solved)?),
            flag_submitted: Set(true),
            buildathon_unlocked: Set(true),
            total_score: Set(current.total_score + points),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;
        Ok(true)
    }

    async fn set_github_link(&self, team_id: Uuid, link: String) -> Result<Team, StoreError> {
        if team::Entity::find_by_id(team_id).one(&self.db).await?.is_none() {
            return Err(StoreError::NotFound("Team"));
        }
        let model = team::ActiveModel {
            id: Set(team_id),
            github_link: Set(Some(link)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await?;
        model.try_into()
    }

    async fn teams_by_hackathon(&self, hackathon_id: Uuid) -> Result<Vec<Team>, StoreError> {
        team::Entity::find()
            .filter(team::Column::HackathonId.eq(hackathon_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(Team::try_from)
            .collect()
    }
}
