use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{FlagSubmission, HackathonStore, NewFlagSubmission};

#[derive(Debug, Clone)]
pub struct FlagAttempt {
    pub team_id: Option<Uuid>,
    pub challenge_id: Uuid,
    pub flag: String,
}

#[derive(Debug, Clone)]
pub struct FlagOutcome {
    pub submission: FlagSubmission,
    /// True only for the attempt that first solved the flag for the team.
    pub newly_solved: bool,
    /// Revealed once the flag is correct.
    pub buildathon_task: Option<String>,
}

/// Checks submitted flags against the challenge secret.
pub struct FlagVerifier<'a> {
    store: &'a dyn HackathonStore,
    flag_reward: i64,
}

impl<'a> FlagVerifier<'a> {
    pub fn new(store: &'a dyn HackathonStore, flag_reward: i64) -> Self {
        Self { store, flag_reward }
    }

    /// Every attempt is recorded. The comparison is byte-for-byte.
    #[instrument(skip_all, fields(challenge_id = %attempt.challenge_id, team_id = ?attempt.team_id))]
    pub async fn submit(&self, attempt: FlagAttempt) -> Result<FlagOutcome, AppError> {
        let team_id = attempt
            .team_id
            .ok_or_else(|| AppError::Validation("Select a team before submitting a flag".into()))?;
        if attempt.flag.trim().is_empty() {
            return Err(AppError::Validation("Flag must not be empty".into()));
        }

        let challenge = self
            .store
            .challenge(attempt.challenge_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".into()))?;
        if self.store.team(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".into()));
        }

        let is_correct = attempt.flag == challenge.flag;
        let submission = self
            .store
            .insert_flag_submission(NewFlagSubmission {
                team_id,
                challenge_id: challenge.id,
                flag: attempt.flag,
                is_correct,
            })
            .await?;

        if !is_correct {
            info!(submission_id = %submission.id, "Incorrect flag");
            return Ok(FlagOutcome {
                submission,
                newly_solved: false,
                buildathon_task: None,
            });
        }

        let newly_solved = self
            .store
            .award_flag(team_id, challenge.id, self.flag_reward)
            .await?;
        if newly_solved {
            info!(%team_id, challenge_id = %challenge.id, points = self.flag_reward, "Flag solved, buildathon unlocked");
        }

        Ok(FlagOutcome {
            submission,
            newly_solved,
            buildathon_task: challenge.buildathon_task,
        })
    }
}
