use common::{Language, SubmissionRequest, format_result, validate_output};
use judge::ExecutionPoller;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{CodeSubmission, HackathonStore, NewCodeSubmission};

/// A "run code" action.
#[derive(Debug, Clone)]
pub struct RunCode {
    pub team_id: Option<Uuid>,
    pub challenge_id: Uuid,
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub submission: CodeSubmission,
    /// True only for the run that first completed the challenge for the team.
    pub newly_completed: bool,
}

/// Runs code against a challenge, records the result and scores the first
/// correct run.
pub struct SubmissionRecorder<'a> {
    store: &'a dyn HackathonStore,
    poller: &'a ExecutionPoller,
    code_reward: i64,
}

impl<'a> SubmissionRecorder<'a> {
    pub fn new(
        store: &'a dyn HackathonStore,
        poller: &'a ExecutionPoller,
        code_reward: i64,
    ) -> Self {
        Self {
            store,
            poller,
            code_reward,
        }
    }

    /// Nothing is written unless the judge produced a terminal result. A
    /// failed progress update is logged and does not fail the run.
    #[instrument(
        skip_all,
        fields(challenge_id = %run.challenge_id, team_id = ?run.team_id, language = %run.language)
    )]
    pub async fn run(
        &self,
        run: RunCode,
        cancel: &CancellationToken,
    ) -> Result<RunOutcome, AppError> {
        if run.code.trim().is_empty() {
            return Err(AppError::Validation("Source code must not be empty".into()));
        }
        let team_id = run
            .team_id
            .ok_or_else(|| AppError::Validation("Select a team before running code".into()))?;
        let language: Language = run.language.parse()?;

        let challenge = self
            .store
            .challenge(run.challenge_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".into()))?;
        if self.store.team(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".into()));
        }

        let request = SubmissionRequest::new(run.code.clone(), language)
            .with_stdin(challenge.input.clone())
            .with_expected_output(challenge.output.clone());
        let result = self.poller.execute(&request, cancel).await?;

        let formatted = format_result(&result);
        let is_correct = validate_output(&result, challenge.output.as_deref());

        let submission = self
            .store
            .insert_code_submission(NewCodeSubmission {
                team_id,
                challenge_id: challenge.id,
                code: run.code,
                language: language.as_str().to_string(),
                output: formatted.output,
                status: formatted.status,
                execution_time: result.time_seconds,
                memory: result.memory_kb,
                is_correct,
            })
            .await?;
        info!(
            submission_id = %submission.id,
            status = %submission.status,
            is_correct,
            "Code submission recorded"
        );

        let newly_completed = is_correct && self.award(team_id, challenge.id).await;
        Ok(RunOutcome {
            submission,
            newly_completed,
        })
    }

    async fn award(&self, team_id: Uuid, challenge_id: Uuid) -> bool {
        match self
            .store
            .award_challenge(team_id, challenge_id, self.code_reward)
            .await
        {
            Ok(awarded) => {
                if awarded {
                    info!(%team_id, %challenge_id, points = self.code_reward, "Challenge completed");
                }
                awarded
            }
            Err(e) => {
                error!(
                    %team_id,
                    %challenge_id,
                    error = %e,
                    "Failed to update team progress"
                );
                false
            }
        }
    }
}
