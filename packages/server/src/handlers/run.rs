use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::run::*;
use crate::models::shared::TeamQuery;
use crate::services::{RunCode, SubmissionRecorder};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/{id}/runs",
    tag = "Runs",
    operation_id = "runCode",
    summary = "Run code against a challenge",
    description = "Sends the code to the judge with the challenge input, waits for a final status, and records the run. The first run whose stdout matches the expected output completes the challenge for the team and awards points once.",
    params(("id" = Uuid, Path, description = "Challenge ID")),
    request_body = RunCodeRequest,
    responses(
        (status = 201, description = "Run finished and recorded", body = RunCodeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, UNSUPPORTED_LANGUAGE)", body = ErrorBody),
        (status = 404, description = "Challenge or team not found (NOT_FOUND)", body = ErrorBody),
        (status = 502, description = "Judge unreachable or failing (JUDGE_UNAVAILABLE)", body = ErrorBody),
        (status = 503, description = "Server shutting down (SERVICE_UNAVAILABLE)", body = ErrorBody),
        (status = 504, description = "Judge did not finish in time (EXECUTION_TIMEOUT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(team_id = ?payload.team_id, language = %payload.language))]
pub async fn run_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<RunCodeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let recorder = SubmissionRecorder::new(
        state.store.as_ref(),
        &state.poller,
        state.scoring.code_reward,
    );
    let outcome = recorder
        .run(
            RunCode {
                team_id: payload.team_id,
                challenge_id: id,
                code: payload.code,
                language: payload.language,
            },
            &state.shutdown,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(RunCodeResponse::from(outcome))))
}

#[utoipa::path(
    get,
    path = "/{id}/runs",
    tag = "Runs",
    operation_id = "listRuns",
    summary = "List a team's runs on a challenge",
    description = "Returns every recorded run of the team on the challenge, newest first.",
    params(("id" = Uuid, Path, description = "Challenge ID"), TeamQuery),
    responses(
        (status = 200, description = "Run history", body = Vec<CodeSubmissionResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_runs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TeamQuery>,
) -> Result<Json<Vec<CodeSubmissionResponse>>, AppError> {
    let runs = state.store.code_submissions(query.team_id, id).await?;
    Ok(Json(runs.into_iter().map(Into::into).collect()))
}
