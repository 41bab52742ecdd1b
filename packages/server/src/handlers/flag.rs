use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::flag::*;
use crate::models::shared::TeamQuery;
use crate::services::{FlagAttempt, FlagVerifier};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/{id}/flags",
    tag = "Flags",
    operation_id = "submitFlag",
    summary = "Submit a flag",
    description = "Compares the flag byte-for-byte with the challenge secret and records the attempt. The first correct flag unlocks the buildathon and awards points once.",
    params(("id" = Uuid, Path, description = "Challenge ID")),
    request_body = SubmitFlagRequest,
    responses(
        (status = 201, description = "Attempt recorded", body = SubmitFlagResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Challenge or team not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(team_id = ?payload.team_id))]
pub async fn submit_flag(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<SubmitFlagRequest>,
) -> Result<impl IntoResponse, AppError> {
    let verifier = FlagVerifier::new(state.store.as_ref(), state.scoring.flag_reward);
    let outcome = verifier
        .submit(FlagAttempt {
            team_id: payload.team_id,
            challenge_id: id,
            flag: payload.flag,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SubmitFlagResponse::from(outcome))))
}

#[utoipa::path(
    get,
    path = "/{id}/flags",
    tag = "Flags",
    operation_id = "listFlagAttempts",
    summary = "List a team's flag attempts on a challenge",
    description = "Returns every flag attempt of the team on the challenge, newest first.",
    params(("id" = Uuid, Path, description = "Challenge ID"), TeamQuery),
    responses(
        (status = 200, description = "Flag attempt history", body = Vec<FlagSubmissionResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_flag_attempts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TeamQuery>,
) -> Result<Json<Vec<FlagSubmissionResponse>>, AppError> {
    let attempts = state.store.flag_submissions(query.team_id, id).await?;
    Ok(Json(attempts.into_iter().map(Into::into).collect()))
}
