use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::challenge::ChallengeResponse;
use crate::models::hackathon::*;
use crate::services::{assign_challenge as assign, hackathon_challenges};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Hackathons",
    operation_id = "createHackathon",
    summary = "Create a hackathon",
    request_body = CreateHackathonRequest,
    responses(
        (status = 201, description = "Hackathon created", body = HackathonResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_hackathon(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateHackathonRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_hackathon(&payload)?;
    let hackathon = state.store.insert_hackathon(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(HackathonResponse::from(hackathon))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Hackathons",
    operation_id = "getHackathon",
    summary = "Get a hackathon",
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Hackathon", body = HackathonResponse),
        (status = 404, description = "Hackathon not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HackathonResponse>, AppError> {
    let hackathon = state
        .store
        .hackathon(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hackathon not found".into()))?;
    Ok(Json(hackathon.into()))
}

#[utoipa::path(
    post,
    path = "/{id}/challenges",
    tag = "Hackathons",
    operation_id = "assignChallenge",
    summary = "Assign a challenge to a hackathon",
    description = "Appends the challenge to the hackathon's set. Assigning it again changes nothing.",
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    request_body = AssignChallengeRequest,
    responses(
        (status = 200, description = "Updated hackathon", body = HackathonResponse),
        (status = 404, description = "Hackathon or challenge not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(challenge_id = %payload.challenge_id))]
pub async fn assign_challenge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<AssignChallengeRequest>,
) -> Result<Json<HackathonResponse>, AppError> {
    let hackathon = assign(state.store.as_ref(), id, payload.challenge_id).await?;
    Ok(Json(hackathon.into()))
}

#[utoipa::path(
    get,
    path = "/{id}/challenges",
    tag = "Hackathons",
    operation_id = "listHackathonChallenges",
    summary = "List a hackathon's challenges",
    description = "Challenges in assignment order. Flags are never included.",
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Challenges", body = Vec<ChallengeResponse>),
        (status = 404, description = "Hackathon not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_hackathon_challenges(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ChallengeResponse>>, AppError> {
    let challenges = hackathon_challenges(state.store.as_ref(), id).await?;
    Ok(Json(challenges.into_iter().map(Into::into).collect()))
}
