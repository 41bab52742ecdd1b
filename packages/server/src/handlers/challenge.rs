use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::challenge::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Challenges",
    operation_id = "createChallenge",
    summary = "Create a challenge",
    description = "Creates a challenge with its secret flag and optional sample input/output. The flag is never returned.",
    request_body = CreateChallengeRequest,
    responses(
        (status = 201, description = "Challenge created", body = ChallengeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_challenge(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateChallengeRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_challenge(&payload)?;
    let challenge = state.store.insert_challenge(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ChallengeResponse::from(challenge))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Challenges",
    operation_id = "listChallenges",
    summary = "List challenges",
    description = "Newest first. With `active=true`, inactive challenges are left out.",
    params(ChallengeListQuery),
    responses(
        (status = 200, description = "Challenges", body = Vec<ChallengeResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_challenges(
    State(state): State<AppState>,
    Query(query): Query<ChallengeListQuery>,
) -> Result<Json<Vec<ChallengeResponse>>, AppError> {
    let challenges = state.store.challenges(query.active).await?;
    Ok(Json(challenges.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Challenges",
    operation_id = "getChallenge",
    summary = "Get a challenge",
    params(("id" = Uuid, Path, description = "Challenge ID")),
    responses(
        (status = 200, description = "Challenge", body = ChallengeResponse),
        (status = 404, description = "Challenge not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_challenge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let challenge = state
        .store
        .challenge(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Challenge not found".into()))?;
    Ok(Json(challenge.into()))
}
