use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::team::*;
use crate::services::{register_team, submit_buildathon, team_progress};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Teams",
    operation_id = "createTeam",
    summary = "Create a team",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Hackathon not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_team(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTeamRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_team(&payload)?;
    let team = register_team(state.store.as_ref(), payload.into()).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))))
}

#[utoipa::path(
    get,
    path = "/{id}/progress",
    tag = "Teams",
    operation_id = "getTeamProgress",
    summary = "Get a team's progress",
    description = "Returns the team's score and unlock state. With `challenge_id`, also reports whether the team has solved that challenge's code and flag.",
    params(("id" = Uuid, Path, description = "Team ID"), ProgressQuery),
    responses(
        (status = 200, description = "Team progress", body = TeamProgressResponse),
        (status = 404, description = "Team not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<TeamProgressResponse>, AppError> {
    let progress = team_progress(state.store.as_ref(), id, query.challenge_id).await?;
    Ok(Json(progress.into()))
}

#[utoipa::path(
    put,
    path = "/{id}/buildathon",
    tag = "Teams",
    operation_id = "submitBuildathon",
    summary = "Submit the buildathon project link",
    params(("id" = Uuid, Path, description = "Team ID")),
    request_body = BuildathonRequest,
    responses(
        (status = 200, description = "Link stored", body = TeamResponse),
        (status = 400, description = "Not an http(s) URL (VALIDATION_ERROR)", body = ErrorBody),
        (status = 403, description = "No flag solved yet (BUILDATHON_LOCKED)", body = ErrorBody),
        (status = 404, description = "Team not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn put_buildathon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<BuildathonRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    let team = submit_buildathon(state.store.as_ref(), id, &payload.github_link).await?;
    Ok(Json(team.into()))
}
