use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::models::leaderboard::*;
use crate::services::leaderboard;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{id}/leaderboard",
    tag = "Leaderboard",
    operation_id = "getLeaderboard",
    summary = "Get a hackathon leaderboard",
    description = "Teams ordered by score, then completed challenges, then registration time.",
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardResponse),
        (status = 404, description = "Hackathon not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage failure (PERSISTENCE_FAILURE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let ranked = leaderboard(state.store.as_ref(), id).await?;
    Ok(Json(LeaderboardResponse {
        hackathon_id: id,
        data: ranked.into_iter().map(Into::into).collect(),
    }))
}
