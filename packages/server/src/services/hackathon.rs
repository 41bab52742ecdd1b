use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{Challenge, Hackathon, HackathonStore, NewTeam, Team};

pub(crate) async fn require_hackathon(
    store: &dyn HackathonStore,
    id: Uuid,
) -> Result<Hackathon, AppError> {
    store
        .hackathon(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hackathon not found".into()))
}

/// Register a team in an existing hackathon.
#[instrument(skip(store, new), fields(name = %new.name, hackathon_id = %new.hackathon_id))]
pub async fn register_team(store: &dyn HackathonStore, new: NewTeam) -> Result<Team, AppError> {
    require_hackathon(store, new.hackathon_id).await?;
    let team = store.insert_team(new).await?;
    info!(team_id = %team.id, "Team registered");
    Ok(team)
}

/// Attach a challenge to a hackathon. Assigning twice is a no-op.
#[instrument(skip(store))]
pub async fn assign_challenge(
    store: &dyn HackathonStore,
    hackathon_id: Uuid,
    challenge_id: Uuid,
) -> Result<Hackathon, AppError> {
    if store.challenge(challenge_id).await?.is_none() {
        return Err(AppError::NotFound("Challenge not found".into()));
    }
    let (hackathon, changed) = store.assign_challenge(hackathon_id, challenge_id).await?;
    if changed {
        info!("Challenge assigned");
    }
    Ok(hackathon)
}

/// The hackathon's challenges in assignment order.
pub async fn hackathon_challenges(
    store: &dyn HackathonStore,
    hackathon_id: Uuid,
) -> Result<Vec<Challenge>, AppError> {
    let hackathon = require_hackathon(store, hackathon_id).await?;
    Ok(store.challenges_by_ids(hackathon.challenge_ids).await?)
}
