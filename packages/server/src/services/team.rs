use tracing::{info, instrument};
use url::Url;
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{HackathonStore, Team};

/// A team's standing, optionally scoped to one challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamProgress {
    pub team: Team,
    /// Present when asked about a specific challenge.
    pub has_solved_challenge: Option<bool>,
    pub has_solved_flag: Option<bool>,
}

pub async fn team_progress(
    store: &dyn HackathonStore,
    team_id: Uuid,
    challenge_id: Option<Uuid>,
) -> Result<TeamProgress, AppError> {
    let team = store
        .team(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;
    Ok(TeamProgress {
        has_solved_challenge: challenge_id.map(|id| team.has_completed(id)),
        has_solved_flag: challenge_id.map(|id| team.has_solved_flag(id)),
        team,
    })
}

/// Store the buildathon project link. Only allowed once a flag is solved.
#[instrument(skip(store))]
pub async fn submit_buildathon(
    store: &dyn HackathonStore,
    team_id: Uuid,
    github_link: &str,
) -> Result<Team, AppError> {
    let link = validate_project_link(github_link)?;
    let team = store
        .team(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;
    if !team.buildathon_unlocked {
        return Err(AppError::BuildathonLocked);
    }

    let team = store.set_github_link(team_id, link.to_string()).await?;
    info!(%team_id, "Buildathon project submitted");
    Ok(team)
}

fn validate_project_link(link: &str) -> Result<&str, AppError> {
    let link = link.trim();
    let invalid = || AppError::Validation("Project link must be an http(s) URL".into());
    let url = Url::parse(link).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    if link.contains(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(link)
}
