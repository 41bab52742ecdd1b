use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/languages", language_routes())
        .nest("/challenges", challenge_routes())
        .nest("/teams", team_routes())
        .nest("/hackathons", hackathon_routes())
}

fn language_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::language::list_languages))
}

fn challenge_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::challenge::create_challenge,
            handlers::challenge::list_challenges
        ))
        .routes(routes!(handlers::challenge::get_challenge))
        .routes(routes!(handlers::run::run_code, handlers::run::list_runs))
        .routes(routes!(
            handlers::flag::submit_flag,
            handlers::flag::list_flag_attempts
        ))
}

fn team_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::team::create_team))
        .routes(routes!(handlers::team::get_progress))
        .routes(routes!(handlers::team::put_buildathon))
}

fn hackathon_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::hackathon::create_hackathon))
        .routes(routes!(handlers::hackathon::get_hackathon))
        .routes(routes!(
            handlers::hackathon::assign_challenge,
            handlers::hackathon::list_hackathon_challenges
        ))
        .routes(routes!(handlers::leaderboard::get_leaderboard))
}
