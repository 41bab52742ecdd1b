use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn team_name_is_required() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::TEAMS,
            &json!({"name": "   ", "hackathon_id": Uuid::now_v7()}),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_team_progress_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::progress(Uuid::now_v7())).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn buildathon_link_requires_solved_flag() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let team = app.create_team("Builders", app.create_hackathon().await).await;
    let body = json!({"github_link": "https://github.com/builders/calculator"});

    let locked = app.put(&routes::buildathon(team), &body).await;
    assert_eq!(locked.status, 403);
    assert_eq!(locked.body["code"], "BUILDATHON_LOCKED");

    app.submit_flag(challenge, team, "FLAG{sum}").await;

    let bad = app
        .put(
            &routes::buildathon(team),
            &json!({"github_link": "not a url"}),
        )
        .await;
    assert_eq!(bad.status, 400);

    let res = app.put(&routes::buildathon(team), &body).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(
        res.body["github_link"],
        "https://github.com/builders/calculator"
    );
}

#[tokio::test]
async fn leaderboard_ranks_teams_of_one_hackathon() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let hackathon = app.create_hackathon().await;
    let slow = app.create_team("Slow", hackathon).await;
    let coder = app.create_team("Coder", hackathon).await;
    let hunter = app.create_team("Hunter", hackathon).await;
    app.create_team("Elsewhere", app.create_hackathon().await).await;

    app.run(challenge, coder, "print 3").await;
    app.submit_flag(challenge, hunter, "FLAG{sum}").await;

    let res = app.get(&routes::leaderboard(hackathon)).await;

    assert_eq!(res.status, 200);
    let board = res.body["data"].as_array().unwrap();
    let order: Vec<_> = board.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["Hunter", "Coder", "Slow"]);
    assert_eq!(board[0]["rank"], 1);
    assert_eq!(board[0]["total_score"], 20);
    assert_eq!(board[1]["completed_challenges"], 1);
    assert_eq!(board[2]["team_id"], json!(slow));
}

#[tokio::test]
async fn unknown_hackathon_rejects_teams_and_has_no_board() {
    let app = TestApp::spawn().await;
    let hackathon = Uuid::now_v7();

    let res = app
        .post(
            routes::TEAMS,
            &json!({"name": "Drifters", "hackathon_id": hackathon}),
        )
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");

    let res = app.get(&routes::leaderboard(hackathon)).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
