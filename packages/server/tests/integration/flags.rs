use server::store::HackathonStore;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn correct_flag_unlocks_buildathon_once() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let team = app.create_team("Flag Hunters", app.create_hackathon().await).await;

    let first = app.submit_flag(challenge, team, "FLAG{sum}").await;
    assert_eq!(first.status, 201, "{}", first.text);
    assert_eq!(first.body["is_correct"], true);
    assert_eq!(first.body["newly_solved"], true);
    assert_eq!(first.body["buildathon_task"], "Build a calculator UI");

    let second = app.submit_flag(challenge, team, "FLAG{sum}").await;
    assert_eq!(second.body["is_correct"], true);
    assert_eq!(second.body["newly_solved"], false);

    let progress = app.get(&routes::challenge_progress(team, challenge)).await;
    assert_eq!(progress.body["team"]["total_score"], 20);
    assert_eq!(progress.body["team"]["flag_submitted"], true);
    assert_eq!(progress.body["team"]["buildathon_unlocked"], true);
    assert_eq!(progress.body["has_solved_flag"], true);

    let attempts = app.get(&routes::team_flags(challenge, team)).await;
    assert_eq!(attempts.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn flag_comparison_is_exact() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let team = app.create_team("Close Enough", app.create_hackathon().await).await;

    for flag in ["flag{sum}", "FLAG{sum} ", "FLAG{SUM}"] {
        let res = app.submit_flag(challenge, team, flag).await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["is_correct"], false, "{flag:?}");
        assert!(res.body["buildathon_task"].is_null());
    }

    let progress = app.get(&routes::progress(team)).await;
    assert_eq!(progress.body["team"]["buildathon_unlocked"], false);
    assert_eq!(progress.body["team"]["total_score"], 0);

    let attempts = app.get(&routes::team_flags(challenge, team)).await;
    let flags: Vec<_> = attempts
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["flag"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(flags, vec!["FLAG{SUM}", "FLAG{sum} ", "flag{sum}"]);
}

#[tokio::test]
async fn empty_flag_is_rejected() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let team = app.create_team("Empty Handed", app.create_hackathon().await).await;

    let res = app.submit_flag(challenge, team, "").await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn code_and_flag_rewards_add_up() {
    let app = TestApp::spawn().await;
    let challenge = app.create_challenge().await;
    let team = app.create_team("Completionists", app.create_hackathon().await).await;

    app.run(challenge, team, "print 3").await;
    app.submit_flag(challenge, team, "FLAG{sum}").await;

    let progress = app.get(&routes::challenge_progress(team, challenge)).await;
    assert_eq!(progress.body["team"]["total_score"], 30);
    assert_eq!(progress.body["has_solved_challenge"], true);
    assert_eq!(progress.body["has_solved_flag"], true);

    let stored = app.store.team(team).await.unwrap().unwrap();
    assert_eq!(stored.completed_challenges, vec![challenge]);
    assert_eq!(stored.solved_flags, vec![challenge]);
}
