use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn created_hackathon_can_be_fetched() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::HACKATHONS,
            &json!({
                "title": "  Autumn Jam ",
                "description": "Two days of puzzles",
                "starts_at": "2026-10-17T09:00:00Z",
                "ends_at": "2026-10-18T18:00:00Z"
            }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["title"], "Autumn Jam");
    assert_eq!(res.body["is_active"], true);
    assert_eq!(res.body["challenge_ids"], json!([]));

    let fetched = app.get(&routes::hackathon(res.id())).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["description"], "Two days of puzzles");
    assert_eq!(fetched.body["starts_at"], res.body["starts_at"]);
}

#[tokio::test]
async fn hackathon_must_not_end_before_it_starts() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::HACKATHONS,
            &json!({
                "title": "Backwards",
                "starts_at": "2026-10-18T09:00:00Z",
                "ends_at": "2026-10-17T09:00:00Z"
            }),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn assigned_challenges_are_listed_in_order() {
    let app = TestApp::spawn().await;
    let hackathon = app.create_hackathon().await;
    let first = app.create_challenge().await;
    let second = app.create_challenge().await;

    for challenge in [second, first, second] {
        let res = app
            .post(
                &routes::hackathon_challenges(hackathon),
                &json!({"challenge_id": challenge}),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
    }

    let fetched = app.get(&routes::hackathon(hackathon)).await;
    assert_eq!(fetched.body["challenge_ids"], json!([second, first]));

    let listed = app.get(&routes::hackathon_challenges(hackathon)).await;
    assert_eq!(listed.status, 200);
    let ids: Vec<_> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(second), json!(first)]);
    assert!(!listed.text.contains("FLAG{sum}"));
}

#[tokio::test]
async fn unknown_hackathon_or_challenge_is_not_found() {
    let app = TestApp::spawn().await;
    let hackathon = app.create_hackathon().await;
    let challenge = app.create_challenge().await;

    let res = app.get(&routes::hackathon(Uuid::now_v7())).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");

    let res = app
        .post(
            &routes::hackathon_challenges(Uuid::now_v7()),
            &json!({"challenge_id": challenge}),
        )
        .await;
    assert_eq!(res.status, 404);

    let res = app
        .post(
            &routes::hackathon_challenges(hackathon),
            &json!({"challenge_id": Uuid::now_v7()}),
        )
        .await;
    assert_eq!(res.status, 404);

    let res = app.get(&routes::hackathon_challenges(Uuid::now_v7())).await;
    assert_eq!(res.status, 404);
}
