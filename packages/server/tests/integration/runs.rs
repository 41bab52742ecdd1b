use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, routes};

mod recording {
    use super::*;

    #[tokio::test]
    async fn correct_run_completes_challenge_once() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Null Pointers", app.create_hackathon().await).await;

        let first = app.run(challenge, team, "print 3").await;
        assert_eq!(first.status, 201, "{}", first.text);
        assert_eq!(first.body["submission"]["is_correct"], true);
        assert_eq!(first.body["submission"]["status"], "Accepted");
        assert_eq!(first.body["submission"]["output"], "3\n");
        assert_eq!(first.body["submission"]["execution_time"], 0.012);
        assert_eq!(first.body["submission"]["memory"], 3200);
        assert_eq!(first.body["challenge_completed"], true);

        let second = app.run(challenge, team, "print 3").await;
        assert_eq!(second.status, 201);
        assert_eq!(second.body["submission"]["is_correct"], true);
        assert_eq!(second.body["challenge_completed"], false);

        let progress = app.get(&routes::challenge_progress(team, challenge)).await;
        assert_eq!(progress.body["team"]["total_score"], 10);
        assert_eq!(progress.body["team"]["completed_challenges"], json!([challenge]));
        assert_eq!(progress.body["has_solved_challenge"], true);
    }

    #[tokio::test]
    async fn wrong_answer_is_recorded_but_not_scored() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Off By One", app.create_hackathon().await).await;

        // Echoes the challenge input back, which is not the expected sum.
        let res = app.run(challenge, team, "echo").await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["submission"]["output"], "1 2\n");
        assert_eq!(res.body["submission"]["is_correct"], false);
        let progress = app.get(&routes::progress(team)).await;
        assert_eq!(progress.body["team"]["total_score"], 0);
    }

    #[tokio::test]
    async fn failed_programs_report_their_diagnostics() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Segfaulters", app.create_hackathon().await).await;

        let res = app.run(challenge, team, "compile_error").await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["submission"]["status"], "Compilation Error");
        assert_eq!(
            res.body["submission"]["output"],
            "main.c:1: error: expected ';'"
        );

        let res = app.run(challenge, team, "crash").await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["submission"]["status"], "Runtime Error (SIGSEGV)");
        assert_eq!(res.body["submission"]["output"], "Segmentation fault");
        assert_eq!(res.body["submission"]["is_correct"], false);
    }

    #[tokio::test]
    async fn history_is_newest_first_and_per_team() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let hackathon = app.create_hackathon().await;
        let team = app.create_team("Alpha", hackathon).await;
        let other = app.create_team("Beta", hackathon).await;

        app.run(challenge, team, "print 1").await;
        app.run(challenge, team, "print 2").await;
        app.run(challenge, other, "print 3").await;

        let res = app.get(&routes::team_runs(challenge, team)).await;
        assert_eq!(res.status, 200);
        let outputs: Vec<_> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["output"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(outputs, vec!["2\n", "1\n"]);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn empty_code_and_missing_team_are_rejected() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Blank", app.create_hackathon().await).await;

        let res = app.run(challenge, team, "   ").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app
            .post(
                &routes::runs(challenge),
                &json!({"code": "print 3", "language": "python"}),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let history = app.get(&routes::team_runs(challenge, team)).await;
        assert_eq!(history.body, json!([]));
    }

    #[tokio::test]
    async fn unknown_language_is_rejected() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Polyglots", app.create_hackathon().await).await;

        let res = app
            .post(
                &routes::runs(challenge),
                &json!({"team_id": team, "code": "print 3", "language": "brainfuck"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "UNSUPPORTED_LANGUAGE");
    }

    #[tokio::test]
    async fn unknown_challenge_or_team_is_not_found() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Lost", app.create_hackathon().await).await;

        let res = app.run(Uuid::now_v7(), team, "print 3").await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");

        let res = app.run(challenge, Uuid::now_v7(), "print 3").await;
        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn never_finishing_job_times_out_without_a_record() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Patient", app.create_hackathon().await).await;

        let res = app.run(challenge, team, "hang").await;

        assert_eq!(res.status, 504);
        assert_eq!(res.body["code"], "EXECUTION_TIMEOUT");
        let history = app.get(&routes::team_runs(challenge, team)).await;
        assert_eq!(history.body, json!([]));
    }

    #[tokio::test]
    async fn unreachable_judge_is_a_gateway_error() {
        let app = TestApp::spawn_without_judge().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Offline", app.create_hackathon().await).await;

        let res = app.run(challenge, team, "print 3").await;

        assert_eq!(res.status, 502);
        assert_eq!(res.body["code"], "JUDGE_UNAVAILABLE");
        assert_eq!(res.body["message"], "Code execution failed");
        let history = app.get(&routes::team_runs(challenge, team)).await;
        assert_eq!(history.body, json!([]));
    }

    #[tokio::test]
    async fn shutdown_cancels_runs() {
        let app = TestApp::spawn().await;
        let challenge = app.create_challenge().await;
        let team = app.create_team("Late", app.create_hackathon().await).await;
        app.shutdown.cancel();

        let res = app.run(challenge, team, "print 3").await;

        assert_eq!(res.status, 503);
        assert_eq!(res.body["code"], "SERVICE_UNAVAILABLE");
        let history = app.get(&routes::team_runs(challenge, team)).await;
        assert_eq!(history.body, json!([]));
    }
}
