mod common;
use axum::http::StatusCode;

use crate::common::{Action, Flow, dashboard_action, enroll_action, ids_at, setup_server};

fn close(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().expect("not a number") - expected).abs() < 1e-6
}

#[tokio::test]
async fn route_dashboard_test() {
    let mut server = setup_server();

    Flow::new()
        .step(dashboard_action().assert_body(|body| {
            assert_eq!(body["profile"]["first_name"], "Anna");
            assert_eq!(body["profile"]["xp"], 2450);

            assert_eq!(body["level"]["tier"], "student");
            assert_eq!(body["level"]["xp_floor"], 1500);
            assert_eq!(body["level"]["xp_ceiling"], 3000);
            assert!(close(&body["level"]["progress_fraction"], 950.0 / 1500.0));

            assert_eq!(body["stats"]["lessons_completed"], 3);
            assert_eq!(body["stats"]["courses_completed"], 1);
            assert_eq!(body["stats"]["current_streak"], 12);
            assert_eq!(body["stats"]["study_hours"], 30);

            assert_eq!(ids_at(body, "/courses"), ["course-1", "course-2"]);
            assert_eq!(body["courses"][0]["progress"]["percentage"], 100.0);
            assert_eq!(body["courses"][0]["progress"]["is_completed"], true);
            assert_eq!(body["courses"][1]["progress"]["percentage"], 100.0);
            assert_eq!(body["courses"][1]["progress"]["is_completed"], false);

            assert_eq!(body["achievements"].as_array().unwrap().len(), 2);
            assert_eq!(body["achievements"][1]["name"], "Week Warrior");
        }))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_dashboard_includes_session_enrollments_test() {
    let mut server = setup_server();

    Flow::new()
        .step(enroll_action("course-4"))
        .step(enroll_action("course-2"))
        .step(dashboard_action().assert_body(|body| {
            assert_eq!(ids_at(body, "/courses"), ["course-1", "course-2", "course-4"]);
            assert_eq!(body["courses"][2]["progress"]["percentage"], 0.0);
            assert_eq!(body["courses"][2]["progress"]["total_lessons"], 1);
        }))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_level_test() {
    let mut server = setup_server();

    Flow::new()
        .step(
            Action::new("level", "GET", "/api/v1/level/0").assert_body(|body| {
                assert_eq!(body["level"]["tier"], "newbie");
                assert_eq!(body["progress_percent"], 0.0);
                assert_eq!(body["xp_to_next"], 500);
                assert_eq!(body["next_tier"], "learner");
            }),
        )
        .step(
            Action::new("level", "GET", "/api/v1/level/500").assert_body(|body| {
                assert_eq!(body["level"]["tier"], "learner");
                assert_eq!(body["level"]["progress_fraction"], 0.0);
            }),
        )
        .step(
            Action::new("level", "GET", "/api/v1/level/20000").assert_body(|body| {
                assert_eq!(body["level"]["tier"], "expert");
                assert_eq!(body["level"]["xp_ceiling"], 10000);
                assert_eq!(body["level"]["progress_fraction"], 3.0);
                assert_eq!(body["xp_to_next"], 0);
                assert_eq!(body["next_tier"], serde_json::Value::Null);
            }),
        )
        .step(
            Action::new("level", "GET", "/api/v1/level/-5")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    assert!(body["message"].as_str().unwrap().contains("bad request"));
                }),
        )
        .step(Action::new("level", "GET", "/api/v1/level/lots").with_expect(StatusCode::BAD_REQUEST))
        .run(&mut server)
        .await;
}
