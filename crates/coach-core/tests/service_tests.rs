mod common;

use std::time::Duration;

use coach_core::{build, HttpPlanService, PlanService, RequestError};
use common::{form, sample_plan_json, PLAN_PATH};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_posts_json_request_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PLAN_PATH)
                .header("content-type", "application/json")
                .json_body(json!({
                    "goals": ["Study", "Workout"],
                    "available_hours": 8,
                    "distractions": ["phone", "social media"],
                    "start_time": "09:00",
                    "energy_level": "medium"
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(sample_plan_json());
        })
        .await;

    let service = HttpPlanService::builder()
        .with_endpoint(Some(server.url(PLAN_PATH)))
        .build()
        .expect("Failed to build plan service");

    let plan = service
        .generate(&build(&form("Study, , Workout")))
        .await
        .expect("plan request succeeds");

    mock.assert_async().await;
    assert_eq!(plan.priority_order, vec!["A"]);
    assert_eq!(plan.schedule[0].start_time, "09:00");
    assert_eq!(plan.tips, vec!["Rest"]);
}

#[tokio::test]
async fn test_non_success_status_is_a_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PLAN_PATH);
            then.status(422).json_body(json!({"detail": "bad input"}));
        })
        .await;

    let service = HttpPlanService::builder()
        .with_endpoint(Some(server.url(PLAN_PATH)))
        .build()
        .expect("Failed to build plan service");

    let err = service
        .generate(&build(&form("Study")))
        .await
        .expect_err("422 should fail");

    assert!(matches!(err, RequestError::Status(status) if status.as_u16() == 422));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PLAN_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body("{\"priority_order\": [");
        })
        .await;

    let service = HttpPlanService::builder()
        .with_endpoint(Some(server.url(PLAN_PATH)))
        .build()
        .expect("Failed to build plan service");

    let err = service
        .generate(&build(&form("Study")))
        .await
        .expect_err("truncated body should fail");

    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    let service = HttpPlanService::builder()
        .with_endpoint(Some("http://127.0.0.1:1/generate-plan"))
        .build()
        .expect("Failed to build plan service");

    let err = service
        .generate(&build(&form("Study")))
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, RequestError::Transport(_)));
}

#[tokio::test]
async fn test_configured_timeout_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PLAN_PATH);
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(sample_plan_json());
        })
        .await;

    let service = HttpPlanService::builder()
        .with_endpoint(Some(server.url(PLAN_PATH)))
        .with_timeout(Some(Duration::from_millis(100)))
        .build()
        .expect("Failed to build plan service");

    let err = service
        .generate(&build(&form("Study")))
        .await
        .expect_err("should time out");

    assert!(matches!(&err, RequestError::Transport(e) if e.is_timeout()));
}
