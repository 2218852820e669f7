//! Call API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use dialdesk::domain::call_registry::CallRegistry;
use dialdesk::interface::api::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot`

fn test_app() -> (axum::Router, Arc<CallRegistry>) {
    let registry = Arc::new(CallRegistry::new());
    let app = build_router(AppState {
        registry: registry.clone(),
    });
    (app, registry)
}

fn start_call_body(contact_id: &str, name: &str) -> String {
    json!({
        "contact": {"id": contact_id, "name": name},
        "voice": "Sarah (Sales)",
        "products": ["prod-1"],
        "instructions": "Mention the spring discount"
    })
    .to_string()
}

async fn post_json(app: &axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_api_health() {
    let (app, _) = test_app();

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_api_start_call_returns_created() {
    let (app, registry) = test_app();

    let (status, json) = post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["contact"]["name"], "Let Cruz");
    assert_eq!(json["data"]["minimized"], false);
    assert_eq!(json["data"]["duration_seconds"], 0);
    assert_eq!(registry.count(), 1);
}

#[tokio::test]
async fn test_api_duplicate_contact_conflicts() {
    let (app, registry) = test_app();

    post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;
    let (status, json) = post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("already in progress"));
    assert_eq!(registry.count(), 1);
}

#[tokio::test]
async fn test_api_capacity_conflicts() {
    let (app, registry) = test_app();

    for i in 0..5 {
        let (status, _) = post_json(
            &app,
            "/calls",
            start_call_body(&format!("{}", i), &format!("Contact {}", i)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = post_json(&app, "/calls", start_call_body("99", "One Too Many")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("Maximum of 5"));
    assert_eq!(registry.count(), 5);
}

#[tokio::test]
async fn test_api_snapshot_lists_calls_and_focus() {
    let (app, _) = test_app();

    post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;
    let (_, second) = post_json(&app, "/calls", start_call_body("2", "Dana Wolf")).await;

    let (status, json) = get_json(&app, "/calls").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["calls"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["focused_call_id"], second["data"]["id"]);
}

#[tokio::test]
async fn test_api_minimize_and_restore_round_trip() {
    let (app, _) = test_app();

    let (_, started) = post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;
    let call_id = started["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = post_json(&app, &format!("/calls/{}/minimize", call_id), String::new())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["updated"], true);

    // Nothing is focused while the only call sits in the strip
    let (_, focused) = get_json(&app, "/calls/focused").await;
    assert_eq!(focused["success"], false);

    post_json(&app, &format!("/calls/{}/restore", call_id), String::new()).await;
    let (_, focused) = get_json(&app, "/calls/focused").await;
    assert_eq!(focused["success"], true);
    assert_eq!(focused["data"]["id"].as_str().unwrap(), call_id);
}

#[tokio::test]
async fn test_api_end_call_then_stale_end_is_noop() {
    let (app, registry) = test_app();

    let (_, started) = post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;
    let call_id = started["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/calls/{}", call_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["updated"], true);
    assert_eq!(registry.count(), 0);

    // Ending it again reports updated=false instead of failing
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/calls/{}", call_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["updated"], false);
}

#[tokio::test]
async fn test_api_duration_override() {
    let (app, registry) = test_app();

    let (_, started) = post_json(&app, "/calls", start_call_body("1", "Let Cruz")).await;
    let call_id = started["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = post_json(
        &app,
        &format!("/calls/{}/duration", call_id),
        json!({"seconds": 42}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["updated"], true);

    let call = registry.active_calls().remove(0);
    assert_eq!(call.duration_seconds, 42);
}

#[tokio::test]
async fn test_api_rejects_malformed_call_id() {
    let (app, _) = test_app();

    let (status, json) = get_json(&app, "/calls/not-a-uuid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Invalid identifier"));
}
