mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{test_server, today, yesterday};

#[tokio::test]
async fn missing_business_param_is_rejected() {
    let server = test_server(false);

    let response = server
        .get("/api/available-times/")
        .add_query_param("date", today())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("missing-field"));
    assert_eq!(body["times"], json!([]));
    assert!(body["message"].as_str().unwrap_or("").contains("business"));
}

#[tokio::test]
async fn missing_date_param_is_rejected() {
    let server = test_server(false);

    let response = server
        .get("/api/available-times/")
        .add_query_param("business", "stilus-fodraszat")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("missing-field"));
    assert!(body["message"].as_str().unwrap_or("").contains("date"));
}

#[tokio::test]
async fn unparseable_date_is_rejected() {
    let server = test_server(false);

    let response = server
        .get("/api/available-times/")
        .add_query_param("business", "stilus-fodraszat")
        .add_query_param("date", "2026/09/01")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("invalid-date"));
    assert_eq!(body["times"], json!([]));
}

#[tokio::test]
async fn yesterday_is_rejected_as_past() {
    let server = test_server(false);

    let response = server
        .get("/api/available-times/")
        .add_query_param("business", "stilus-fodraszat")
        .add_query_param("date", yesterday())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("past-date"));
}

#[tokio::test]
async fn wrong_method_is_method_not_allowed() {
    let server = test_server(false);

    let response = server.post("/api/available-times/").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn slots_without_business_fails_when_mock_mode_is_off() {
    let server = test_server(false);

    let response = server
        .get("/api/slots/")
        .add_query_param("date", today())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("missing-field"));
    assert_eq!(body["slots"], json!([]));
}

#[tokio::test]
async fn slots_without_business_serves_mock_data_when_enabled() {
    let server = test_server(true);

    let response = server
        .get("/api/slots/")
        .add_query_param("date", today())
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["warning"], json!("mock-data"));
    let slots = body["slots"].as_array().expect("slots array");
    assert!(!slots.is_empty());
    assert_eq!(slots[0], json!({"start": "09:00", "end": "10:00"}));
}

#[tokio::test]
async fn slots_date_validation_still_applies_with_business_selected() {
    let server = test_server(true);

    let response = server
        .get("/api/slots/")
        .add_query_param("business", "stilus-fodraszat")
        .add_query_param("date", yesterday())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("past-date"));
    assert_eq!(body["slots"], json!([]));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = test_server(false);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn version_endpoint_reports_the_crate_version() {
    let server = test_server(false);

    let response = server.get("/version").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
