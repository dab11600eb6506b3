use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use slotbook_api::middleware::error_handling::{
    AppError, AvailabilityFailure, BookingFailure, SlotsFailure,
};
use slotbook_core::errors::BookingError;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn unknown_business_is_404_on_reads_but_400_on_booking() {
    let read = AvailabilityFailure(BookingError::UnknownBusiness("x".to_string())).into_response();
    assert_eq!(read.status(), StatusCode::NOT_FOUND);

    let info = AppError(BookingError::UnknownBusiness("x".to_string())).into_response();
    assert_eq!(info.status(), StatusCode::NOT_FOUND);

    let write = BookingFailure(BookingError::UnknownBusiness("x".to_string())).into_response();
    assert_eq!(write.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn availability_failures_echo_an_empty_times_array() {
    let response = AvailabilityFailure(BookingError::MissingField("date")).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["times"], json!([]));
    assert_eq!(body["error"], json!("missing-field"));
}

#[tokio::test]
async fn slots_failures_echo_an_empty_slots_array() {
    let response = SlotsFailure(BookingError::InvalidDate("x".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["slots"], json!([]));
    assert_eq!(body["error"], json!("invalid-date"));
}

#[tokio::test]
async fn booking_failures_carry_the_error_status_field() {
    let response = BookingFailure(BookingError::MalformedPayload("bad".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("error"));
    assert_eq!(body["error"], json!("malformed-payload"));
}

#[tokio::test]
async fn store_errors_never_leak_internal_detail() {
    let response =
        BookingFailure(BookingError::Store(eyre::eyre!("password=hunter2 at db:5432")))
            .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("store-error"));
    let message = body["message"].as_str().unwrap_or_default();
    assert!(!message.contains("hunter2"));
    assert_eq!(message, "Internal server error");
}
