//! # Error Handling
//!
//! Maps [`BookingError`] values onto HTTP responses. The wire contract
//! fixes a different failure body per endpoint family, so there is one
//! wrapper type per shape rather than a single catch-all:
//!
//! - [`AppError`] — plain `{"error", "message"}` body, used by the
//!   business-info endpoints. Unknown business is 404 here.
//! - [`BookingFailure`] — `{"status":"error","error","message"}`, used by
//!   `POST /api/book-appointment/`. Every client fault is 400 on this
//!   endpoint, including an unknown business.
//! - [`AvailabilityFailure`] / [`SlotsFailure`] — the query endpoints
//!   echo an empty `times` / `slots` array alongside the error so
//!   frontends can render the empty state directly. Unknown business is
//!   404.
//!
//! Store errors are logged with full context and reported to the client
//! as the generic `store-error` code with no internal detail; they are
//! the only 500s. No error here is ever fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Client-facing message for an error, hiding store internals.
fn public_message(err: &BookingError) -> String {
    match err {
        BookingError::Store(report) => {
            tracing::error!("Store error while handling request: {:?}", report);
            "Internal server error".to_string()
        }
        other => other.to_string(),
    }
}

fn status_for(err: &BookingError, unknown_business_status: StatusCode) -> StatusCode {
    match err {
        BookingError::UnknownBusiness(_) => unknown_business_status,
        BookingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// General error wrapper: `{"error": <code>, "message": <text>}`.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0, StatusCode::NOT_FOUND);
        let body = Json(json!({
            "error": self.0.code(),
            "message": public_message(&self.0),
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Store(err))
    }
}

/// Failure body of the booking endpoint:
/// `{"status":"error","error":<code>,"message":<text>}`.
#[derive(Debug)]
pub struct BookingFailure(pub BookingError);

impl IntoResponse for BookingFailure {
    fn into_response(self) -> Response {
        let status = status_for(&self.0, StatusCode::BAD_REQUEST);
        let body = Json(json!({
            "status": "error",
            "error": self.0.code(),
            "message": public_message(&self.0),
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for BookingFailure {
    fn from(err: BookingError) -> Self {
        BookingFailure(err)
    }
}

impl From<eyre::Report> for BookingFailure {
    fn from(err: eyre::Report) -> Self {
        BookingFailure(BookingError::Store(err))
    }
}

/// Failure body of `GET /api/available-times/`:
/// `{"times":[],"error":<code>,"message":<text>}`.
#[derive(Debug)]
pub struct AvailabilityFailure(pub BookingError);

impl IntoResponse for AvailabilityFailure {
    fn into_response(self) -> Response {
        let status = status_for(&self.0, StatusCode::NOT_FOUND);
        let body = Json(json!({
            "times": [],
            "error": self.0.code(),
            "message": public_message(&self.0),
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AvailabilityFailure {
    fn from(err: BookingError) -> Self {
        AvailabilityFailure(err)
    }
}

impl From<eyre::Report> for AvailabilityFailure {
    fn from(err: eyre::Report) -> Self {
        AvailabilityFailure(BookingError::Store(err))
    }
}

/// Failure body of `GET /api/slots/`:
/// `{"slots":[],"error":<code>,"message":<text>}`.
#[derive(Debug)]
pub struct SlotsFailure(pub BookingError);

impl IntoResponse for SlotsFailure {
    fn into_response(self) -> Response {
        let status = status_for(&self.0, StatusCode::NOT_FOUND);
        let body = Json(json!({
            "slots": [],
            "error": self.0.code(),
            "message": public_message(&self.0),
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for SlotsFailure {
    fn from(err: BookingError) -> Self {
        SlotsFailure(err)
    }
}

impl From<eyre::Report> for SlotsFailure {
    fn from(err: eyre::Report) -> Self {
        SlotsFailure(BookingError::Store(err))
    }
}
