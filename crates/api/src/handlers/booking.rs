//! # Booking Intake Handler
//!
//! Validates and persists a new appointment request. Validation is pure
//! (`slotbook_core::booking`); this handler adds the store-dependent
//! steps: resolving the business, the advisory duplicate pre-check, and
//! the insert whose unique constraint is the real double-booking guard.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Local;
use std::sync::Arc;

use slotbook_core::{
    booking::{validate_booking, BookAppointmentRequest},
    errors::BookingError,
    models::appointment::BookAppointmentResponse,
    slots::format_time,
};
use slotbook_db::repositories::appointment::{self, AppointmentInsert, NewAppointment};

use crate::{middleware::error_handling::BookingFailure, ApiState};

/// Creates an appointment.
///
/// # Endpoint
///
/// ```text
/// POST /api/book-appointment/
/// {"business", "name", "phone", "email", "date": "YYYY-MM-DD",
///  "time": "HH:MM", "service_type"?}
/// ```
///
/// Success is `{"status":"success","message":...}`. Every client fault —
/// malformed body, missing field, bad or past date, bad time, unknown
/// business, occupied slot — is a 400 with a stable error code; only
/// store failures are 500. The slot uniqueness check runs twice: once
/// here for a friendly message, and authoritatively as the database
/// constraint, so two racing requests cannot both book the slot.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<BookAppointmentResponse>, BookingFailure> {
    let Json(request) = payload
        .map_err(|rejection| BookingError::MalformedPayload(rejection.body_text()))?;

    let today = Local::now().date_naive();
    let booking = validate_booking(&request, today)?;

    let business = slotbook_db::repositories::business::get_business_by_slug(
        &state.db_pool,
        &booking.business_slug,
    )
    .await?
    .ok_or_else(|| BookingError::UnknownBusiness(booking.business_slug.clone()))?;

    let service_type = business.resolve_service_type(booking.service_type.as_deref());
    let filter = business.booked_filter(booking.service_type.as_deref());

    // Fast path for a friendly message; the unique constraint decides.
    let existing = appointment::find_appointment(
        &state.db_pool,
        business.id,
        booking.date,
        booking.time,
        filter.as_deref(),
    )
    .await?;
    if existing.is_some() {
        return Err(BookingError::SlotAlreadyBooked(booking.date, booking.time).into());
    }

    let new = NewAppointment {
        business_id: business.id,
        name: booking.name,
        phone: booking.phone,
        email: booking.email,
        date: booking.date,
        time: booking.time,
        service_type,
    };

    match appointment::create_appointment(&state.db_pool, &new).await? {
        AppointmentInsert::Created(created) => {
            tracing::info!(
                "Appointment booked: business={}, date={}, time={}",
                business.slug,
                created.date,
                created.time
            );
            let message = format!(
                "Appointment booked at {} on {} at {}",
                business.name,
                created.date,
                format_time(created.time)
            );
            Ok(Json(BookAppointmentResponse::success(message)))
        }
        AppointmentInsert::DuplicateSlot => {
            Err(BookingError::SlotAlreadyBooked(booking.date, booking.time).into())
        }
    }
}
