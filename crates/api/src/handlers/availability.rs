//! # Availability Handlers
//!
//! The read side of the booking flow: compute which slots remain free
//! for a business on a date. Both endpoints share the same pipeline:
//! validate the query, load the business configuration, build the
//! candidate grid from its office hours and interval, subtract the
//! booked set from the ledger, and return the difference in grid order.
//!
//! Validation runs before any database access, so a malformed query
//! never costs a round trip.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::{collections::HashSet, sync::Arc};

use slotbook_core::{
    booking::parse_request_date,
    errors::BookingError,
    models::availability::{AvailableSlotsResponse, AvailableTimesResponse, SlotDto},
    slots,
};

use crate::{
    middleware::error_handling::{AvailabilityFailure, SlotsFailure},
    ApiState,
};

/// Fixed response served when mock mode is on and no business was
/// selected. Exists only so a frontend wired up before its tenant is
/// configured renders something; never served once a business is named.
const MOCK_SLOTS: &[(&str, &str)] = &[
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("14:00", "15:00"),
    ("15:00", "16:00"),
];

fn trimmed(param: &Option<String>) -> Option<&str> {
    param.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Query parameters for the available-times endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailableTimesQuery {
    /// Business slug; required
    pub business: Option<String>,

    /// Calendar date, `YYYY-MM-DD`; required, today or later
    pub date: Option<String>,

    /// Service tag; only consulted for businesses that segment their
    /// calendar by service
    pub service: Option<String>,
}

/// Returns the free slot start times for a business on a date.
///
/// # Endpoint
///
/// ```text
/// GET /api/available-times/?business=<slug>&date=YYYY-MM-DD[&service=<tag>]
/// ```
///
/// Success is `{"times": ["09:00", ...], "message": ...}`; failures carry
/// an empty `times` array with a stable error code (400, or 404 for an
/// unknown business). Idempotent and mutation-free, safe to call
/// concurrently.
#[axum::debug_handler]
pub async fn available_times(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableTimesQuery>,
) -> Result<Json<AvailableTimesResponse>, AvailabilityFailure> {
    let slug = trimmed(&query.business).ok_or(BookingError::MissingField("business"))?;
    let date_raw = trimmed(&query.date).ok_or(BookingError::MissingField("date"))?;

    let today = Local::now().date_naive();
    let date = parse_request_date(date_raw, today)?;

    let business = slotbook_db::repositories::business::get_business_by_slug(&state.db_pool, slug)
        .await?
        .ok_or_else(|| BookingError::UnknownBusiness(slug.to_string()))?;

    let candidates = slots::slot_starts(
        business.open_hour,
        business.close_hour,
        business.interval_minutes,
    );

    let filter = business.booked_filter(trimmed(&query.service));
    let booked = slotbook_db::repositories::appointment::booked_times(
        &state.db_pool,
        business.id,
        date,
        filter.as_deref(),
    )
    .await?
    .into_iter()
    .collect::<HashSet<_>>();

    let times: Vec<String> = slots::free_times(candidates, &booked)
        .into_iter()
        .map(slots::format_time)
        .collect();

    let message = format!("{} available times on {}", times.len(), date);
    Ok(Json(AvailableTimesResponse { times, message }))
}

/// Query parameters for the ranged slots endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Business slug; required unless mock mode serves the request
    pub business: Option<String>,

    /// Calendar date, `YYYY-MM-DD`; required, today or later
    pub date: Option<String>,

    /// Service tag; only consulted for segmented businesses
    pub service: Option<String>,

    /// Accepted for frontend compatibility; not used for filtering
    pub location: Option<String>,
}

/// Returns the free slots for a business on a date as `{start, end}`
/// pairs.
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/?business=<slug>&date=YYYY-MM-DD[&service=][&location=]
/// ```
///
/// When no business is selected and `ALLOW_MOCK_SLOTS` is on, the fixed
/// mock list is served instead, marked `"warning": "mock-data"` and
/// logged. With the flag off the request fails like any other
/// validation error; a business slug is otherwise always required.
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, SlotsFailure> {
    if let Some(location) = trimmed(&query.location) {
        tracing::debug!("Ignoring location filter on slots query: {}", location);
    }

    let slug = match trimmed(&query.business) {
        Some(slug) => slug,
        None if state.allow_mock_slots => {
            tracing::warn!("No business selected on /api/slots/; serving mock slot data");
            return Ok(Json(AvailableSlotsResponse {
                slots: MOCK_SLOTS
                    .iter()
                    .map(|(start, end)| SlotDto {
                        start: start.to_string(),
                        end: end.to_string(),
                    })
                    .collect(),
                message: "Mock slot data; no business selected".to_string(),
                warning: Some("mock-data".to_string()),
            }));
        }
        None => return Err(BookingError::MissingField("business").into()),
    };

    let date_raw = trimmed(&query.date).ok_or(BookingError::MissingField("date"))?;

    let today = Local::now().date_naive();
    let date = parse_request_date(date_raw, today)?;

    let business = slotbook_db::repositories::business::get_business_by_slug(&state.db_pool, slug)
        .await?
        .ok_or_else(|| BookingError::UnknownBusiness(slug.to_string()))?;

    let candidates = slots::slot_ranges(
        business.open_hour,
        business.close_hour,
        business.interval_minutes,
    );

    let filter = business.booked_filter(trimmed(&query.service));
    let booked = slotbook_db::repositories::appointment::booked_times(
        &state.db_pool,
        business.id,
        date,
        filter.as_deref(),
    )
    .await?
    .into_iter()
    .collect::<HashSet<_>>();

    let free: Vec<SlotDto> = candidates
        .into_iter()
        .filter(|range| !booked.contains(&range.start))
        .map(|range| SlotDto {
            start: slots::format_time(range.start),
            end: slots::format_time(range.end),
        })
        .collect();

    let message = format!("{} available slots on {}", free.len(), date);
    Ok(Json(AvailableSlotsResponse {
        slots: free,
        message,
        warning: None,
    }))
}
