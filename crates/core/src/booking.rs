//! # Booking Intake Validation
//!
//! Pure validation of an incoming booking payload. The handler parses the
//! body, hands it here together with today's date, and only talks to the
//! store once a [`ValidatedBooking`] comes back.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::errors::{BookingError, BookingResult};
use crate::slots::TIME_FORMAT;

/// Wire format for calendar dates throughout the API ("2026-08-25").
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw booking payload as it arrives on the wire.
///
/// Every field is optional at the serde level so that an absent field
/// surfaces as [`BookingError::MissingField`] with the field's name,
/// rather than as an opaque deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub business: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
}

/// A booking payload that passed validation: fields trimmed, date and
/// time parsed, date not in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub business_slug: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Trimmed service tag; `None` when absent or empty. The handler
    /// resolves the business default afterwards.
    pub service_type: Option<String>,
}

fn require_field(name: &'static str, value: &Option<String>) -> BookingResult<String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw.trim().to_string()),
        _ => Err(BookingError::MissingField(name)),
    }
}

/// Parses a wire-format date.
pub fn parse_date(raw: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDate(raw.trim().to_string()))
}

/// Parses a wire-format date and rejects dates strictly before `today`.
/// Booking for today remains allowed.
pub fn parse_request_date(raw: &str, today: NaiveDate) -> BookingResult<NaiveDate> {
    let date = parse_date(raw)?;
    if date < today {
        return Err(BookingError::PastDate(date));
    }
    Ok(date)
}

/// Parses a wire-format time-of-day.
pub fn parse_time(raw: &str) -> BookingResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| BookingError::InvalidTime(raw.trim().to_string()))
}

/// Validates a raw booking payload against `today`.
///
/// Checks run in field order so the first missing field is the one named
/// in the error. All string fields are trimmed before persistence; an
/// empty `service_type` counts as absent.
pub fn validate_booking(
    request: &BookAppointmentRequest,
    today: NaiveDate,
) -> BookingResult<ValidatedBooking> {
    let business_slug = require_field("business", &request.business)?;
    let name = require_field("name", &request.name)?;
    let phone = require_field("phone", &request.phone)?;
    let email = require_field("email", &request.email)?;
    let date_raw = require_field("date", &request.date)?;
    let time_raw = require_field("time", &request.time)?;

    let date = parse_request_date(&date_raw, today)?;
    let time = parse_time(&time_raw)?;

    let service_type = request
        .service_type
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string);

    Ok(ValidatedBooking {
        business_slug,
        name,
        phone,
        email,
        date,
        time,
        service_type,
    })
}
