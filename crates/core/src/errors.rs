use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Everything that can go wrong while answering an availability query or
/// taking a booking. Each variant carries a stable wire code (see
/// [`BookingError::code`]) that handlers put in the JSON error body.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date is in the past: {0}")]
    PastDate(NaiveDate),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unknown business: {0}")]
    UnknownBusiness(String),

    #[error("Slot already booked: {0} {1}")]
    SlotAlreadyBooked(NaiveDate, NaiveTime),

    #[error("Malformed request payload: {0}")]
    MalformedPayload(String),

    #[error("Storage error: {0}")]
    Store(#[from] eyre::Report),
}

impl BookingError {
    /// Stable machine-readable code for the `error` field of failure
    /// responses. Clients match on these, so they never change.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::MissingField(_) => "missing-field",
            BookingError::InvalidDate(_) => "invalid-date",
            BookingError::PastDate(_) => "past-date",
            BookingError::InvalidTime(_) => "invalid-time",
            BookingError::UnknownBusiness(_) => "unknown-business",
            BookingError::SlotAlreadyBooked(_, _) => "slot-already-booked",
            BookingError::MalformedPayload(_) => "malformed-payload",
            BookingError::Store(_) => "store-error",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
