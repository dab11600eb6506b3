use serde::{Deserialize, Serialize};

/// Success body of `POST /api/book-appointment/`. Appointments are
/// write-once: the booking flow creates them and nothing in this service
/// updates or deletes them afterwards, so there is no richer payload to
/// return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub status: String,
    pub message: String,
}

impl BookAppointmentResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
