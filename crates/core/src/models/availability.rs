use serde::{Deserialize, Serialize};

/// Response body of `GET /api/available-times/`. Times are wire-format
/// strings ("09:00"), ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableTimesResponse {
    pub times: Vec<String>,
    pub message: String,
}

/// One `{start, end}` pair in the ranged slots response, wire-format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
}

/// Response body of `GET /api/slots/`. `warning` is only present in the
/// feature-flagged mock-data degraded mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub slots: Vec<SlotDto>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
