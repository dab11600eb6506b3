use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant business as exposed through the public API. Contact data and
/// booking configuration only; internal columns stay in the db crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Granularity of bookable slots, in minutes (30 or 60 in practice).
    pub interval_minutes: i32,
    pub open_hour: i32,
    pub close_hour: i32,
}

/// A service offered by a business. Duration is informational; the slot
/// grid always uses the business interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBusinessesResponse {
    pub businesses: Vec<Business>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBusinessResponse {
    #[serde(flatten)]
    pub business: Business,
    pub services: Vec<Service>,
}
