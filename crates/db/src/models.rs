use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use slotbook_core::models::business::{Business, Service};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusiness {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_ref: Option<String>,
    pub interval_minutes: i32,
    pub open_hour: i32,
    pub close_hour: i32,
    /// When set, booked-time queries for this business are filtered by
    /// service tag; otherwise the tag is ignored on the read side.
    pub segment_by_service: bool,
    pub default_service_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbBusiness {
    /// Resolves the service tag an appointment is stored under. For a
    /// segmented business this is the caller-supplied tag, else the
    /// business default, else untagged. An unsegmented business always
    /// stores its default: the caller's tag must not vary the
    /// `unique_slot` tuple, or two racing bookings for the same time
    /// with different tags would both pass the store-level guard.
    pub fn resolve_service_type(&self, requested: Option<&str>) -> String {
        if !self.segment_by_service {
            return self.default_service_type.as_deref().unwrap_or("").to_string();
        }
        requested
            .or(self.default_service_type.as_deref())
            .unwrap_or("")
            .to_string()
    }

    /// The tag to filter booked times by, `None` when this business does
    /// not segment its calendar by service.
    pub fn booked_filter(&self, requested: Option<&str>) -> Option<String> {
        if self.segment_by_service {
            Some(self.resolve_service_type(requested))
        } else {
            None
        }
    }
}

impl From<DbBusiness> for Business {
    fn from(row: DbBusiness) -> Self {
        Business {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            address: row.address,
            phone: row.phone,
            email: row.email,
            interval_minutes: row.interval_minutes,
            open_hour: row.open_hour,
            close_hour: row.close_hour,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            name: row.name,
            duration_minutes: row.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service_type: String,
    pub created_at: DateTime<Utc>,
}
