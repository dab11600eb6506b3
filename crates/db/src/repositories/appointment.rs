use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAppointment;

const APPOINTMENT_COLUMNS: &str =
    "id, business_id, name, phone, email, date, time, service_type, created_at";

/// Fields of a validated booking ready for insertion.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub business_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Resolved tag; empty string for untagged.
    pub service_type: String,
}

/// Outcome of an insert attempt. `DuplicateSlot` is the unique constraint
/// firing, which is the authoritative already-booked signal.
#[derive(Debug)]
pub enum AppointmentInsert {
    Created(DbAppointment),
    DuplicateSlot,
}

/// Returns the distinct times already booked for a business on a date.
/// When `service_type` is `Some`, only appointments with that tag count;
/// businesses that do not segment by service pass `None`.
pub async fn booked_times(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    date: NaiveDate,
    service_type: Option<&str>,
) -> Result<Vec<NaiveTime>> {
    tracing::debug!(
        "Getting booked times: business_id={}, date={}, service_type={:?}",
        business_id,
        date,
        service_type
    );

    let times = match service_type {
        Some(tag) => {
            sqlx::query_scalar::<_, NaiveTime>(
                r#"
                SELECT DISTINCT time
                FROM appointments
                WHERE business_id = $1 AND date = $2 AND service_type = $3
                "#,
            )
            .bind(business_id)
            .bind(date)
            .bind(tag)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_scalar::<_, NaiveTime>(
                r#"
                SELECT DISTINCT time
                FROM appointments
                WHERE business_id = $1 AND date = $2
                "#,
            )
            .bind(business_id)
            .bind(date)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(times)
}

/// Advisory pre-check for an appointment occupying the exact slot. The
/// unique constraint remains the real guard; this only buys a friendlier
/// error message on the common path.
pub async fn find_appointment(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
    service_type: Option<&str>,
) -> Result<Option<DbAppointment>> {
    let appointment = match service_type {
        Some(tag) => {
            sqlx::query_as::<_, DbAppointment>(&format!(
                r#"
                SELECT {APPOINTMENT_COLUMNS}
                FROM appointments
                WHERE business_id = $1 AND date = $2 AND time = $3 AND service_type = $4
                LIMIT 1
                "#,
            ))
            .bind(business_id)
            .bind(date)
            .bind(time)
            .bind(tag)
            .fetch_optional(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbAppointment>(&format!(
                r#"
                SELECT {APPOINTMENT_COLUMNS}
                FROM appointments
                WHERE business_id = $1 AND date = $2 AND time = $3
                LIMIT 1
                "#,
            ))
            .bind(business_id)
            .bind(date)
            .bind(time)
            .fetch_optional(pool)
            .await?
        }
    };

    Ok(appointment)
}

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    new: &NewAppointment,
) -> Result<AppointmentInsert> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, business_id={}, date={}, time={}",
        id,
        new.business_id,
        new.date,
        new.time
    );

    let inserted = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO appointments (id, business_id, name, phone, email, date, time, service_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {APPOINTMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(new.business_id)
    .bind(&new.name)
    .bind(&new.phone)
    .bind(&new.email)
    .bind(new.date)
    .bind(new.time)
    .bind(&new.service_type)
    .bind(now)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(appointment) => Ok(AppointmentInsert::Created(appointment)),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!(
                "Appointment insert hit unique_slot: business_id={}, date={}, time={}",
                new.business_id,
                new.date,
                new.time
            );
            Ok(AppointmentInsert::DuplicateSlot)
        }
        Err(err) => Err(err.into()),
    }
}
