//! Ledger tests against a real Postgres. Gated on `TEST_DATABASE_URL`
//! like the rest of the database-backed tests: without it each test
//! skips, so the suite stays green on machines without a store.

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use slotbook_db::models::DbBusiness;
use slotbook_db::repositories::appointment::{self, AppointmentInsert, NewAppointment};
use slotbook_db::schema::initialize_database;
use slotbook_db::DbPool;

async fn test_pool() -> Option<DbPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    initialize_database(&pool)
        .await
        .expect("Failed to initialize test database schema");

    Some(pool)
}

async fn create_business(
    pool: &DbPool,
    segment_by_service: bool,
    default_service_type: Option<&str>,
) -> DbBusiness {
    // Fresh slug per run so reruns against the same database never clash.
    let slug = format!("test-{}", Uuid::new_v4());

    sqlx::query_as::<_, DbBusiness>(
        r#"
        INSERT INTO businesses
            (slug, name, interval_minutes, open_hour, close_hour,
             segment_by_service, default_service_type)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, slug, name, description, address, phone, email, logo_ref,
                  interval_minutes, open_hour, close_hour, segment_by_service,
                  default_service_type, created_at
        "#,
    )
    .bind(&slug)
    .bind("Test Business")
    .bind(60)
    .bind(9)
    .bind(17)
    .bind(segment_by_service)
    .bind(default_service_type)
    .fetch_one(pool)
    .await
    .expect("Failed to create test business")
}

fn appointment_at(business: &DbBusiness, requested_tag: Option<&str>) -> NewAppointment {
    NewAppointment {
        business_id: business.id,
        name: "Kiss Anna".to_string(),
        phone: "+36 30 123 4567".to_string(),
        email: "anna@example.com".to_string(),
        date: NaiveDate::from_ymd_opt(2030, 1, 2).expect("valid test date"),
        time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid test time"),
        service_type: business.resolve_service_type(requested_tag),
    }
}

async fn slot_row_count(pool: &DbPool, new: &NewAppointment) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE business_id = $1 AND date = $2 AND time = $3
        "#,
    )
    .bind(new.business_id)
    .bind(new.date)
    .bind(new.time)
    .fetch_one(pool)
    .await
    .expect("Failed to count appointments")
}

#[tokio::test]
async fn booking_the_same_slot_twice_leaves_exactly_one_row() {
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let business = create_business(&pool, true, Some("barber")).await;
    let new = appointment_at(&business, None);

    let first = appointment::create_appointment(&pool, &new)
        .await
        .expect("first insert");
    assert!(matches!(first, AppointmentInsert::Created(_)));

    // The advisory pre-check now sees the slot as taken.
    let existing = appointment::find_appointment(
        &pool,
        business.id,
        new.date,
        new.time,
        business.booked_filter(None).as_deref(),
    )
    .await
    .expect("pre-check");
    assert!(existing.is_some());

    // The constraint, not the pre-check, rejects the second insert.
    let second = appointment::create_appointment(&pool, &new)
        .await
        .expect("second insert resolves without erroring");
    assert!(matches!(second, AppointmentInsert::DuplicateSlot));

    assert_eq!(slot_row_count(&pool, &new).await, 1);
}

#[tokio::test]
async fn unsegmented_tag_variants_collide_on_the_constraint() {
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    // An unsegmented business must land every booking for a time on the
    // same unique_slot tuple no matter what tag the caller sent, or two
    // racing requests with different tags would both insert.
    let business = create_business(&pool, false, None).await;
    let tagged = appointment_at(&business, Some("tax"));
    let untagged = appointment_at(&business, None);
    assert_eq!(tagged.service_type, untagged.service_type);

    let first = appointment::create_appointment(&pool, &tagged)
        .await
        .expect("first insert");
    assert!(matches!(first, AppointmentInsert::Created(_)));

    let second = appointment::create_appointment(&pool, &untagged)
        .await
        .expect("second insert resolves without erroring");
    assert!(matches!(second, AppointmentInsert::DuplicateSlot));

    assert_eq!(slot_row_count(&pool, &untagged).await, 1);
}

#[tokio::test]
async fn booked_times_reflect_inserted_appointments() {
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let business = create_business(&pool, true, Some("massage")).await;
    let new = appointment_at(&business, None);
    appointment::create_appointment(&pool, &new)
        .await
        .expect("insert");

    let booked = appointment::booked_times(
        &pool,
        business.id,
        new.date,
        business.booked_filter(None).as_deref(),
    )
    .await
    .expect("booked times");
    assert!(booked.contains(&new.time));

    // A different tag filter sees nothing for this segmented business.
    let other_tag = appointment::booked_times(&pool, business.id, new.date, Some("barber"))
        .await
        .expect("booked times");
    assert!(!other_tag.contains(&new.time));
}
