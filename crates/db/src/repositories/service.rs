use crate::models::DbService;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_services_by_business(
    pool: &Pool<Postgres>,
    business_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, business_id, name, duration_minutes, created_at
        FROM services
        WHERE business_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn create_service(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    name: &str,
    duration_minutes: i32,
) -> Result<DbService> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating service: id={}, business_id={}, name={}",
        id,
        business_id,
        name
    );

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, business_id, name, duration_minutes)
        VALUES ($1, $2, $3, $4)
        RETURNING id, business_id, name, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(business_id)
    .bind(name)
    .bind(duration_minutes)
    .fetch_one(pool)
    .await?;

    Ok(service)
}
