use crate::models::DbBusiness;
use eyre::Result;
use sqlx::{Pool, Postgres};

const BUSINESS_COLUMNS: &str = "id, slug, name, description, address, phone, email, logo_ref, \
     interval_minutes, open_hour, close_hour, segment_by_service, default_service_type, created_at";

pub async fn get_business_by_slug(
    pool: &Pool<Postgres>,
    slug: &str,
) -> Result<Option<DbBusiness>> {
    tracing::debug!("Getting business by slug: {}", slug);

    let business = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        SELECT {BUSINESS_COLUMNS}
        FROM businesses
        WHERE slug = $1
        "#,
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(business)
}

pub async fn list_businesses(pool: &Pool<Postgres>) -> Result<Vec<DbBusiness>> {
    let businesses = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        SELECT {BUSINESS_COLUMNS}
        FROM businesses
        ORDER BY name ASC
        "#,
    ))
    .fetch_all(pool)
    .await?;

    Ok(businesses)
}
