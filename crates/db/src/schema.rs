use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create businesses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS businesses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            slug VARCHAR(100) NOT NULL UNIQUE,
            name VARCHAR(100) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            address VARCHAR(255) NOT NULL DEFAULT '',
            phone VARCHAR(20) NOT NULL DEFAULT '',
            email VARCHAR(255) NOT NULL DEFAULT '',
            logo_ref VARCHAR(255) NULL,
            interval_minutes INTEGER NOT NULL DEFAULT 60,
            open_hour INTEGER NOT NULL DEFAULT 9,
            close_hour INTEGER NOT NULL DEFAULT 17,
            segment_by_service BOOLEAN NOT NULL DEFAULT FALSE,
            default_service_type VARCHAR(50) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_interval CHECK (interval_minutes > 0),
            CONSTRAINT valid_office_hours CHECK (
                open_hour >= 0 AND close_hour <= 23 AND open_hour < close_hour
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            business_id UUID NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            name VARCHAR(100) NOT NULL,
            duration_minutes INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. The unique constraint is the
    // authoritative double-booking guard; handler-level checks are
    // advisory only. Untagged appointments store '' in service_type so
    // the constraint applies to them too.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            business_id UUID NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            name VARCHAR(100) NOT NULL,
            phone VARCHAR(20) NOT NULL,
            email VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            time TIME NOT NULL,
            service_type VARCHAR(50) NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_slot UNIQUE (business_id, date, time, service_type)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for index in [
        "CREATE INDEX IF NOT EXISTS idx_services_business_id ON services(business_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_business_date ON appointments(business_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_created_at ON appointments(created_at)",
    ] {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
