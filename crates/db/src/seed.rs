//! Idempotent bootstrap of the default businesses. Run through the
//! `seed-businesses` binary; safe to run any number of times. Existing
//! rows are left alone unless `force` is set, and the slug is never
//! touched since it is the immutable identifier.

use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;
use uuid::Uuid;

use crate::repositories::service;

#[derive(Debug, Clone)]
pub struct SeedBusiness {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub interval_minutes: i32,
    pub open_hour: i32,
    pub close_hour: i32,
    pub segment_by_service: bool,
    pub default_service_type: Option<&'static str>,
    pub services: &'static [(&'static str, i32)],
}

pub const DEFAULT_BUSINESSES: &[SeedBusiness] = &[
    SeedBusiness {
        slug: "stilus-fodraszat",
        name: "Stílus Fodrászat",
        description: "Professzionális fodrász szolgáltatások minden korosztály számára.",
        address: "1052 Budapest, Váci utca 15.",
        phone: "+36 1 234 5678",
        email: "info@stilusfodraszat.hu",
        interval_minutes: 30,
        open_hour: 9,
        close_hour: 17,
        segment_by_service: true,
        default_service_type: Some("barber"),
        services: &[("Hajvágás", 30), ("Borotválás", 30), ("Hajfestés", 60)],
    },
    SeedBusiness {
        slug: "harmonia-masszazs",
        name: "Harmónia Masszázs Szalon",
        description: "Relaxáló masszázs és wellness szolgáltatások a belvárosban.",
        address: "1051 Budapest, József Attila utca 12.",
        phone: "+36 1 345 6789",
        email: "info@harmoniamasszazs.hu",
        interval_minutes: 60,
        open_hour: 8,
        close_hour: 16,
        segment_by_service: true,
        default_service_type: Some("massage"),
        services: &[
            ("Svédmasszázs", 60),
            ("Talpmasszázs", 30),
            ("Aromaterápiás masszázs", 60),
        ],
    },
    SeedBusiness {
        slug: "szakertoi-tanacsadas",
        name: "Szakértői Tanácsadás",
        description: "Személyre szabott konzultáció és szakértői tanácsadás.",
        address: "1053 Budapest, Kossuth Lajos utca 8.",
        phone: "+36 1 456 7890",
        email: "info@szakertoi-tanacsadas.hu",
        interval_minutes: 60,
        open_hour: 10,
        close_hour: 17,
        segment_by_service: false,
        default_service_type: None,
        services: &[("Konzultáció", 60)],
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

pub async fn seed_default_businesses(
    pool: &Pool<Postgres>,
    force: bool,
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for business in DEFAULT_BUSINESSES {
        let inserted_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO businesses
                (slug, name, description, address, phone, email, interval_minutes,
                 open_hour, close_hour, segment_by_service, default_service_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (slug) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(business.slug)
        .bind(business.name)
        .bind(business.description)
        .bind(business.address)
        .bind(business.phone)
        .bind(business.email)
        .bind(business.interval_minutes)
        .bind(business.open_hour)
        .bind(business.close_hour)
        .bind(business.segment_by_service)
        .bind(business.default_service_type)
        .fetch_optional(pool)
        .await?;

        match inserted_id {
            Some(id) => {
                summary.created += 1;
                info!("Created business: {} (slug: {})", business.name, business.slug);

                for (name, duration_minutes) in business.services {
                    service::create_service(pool, id, name, *duration_minutes).await?;
                }
            }
            None if force => {
                // Update everything except the slug, which is immutable.
                let id = sqlx::query_scalar::<_, Uuid>(
                    r#"
                    UPDATE businesses
                    SET name = $2, description = $3, address = $4, phone = $5, email = $6,
                        interval_minutes = $7, open_hour = $8, close_hour = $9,
                        segment_by_service = $10, default_service_type = $11
                    WHERE slug = $1
                    RETURNING id
                    "#,
                )
                .bind(business.slug)
                .bind(business.name)
                .bind(business.description)
                .bind(business.address)
                .bind(business.phone)
                .bind(business.email)
                .bind(business.interval_minutes)
                .bind(business.open_hour)
                .bind(business.close_hour)
                .bind(business.segment_by_service)
                .bind(business.default_service_type)
                .fetch_one(pool)
                .await?;

                // Bring the service catalog back in line too: create any
                // seed service that has gone missing. Extra services
                // added administratively are left alone.
                let existing: Vec<String> = service::list_services_by_business(pool, id)
                    .await?
                    .into_iter()
                    .map(|existing_service| existing_service.name)
                    .collect();
                for (name, duration_minutes) in business.services {
                    if !existing.iter().any(|existing_name| existing_name == name) {
                        service::create_service(pool, id, name, *duration_minutes).await?;
                    }
                }

                summary.updated += 1;
                info!("Updated business: {} (slug: {})", business.name, business.slug);
            }
            None => {
                summary.skipped += 1;
                info!(
                    "Business already exists: {} (slug: {})",
                    business.name, business.slug
                );
            }
        }
    }

    Ok(summary)
}
