//! Seed bootstrap tests against a real Postgres, gated on
//! `TEST_DATABASE_URL` like the other database-backed tests.

use sqlx::postgres::PgPoolOptions;

use slotbook_db::repositories::{business, service};
use slotbook_db::schema::initialize_database;
use slotbook_db::seed::{seed_default_businesses, DEFAULT_BUSINESSES};
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

#[tokio::test]
async fn force_reseed_restores_missing_seed_services() {
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    seed_default_businesses(&pool, false)
        .await
        .expect("initial seed");

    let seed = &DEFAULT_BUSINESSES[0];
    let row = business::get_business_by_slug(&pool, seed.slug)
        .await
        .expect("lookup")
        .expect("seeded business exists");

    let (dropped_name, _) = seed.services[0];
    sqlx::query("DELETE FROM services WHERE business_id = $1 AND name = $2")
        .bind(row.id)
        .bind(dropped_name)
        .execute(&pool)
        .await
        .expect("delete service");

    // A plain re-run leaves the gap; force brings the catalog back.
    seed_default_businesses(&pool, false)
        .await
        .expect("plain reseed");
    let names = |services: Vec<slotbook_db::models::DbService>| {
        services.into_iter().map(|s| s.name).collect::<Vec<_>>()
    };
    let after_plain = names(
        service::list_services_by_business(&pool, row.id)
            .await
            .expect("list services"),
    );
    assert!(!after_plain.iter().any(|name| name == dropped_name));

    seed_default_businesses(&pool, true)
        .await
        .expect("forced reseed");
    let after_force = names(
        service::list_services_by_business(&pool, row.id)
            .await
            .expect("list services"),
    );
    assert!(after_force.iter().any(|name| name == dropped_name));

    for (name, _) in seed.services {
        assert!(after_force.iter().any(|existing| existing == name));
    }
}
