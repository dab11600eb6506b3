//! # Slotbook API
//!
//! The API crate provides the web server for the appointment booking
//! service: availability queries, booking intake, and public business
//! information for the tenant sites.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL definitions
//! - **Handlers**: request processing logic
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment configuration
//!
//! The API uses Axum as the web framework and SQLx for database access.
//! Every handler recovers errors into a structured JSON body; nothing is
//! allowed to take the process down.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the booking logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Degraded-mode switch: serve the fixed mock slot list from
    /// `GET /api/slots/` when no business is selected. Off by default.
    pub allow_mock_slots: bool,
}

/// Builds the application router over the shared state. Factored out of
/// [`start_server`] so tests can drive the full router in-process.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability queries
        .merge(routes::availability::routes())
        // Booking intake
        .merge(routes::booking::routes())
        // Public business information
        .merge(routes::business::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the router, applies CORS and
/// timeout layers, and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        allow_mock_slots: config.allow_mock_slots,
    });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
