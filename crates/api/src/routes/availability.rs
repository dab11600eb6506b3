use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/available-times/",
            get(handlers::availability::available_times),
        )
        .route("/api/slots/", get(handlers::availability::available_slots))
}
