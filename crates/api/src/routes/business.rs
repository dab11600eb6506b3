use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/businesses/", get(handlers::business::list_businesses))
        .route(
            "/api/businesses/:slug",
            get(handlers::business::get_business),
        )
}
