//! Public business information: the bootstrap data tenant frontends
//! render (contact details, hours, service catalog).

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use slotbook_core::{
    errors::BookingError,
    models::business::{GetBusinessResponse, ListBusinessesResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_businesses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListBusinessesResponse>, AppError> {
    let businesses = slotbook_db::repositories::business::list_businesses(&state.db_pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ListBusinessesResponse { businesses }))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(slug): Path<String>,
) -> Result<Json<GetBusinessResponse>, AppError> {
    let business = slotbook_db::repositories::business::get_business_by_slug(
        &state.db_pool,
        &slug,
    )
    .await?
    .ok_or_else(|| BookingError::UnknownBusiness(slug.clone()))?;

    let services = slotbook_db::repositories::service::list_services_by_business(
        &state.db_pool,
        business.id,
    )
    .await?
    .into_iter()
    .map(Into::into)
    .collect();

    Ok(Json(GetBusinessResponse {
        business: business.into(),
        services,
    }))
}
