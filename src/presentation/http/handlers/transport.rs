//! Transport Directory Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::application::dto::request::TransportQuery;
use crate::application::dto::response::ListResponse;
use crate::application::services::CatalogService;
use crate::domain::TransportHub;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List transport hubs, filtered by `?q=` and `?kind=`
pub async fn list_hubs(
    State(state): State<AppState>,
    Query(query): Query<TransportQuery>,
) -> Json<ListResponse<TransportHub>> {
    let catalog = CatalogService::new(state.catalog.clone());
    Json(catalog.list_transport_hubs(&query.into()).into())
}

pub async fn get_hub(
    State(state): State<AppState>,
    Path(hub_id): Path<String>,
) -> Result<Json<TransportHub>, AppError> {
    let catalog = CatalogService::new(state.catalog.clone());
    Ok(Json(catalog.get_transport_hub(&hub_id)?))
}
