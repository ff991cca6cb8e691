//! Government Service Guide Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::application::dto::response::ListResponse;
use crate::application::services::CatalogService;
use crate::domain::{CatalogQuery, ServiceGuide};
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn list_guides(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ListResponse<ServiceGuide>> {
    let catalog = CatalogService::new(state.catalog.clone());
    Json(catalog.list_service_guides(&query).into())
}

/// Guide with steps, documents and offices
pub async fn get_guide(
    State(state): State<AppState>,
    Path(guide_id): Path<String>,
) -> Result<Json<ServiceGuide>, AppError> {
    let catalog = CatalogService::new(state.catalog.clone());
    Ok(Json(catalog.get_service_guide(&guide_id)?))
}
